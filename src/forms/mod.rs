//! Form definitions backing the client routes.

use thiserror::Error;

pub mod clients;

#[derive(Debug, Error, PartialEq, Eq)]
/// Rule violations reported back to the caller, one message per rule.
pub enum FormError {
    #[error(
        "Completar datos obligatorios: nombre, apellido, email, tipoDocumento, nroDocumento, tipo, pais, ciudad, fotoDelCliente y telefono."
    )]
    MissingFields,

    #[error("Tipo de documento incorrecto. Debe ser uno de: DNI, LE, LC, PASAPORTE.")]
    InvalidDocumentType,

    #[error("Modalidad de pago incorrecta. Debe ser una de: EFECTIVO, TARJETA, MERCADO_PAGO.")]
    InvalidPaymentMethod,

    #[error("Tipo de cliente incorrecto. Debe ser de tipo: INDI o CORPO.")]
    InvalidClientType,

    #[error("Formato de correo electrónico inválido.")]
    InvalidEmail,

    #[error("El numero de documento tiene que ser un numero valido.")]
    InvalidDocumentNumber,

    #[error("Formato de numero de telefono invalido. Debe contener 10 digitos.")]
    InvalidPhoneNumber,

    #[error("La foto del cliente debe ser JPG o JPEG valido.")]
    InvalidImageType,

    #[error("Debe ingresar tanto el ID como el tipo del cliente que desea consultar.")]
    MissingLookupParams,
}
