//! Client registration and lookup forms.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use serde::Deserialize;

use crate::domain::client::NewClient;
use crate::domain::image::ImageAttachment;
use crate::domain::types::{
    City, ClientEmail, ClientName, ClientSurname, ClientType, Country, DocumentNumber,
    DocumentType, ImageContentType, PaymentMethod, PhoneNumber,
};
use crate::forms::FormError;

/// Multipart body of `POST /clientes`.
#[derive(MultipartForm)]
pub struct RegisterClientForm {
    pub nombre: Option<Text<String>>,
    pub apellido: Option<Text<String>>,
    #[multipart(rename = "tipoDocumento")]
    pub tipo_documento: Option<Text<String>>,
    #[multipart(rename = "nroDocumento")]
    pub nro_documento: Option<Text<String>>,
    pub tipo: Option<Text<String>>,
    pub pais: Option<Text<String>>,
    pub ciudad: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub telefono: Option<Text<String>>,
    #[multipart(rename = "modalidadPago")]
    pub modalidad_pago: Option<Text<String>>,
    #[multipart(rename = "fotoDelCliente", limit = "10MB")]
    pub foto_del_cliente: Option<TempFile>,
}

impl RegisterClientForm {
    /// Reads the uploaded photo into memory and flattens the text parts.
    pub fn into_input(self) -> std::io::Result<RegisterClientInput> {
        let image = match self.foto_del_cliente {
            Some(file) => {
                let bytes = std::fs::read(file.file.path())?;
                Some(ImageAttachment::new(
                    bytes,
                    file.content_type.map(|mime| mime.to_string()),
                    file.file_name,
                ))
            }
            None => None,
        };

        Ok(RegisterClientInput {
            nombre: self.nombre.map(Text::into_inner),
            apellido: self.apellido.map(Text::into_inner),
            tipo_documento: self.tipo_documento.map(Text::into_inner),
            nro_documento: self.nro_documento.map(Text::into_inner),
            tipo: self.tipo.map(Text::into_inner),
            pais: self.pais.map(Text::into_inner),
            ciudad: self.ciudad.map(Text::into_inner),
            email: self.email.map(Text::into_inner),
            telefono: self.telefono.map(Text::into_inner),
            modalidad_pago: self.modalidad_pago.map(Text::into_inner),
            image,
        })
    }
}

/// Untrusted registration fields exactly as received.
#[derive(Clone, Debug, Default)]
pub struct RegisterClientInput {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub tipo_documento: Option<String>,
    pub nro_documento: Option<String>,
    pub tipo: Option<String>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub modalidad_pago: Option<String>,
    pub image: Option<ImageAttachment>,
}

/// Registration data that passed every rule.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterClientPayload {
    pub client: NewClient,
    pub image: ImageAttachment,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A file part with no content (form posted with no file chosen) counts as absent.
fn present_image(image: &Option<ImageAttachment>) -> Option<&ImageAttachment> {
    image.as_ref().filter(|image| !image.bytes.is_empty())
}

impl TryFrom<RegisterClientInput> for RegisterClientPayload {
    type Error = FormError;

    /// Applies the registration rules in their fixed order; the first
    /// violation is returned and nothing after it is checked.
    fn try_from(input: RegisterClientInput) -> Result<Self, Self::Error> {
        let (
            Some(nombre),
            Some(apellido),
            Some(email),
            Some(tipo_documento),
            Some(nro_documento),
            Some(tipo),
            Some(pais),
            Some(ciudad),
            Some(telefono),
            Some(image),
        ) = (
            present(&input.nombre),
            present(&input.apellido),
            present(&input.email),
            present(&input.tipo_documento),
            present(&input.nro_documento),
            present(&input.tipo),
            present(&input.pais),
            present(&input.ciudad),
            present(&input.telefono),
            present_image(&input.image),
        )
        else {
            return Err(FormError::MissingFields);
        };

        let document_type: DocumentType = tipo_documento
            .parse()
            .map_err(|_| FormError::InvalidDocumentType)?;

        let payment_method = match present(&input.modalidad_pago) {
            Some(raw) => raw
                .parse::<PaymentMethod>()
                .map_err(|_| FormError::InvalidPaymentMethod)?,
            None => PaymentMethod::default(),
        };

        let client_type: ClientType = tipo.parse().map_err(|_| FormError::InvalidClientType)?;
        let email = ClientEmail::new(email).map_err(|_| FormError::InvalidEmail)?;
        let document_number =
            DocumentNumber::new(nro_documento).map_err(|_| FormError::InvalidDocumentNumber)?;
        let phone = PhoneNumber::new(telefono).map_err(|_| FormError::InvalidPhoneNumber)?;
        ImageContentType::new(image.content_type.clone().unwrap_or_default())
            .map_err(|_| FormError::InvalidImageType)?;

        // Presence was checked above, so these only trim.
        let name = ClientName::new(nombre).map_err(|_| FormError::MissingFields)?;
        let surname = ClientSurname::new(apellido).map_err(|_| FormError::MissingFields)?;
        let country = Country::new(pais).map_err(|_| FormError::MissingFields)?;
        let city = City::new(ciudad).map_err(|_| FormError::MissingFields)?;

        let client = NewClient {
            name,
            surname,
            document_type,
            document_number,
            client_type,
            country,
            city,
            email,
            phone,
            payment_method,
        };

        Ok(Self {
            client,
            image: image.clone(),
        })
    }
}

/// Query string of `GET /clientes/consultar`.
#[derive(Debug, Default, Deserialize)]
pub struct ClientLookupForm {
    pub id: Option<String>,
    pub tipo: Option<String>,
}

/// Lookup parameters after presence and type checks.
///
/// `id` is kept raw: an id that does not name a row, numeric or not, is a
/// not-found outcome rather than a form error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientLookupPayload {
    pub id: String,
    pub client_type: ClientType,
}

impl TryFrom<ClientLookupForm> for ClientLookupPayload {
    type Error = FormError;

    fn try_from(form: ClientLookupForm) -> Result<Self, Self::Error> {
        let (Some(id), Some(tipo)) = (present(&form.id), present(&form.tipo)) else {
            return Err(FormError::MissingLookupParams);
        };

        let client_type = tipo.parse().map_err(|_| FormError::InvalidClientType)?;

        Ok(Self {
            id: id.to_string(),
            client_type,
        })
    }
}
