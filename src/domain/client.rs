use serde::{Deserialize, Serialize};

use crate::domain::types::{
    City, ClientEmail, ClientId, ClientName, ClientSurname, ClientType, Country, DocumentNumber,
    DocumentType, PaymentMethod, PhoneNumber,
};

/// Persisted client record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub surname: ClientSurname,
    pub document_type: DocumentType,
    pub document_number: DocumentNumber,
    pub client_type: ClientType,
    pub country: Country,
    pub city: City,
    pub email: ClientEmail,
    pub phone: PhoneNumber,
    pub payment_method: PaymentMethod,
}

impl Client {
    /// Contact subset exposed by the point lookup.
    pub fn contact(&self) -> ClientContact {
        ClientContact {
            country: self.country.clone(),
            city: self.city.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Natural key used for duplicate detection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientKey {
    pub name: ClientName,
    pub surname: ClientSurname,
    pub client_type: ClientType,
}

/// Validated client data ready to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub name: ClientName,
    pub surname: ClientSurname,
    pub document_type: DocumentType,
    pub document_number: DocumentNumber,
    pub client_type: ClientType,
    pub country: Country,
    pub city: City,
    pub email: ClientEmail,
    pub phone: PhoneNumber,
    pub payment_method: PaymentMethod,
}

impl NewClient {
    pub fn key(&self) -> ClientKey {
        ClientKey {
            name: self.name.clone(),
            surname: self.surname.clone(),
            client_type: self.client_type,
        }
    }
}

/// Location and phone of a client; every other field is withheld.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientContact {
    pub country: Country,
    pub city: City,
    pub phone: PhoneNumber,
}
