use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{
    client::{Client as DomainClient, NewClient as DomainNewClient},
    types::{
        City, ClientEmail, ClientId, ClientName, ClientSurname, Country, DocumentNumber,
        PhoneNumber, TypeConstraintError,
    },
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub document_type: String,
    pub document_number: String,
    pub client_type: String,
    pub country: String,
    pub city: String,
    pub email: String,
    pub phone: String,
    pub payment_method: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub document_type: &'static str,
    pub document_number: &'a str,
    pub client_type: &'static str,
    pub country: &'a str,
    pub city: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub payment_method: &'static str,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::new(client.id)?,
            name: ClientName::new(client.name)?,
            surname: ClientSurname::new(client.surname)?,
            document_type: client.document_type.parse()?,
            document_number: DocumentNumber::new(client.document_number)?,
            client_type: client.client_type.parse()?,
            country: Country::new(client.country)?,
            city: City::new(client.city)?,
            email: ClientEmail::new(client.email)?,
            phone: PhoneNumber::new(client.phone)?,
            payment_method: client.payment_method.parse()?,
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: client.name.as_str(),
            surname: client.surname.as_str(),
            document_type: client.document_type.as_str(),
            document_number: client.document_number.as_str(),
            client_type: client.client_type.as_str(),
            country: client.country.as_str(),
            city: client.city.as_str(),
            email: client.email.as_str(),
            phone: client.phone.as_str(),
            payment_method: client.payment_method.as_str(),
        }
    }
}
