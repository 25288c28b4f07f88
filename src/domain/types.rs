//! Strongly-typed value objects used by domain entities.
//!
//! Every constructor here is a single-field validator: once a value reaches
//! the domain layer it can be treated as trusted. The ordering of the checks
//! across fields lives in [`crate::forms::clients`].
use std::fmt::{Display, Formatter};
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Document type outside of the supported set.
    #[error("invalid document type: {0}")]
    InvalidDocumentType(String),
    /// Client type outside of the supported set.
    #[error("invalid client type: {0}")]
    InvalidClientType(String),
    /// Payment method outside of the supported set.
    #[error("invalid payment method: {0}")]
    InvalidPaymentMethod(String),
    /// Document number contained something other than ASCII digits.
    #[error("invalid document number")]
    InvalidDocumentNumber,
    /// Phone number was not exactly ten digits.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Declared content type does not describe a JPEG image.
    #[error("unsupported image type: {0}")]
    InvalidImageType(String),
}

/// Trims and validates an email string; case is kept as entered.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_string();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Unique identifier for a client, assigned by the repository on insert.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClientId(i32);

impl ClientId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ClientId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientId> for i32 {
    fn from(value: ClientId) -> Self {
        value.0
    }
}

/// Lower-cased and validated client contact address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClientEmail(String);

impl ClientEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ClientEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ClientEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

non_empty_string_newtype!(ClientName, "Client first name.");
non_empty_string_newtype!(ClientSurname, "Client surname.");
non_empty_string_newtype!(Country, "Country the client resides in.");
non_empty_string_newtype!(City, "City the client resides in.");

/// Identity document number, digits only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DocumentNumber(String);

impl DocumentNumber {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?.into_inner();
        if inner.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(inner))
        } else {
            Err(TypeConstraintError::InvalidDocumentNumber)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DocumentNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Local phone number made of exactly ten ASCII digits.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const DIGITS: usize = 10;

    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?.into_inner();
        if inner.len() == Self::DIGITS && inner.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(inner))
        } else {
            Err(TypeConstraintError::InvalidPhone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of identity document presented by the client.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Dni,
    Le,
    Lc,
    Pasaporte,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [Self::Dni, Self::Le, Self::Lc, Self::Pasaporte];

    pub const fn as_str(self) -> &'static str {
        match self {
            DocumentType::Dni => "DNI",
            DocumentType::Le => "LE",
            DocumentType::Lc => "LC",
            DocumentType::Pasaporte => "PASAPORTE",
        }
    }
}

impl Display for DocumentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document types are matched exactly; `dni` is rejected.
impl FromStr for DocumentType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| TypeConstraintError::InvalidDocumentType(value.to_string()))
    }
}

/// Individual or corporate client. Part of the natural key.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientType {
    Indi,
    Corpo,
}

impl ClientType {
    pub const ALL: [ClientType; 2] = [Self::Indi, Self::Corpo];

    pub const fn as_str(self) -> &'static str {
        match self {
            ClientType::Indi => "INDI",
            ClientType::Corpo => "CORPO",
        }
    }
}

impl Display for ClientType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `indi` and `INDI` parse to the same value.
impl FromStr for ClientType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or(TypeConstraintError::InvalidClientType(value))
    }
}

/// Preferred payment method. Defaults to cash.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Efectivo,
    Tarjeta,
    MercadoPago,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Efectivo, Self::Tarjeta, Self::MercadoPago];

    pub const fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Efectivo => "EFECTIVO",
            PaymentMethod::Tarjeta => "TARJETA",
            PaymentMethod::MercadoPago => "MERCADO_PAGO",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts any case and the legacy spelling `MERCADO PAGO`.
impl FromStr for PaymentMethod {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_uppercase().replace(' ', "_");
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or(TypeConstraintError::InvalidPaymentMethod(value))
    }
}

/// Declared MIME type of an uploaded client photo.
///
/// Only the declared type is inspected: anything mentioning `jpg` or `jpeg`
/// (case-insensitive) is accepted. The bytes themselves are never sniffed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageContentType(String);

impl ImageContentType {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let lowered = value.to_lowercase();
        if lowered.contains("jpg") || lowered.contains("jpeg") {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidImageType(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
