//! Domain aggregates exposed by the client registry service layer.

pub mod client;
pub mod image;
pub mod types;
