//! Client (pet owner) records.

use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::form::Form;

/// A clinic client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Postal address, empty when not given
    pub address: String,
}

/// Validated client payload, without identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Client {
    pub fn from_fields(id: RecordId, fields: ClientFields) -> Self {
        Self {
            id,
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
            address: fields.address,
        }
    }

    /// Current values as a form, the base for partial updates.
    pub fn to_form(&self) -> Form {
        Form::new()
            .with("name", &self.name)
            .with("phone", &self.phone)
            .with("email", &self.email)
            .with("address", &self.address)
    }
}
