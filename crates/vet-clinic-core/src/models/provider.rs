//! Supplier records.

use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::form::Form;

/// A supplier of products and medicines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderFields {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl Provider {
    pub fn from_fields(id: RecordId, fields: ProviderFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            address: fields.address,
        }
    }

    pub fn to_form(&self) -> Form {
        Form::new()
            .with("name", &self.name)
            .with("email", &self.email)
            .with("address", &self.address)
    }
}
