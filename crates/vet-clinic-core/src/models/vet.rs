//! Veterinarian records.

use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::form::Form;

/// A veterinarian working at the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vet {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Validated vet payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VetFields {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Vet {
    pub fn from_fields(id: RecordId, fields: VetFields) -> Self {
        Self {
            id,
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
        }
    }

    pub fn to_form(&self) -> Form {
        Form::new()
            .with("name", &self.name)
            .with("phone", &self.phone)
            .with("email", &self.email)
    }
}
