//! Pet (patient) records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::form::Form;

/// A pet owned by a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: RecordId,
    pub name: String,
    pub breed: String,
    /// Always before the date the record was validated
    pub birthday: NaiveDate,
    /// Owning client
    pub client_id: RecordId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetFields {
    pub name: String,
    pub breed: String,
    pub birthday: NaiveDate,
    pub client_id: RecordId,
}

impl Pet {
    pub fn from_fields(id: RecordId, fields: PetFields) -> Self {
        Self {
            id,
            name: fields.name,
            breed: fields.breed,
            birthday: fields.birthday,
            client_id: fields.client_id,
        }
    }

    pub fn to_form(&self) -> Form {
        Form::new()
            .with("name", &self.name)
            .with("breed", &self.breed)
            .with_date("birthday", self.birthday)
            .with_id("client", self.client_id)
    }

    /// Age in whole years as of `today`.
    pub fn age_years(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birthday).unwrap_or(0)
    }
}
