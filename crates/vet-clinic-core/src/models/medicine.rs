//! Medicine records.

use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::form::Form;

/// Smallest accepted dose.
pub const MIN_DOSE: f64 = 1.0;
/// Largest accepted dose.
pub const MAX_DOSE: f64 = 10.0;

/// A medicine kept in the clinic's formulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    /// Dose, within [`MIN_DOSE`, `MAX_DOSE`]
    pub dose: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicineFields {
    pub name: String,
    pub description: String,
    pub dose: f64,
}

impl Medicine {
    pub fn from_fields(id: RecordId, fields: MedicineFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            dose: fields.dose,
        }
    }

    pub fn to_form(&self) -> Form {
        Form::new()
            .with("name", &self.name)
            .with("description", &self.description)
            .with_number("dose", self.dose)
    }
}

/// Check if a dose lies in the accepted closed interval.
pub fn is_dose_in_range(dose: f64) -> bool {
    (MIN_DOSE..=MAX_DOSE).contains(&dose)
}
