//! Appointment records.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::form::Form;

/// A scheduled visit of a pet with a vet.
///
/// Double booking is not prevented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: RecordId,
    pub pet_id: RecordId,
    pub vet_id: RecordId,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentFields {
    pub pet_id: RecordId,
    pub vet_id: RecordId,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Appointment {
    pub fn from_fields(id: RecordId, fields: AppointmentFields) -> Self {
        Self {
            id,
            pet_id: fields.pet_id,
            vet_id: fields.vet_id,
            date: fields.date,
            time: fields.time,
        }
    }

    pub fn to_form(&self) -> Form {
        Form::new()
            .with_id("pet", self.pet_id)
            .with_id("vet", self.vet_id)
            .with_date("date", self.date)
            .with_time("time", self.time)
    }
}
