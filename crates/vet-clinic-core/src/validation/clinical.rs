//! Validators for pets and appointments.

use chrono::NaiveDate;

use super::messages::*;
use super::{parse_date, FieldCheck, FieldErrors};
use crate::form::Form;
use crate::models::{AppointmentFields, PetFields};

/// Key used when a birthday is given but unusable.
pub const INVALID_BIRTHDAY: &str = "invalid_birthday";

/// Parse a pet form.
///
/// A birthday that does not parse, or is not strictly before `today`, is
/// reported under [`INVALID_BIRTHDAY`] rather than `birthday`, which is kept
/// for the missing case.
pub fn parse_pet(form: &Form, today: NaiveDate) -> Result<PetFields, FieldErrors> {
    let mut check = FieldCheck::new(form);
    let name = check.required("name", PET_NAME_REQUIRED);
    let breed = check.required("breed", BREED_REQUIRED);
    let birthday = check
        .required("birthday", BIRTHDAY_REQUIRED)
        .and_then(|raw| match parse_date(raw) {
            Some(date) if date < today => Some(date),
            _ => {
                check.fail(INVALID_BIRTHDAY, BIRTHDAY_INVALID);
                None
            }
        });
    let client_id = check.id("client", CLIENT_REQUIRED, CLIENT_INVALID);

    let fields = match (name, breed, birthday, client_id) {
        (Some(name), Some(breed), Some(birthday), Some(client_id)) => Some(PetFields {
            name: name.to_string(),
            breed: breed.to_string(),
            birthday,
            client_id,
        }),
        _ => None,
    };
    check.finish(fields)
}

pub fn validate_pet(form: &Form, today: NaiveDate) -> FieldErrors {
    parse_pet(form, today).err().unwrap_or_default()
}

/// Parse an appointment form. Availability is not checked.
pub fn parse_appointment(form: &Form) -> Result<AppointmentFields, FieldErrors> {
    let mut check = FieldCheck::new(form);
    let pet_id = check.id("pet", PET_REQUIRED, PET_INVALID);
    let vet_id = check.id("vet", VET_REQUIRED, VET_INVALID);
    let date = check.date("date", DATE_REQUIRED, DATE_INVALID);
    let time = check.time("time", TIME_REQUIRED, TIME_INVALID);

    let fields = match (pet_id, vet_id, date, time) {
        (Some(pet_id), Some(vet_id), Some(date), Some(time)) => Some(AppointmentFields {
            pet_id,
            vet_id,
            date,
            time,
        }),
        _ => None,
    };
    check.finish(fields)
}

pub fn validate_appointment(form: &Form) -> FieldErrors {
    parse_appointment(form).err().unwrap_or_default()
}
