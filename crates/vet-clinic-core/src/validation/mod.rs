//! Field validation for every record kind.
//!
//! Each kind has a `parse_*` function that turns a [`Form`] into the typed
//! payload or the full set of field errors, and a `validate_*` wrapper that
//! only reports the errors. Missing fields are never an `Err` of their own;
//! they show up as entries in [`FieldErrors`].
//!
//! Validators are pure. Anything time dependent takes the evaluation date
//! as an argument.

pub mod messages;

mod catalog;
mod clinical;
mod contacts;

pub use catalog::*;
pub use clinical::*;
pub use contacts::*;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::form::Form;
use crate::models::RecordId;

/// Mapping from field key to a human-readable message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any earlier message for the same key.
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keys with an error, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        f.write_str(&fields.join(", "))
    }
}

/// Collects errors while pulling typed values out of a form.
///
/// Every accessor that returns `None` has recorded an error, so a payload
/// whose parts are all `Some` is valid.
pub(crate) struct FieldCheck<'a> {
    form: &'a Form,
    errors: FieldErrors,
}

impl<'a> FieldCheck<'a> {
    pub(crate) fn new(form: &'a Form) -> Self {
        Self {
            form,
            errors: FieldErrors::new(),
        }
    }

    pub(crate) fn fail(&mut self, field: &str, message: &str) {
        self.errors.insert(field, message);
    }

    pub(crate) fn optional(&self, field: &str) -> Option<&'a str> {
        self.form.get(field)
    }

    pub(crate) fn required(&mut self, field: &str, message: &str) -> Option<&'a str> {
        let value = self.form.get(field);
        if value.is_none() {
            self.fail(field, message);
        }
        value
    }

    /// Required email; anything containing an "@" is accepted.
    pub(crate) fn email(&mut self, field: &str) -> Option<&'a str> {
        let value = self.required(field, messages::EMAIL_REQUIRED)?;
        if !is_email_like(value) {
            self.fail(field, messages::EMAIL_INVALID);
            return None;
        }
        Some(value)
    }

    pub(crate) fn number(&mut self, field: &str, required: &str, invalid: &str) -> Option<f64> {
        let raw = self.required(field, required)?;
        let value = parse_number(raw);
        if value.is_none() {
            self.fail(field, invalid);
        }
        value
    }

    pub(crate) fn decimal(&mut self, field: &str, required: &str, invalid: &str) -> Option<Decimal> {
        let raw = self.required(field, required)?;
        let value = parse_decimal(raw);
        if value.is_none() {
            self.fail(field, invalid);
        }
        value
    }

    pub(crate) fn id(&mut self, field: &str, required: &str, invalid: &str) -> Option<RecordId> {
        let raw = self.required(field, required)?;
        let value = parse_id(raw);
        if value.is_none() {
            self.fail(field, invalid);
        }
        value
    }

    pub(crate) fn date(&mut self, field: &str, required: &str, invalid: &str) -> Option<NaiveDate> {
        let raw = self.required(field, required)?;
        let value = parse_date(raw);
        if value.is_none() {
            self.fail(field, invalid);
        }
        value
    }

    pub(crate) fn time(&mut self, field: &str, required: &str, invalid: &str) -> Option<NaiveTime> {
        let raw = self.required(field, required)?;
        let value = parse_time(raw);
        if value.is_none() {
            self.fail(field, invalid);
        }
        value
    }

    pub(crate) fn finish<T>(self, payload: Option<T>) -> Result<T, FieldErrors> {
        match payload {
            Some(payload) if self.errors.is_empty() => Ok(payload),
            _ => Err(self.errors),
        }
    }
}

/// Loose email check: at least one "@".
pub fn is_email_like(value: &str) -> bool {
    value.contains('@')
}

/// Parse decimal text; rejects NaN and infinities.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse exact decimal text, as used for money.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// Parse a positive record identity.
pub fn parse_id(raw: &str) -> Option<RecordId> {
    raw.trim().parse::<RecordId>().ok().filter(|id| *id > 0)
}

/// Parse `YYYY-MM-DD`, or take the date part of an ISO datetime.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|dt| dt.date())
    })
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}
