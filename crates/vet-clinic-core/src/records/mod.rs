//! Record lifecycle: the shared capability every kind implements and the
//! [`Clinic`] service that runs validate-then-persist.

mod clinic;
mod kinds;

pub use clinic::*;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::db::{Database, DbResult};
use crate::form::Form;
use crate::models::{RecordId, RecordKind};
use crate::validation::FieldErrors;

/// What every stored record kind can do.
///
/// Kinds are independent types; this trait only captures the common
/// validate / insert / update shape.
pub trait Record: Sized {
    /// Validated payload without identity.
    type Fields;

    const KIND: RecordKind;

    fn id(&self) -> RecordId;

    /// Current values rendered as a form.
    fn as_form(&self) -> Form;

    /// Run the kind's validator, producing the typed payload.
    fn parse(form: &Form, today: NaiveDate) -> Result<Self::Fields, FieldErrors>;

    /// Reference fields pointing at records that do not exist.
    fn missing_references(_db: &Database, _fields: &Self::Fields) -> DbResult<FieldErrors> {
        Ok(FieldErrors::new())
    }

    fn insert(db: &Database, fields: &Self::Fields) -> DbResult<Self>;

    /// Overwrite a stored record. `None` when no record has that id.
    fn write(db: &Database, id: RecordId, fields: Self::Fields) -> DbResult<Option<Self>>;

    fn fetch(db: &Database, id: RecordId) -> DbResult<Option<Self>>;

    fn fetch_all(db: &Database) -> DbResult<Vec<Self>>;
}

/// Result of a create or update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SaveOutcome<R> {
    /// Written to the store
    Saved(R),
    /// Rejected by validation, nothing written
    Invalid(FieldErrors),
}

impl<R> SaveOutcome<R> {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }

    pub fn record(&self) -> Option<&R> {
        match self {
            SaveOutcome::Saved(record) => Some(record),
            SaveOutcome::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            SaveOutcome::Saved(_) => None,
            SaveOutcome::Invalid(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<R, FieldErrors> {
        match self {
            SaveOutcome::Saved(record) => Ok(record),
            SaveOutcome::Invalid(errors) => Err(errors),
        }
    }
}

/// Source of the evaluation date for date-sensitive rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Local calendar date at the time of the call
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}
