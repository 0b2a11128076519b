//! Crate-level error type.

use thiserror::Error;

use crate::db::DbError;
use crate::models::{RecordId, RecordKind};

/// Errors surfaced by [`crate::Clinic`] operations.
///
/// Field validation failures are not errors; they come back as
/// [`crate::SaveOutcome::Invalid`].
#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Not found: {kind} with id {id}")]
    NotFound { kind: RecordKind, id: RecordId },
}

impl ClinicError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClinicError::NotFound { .. })
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;
