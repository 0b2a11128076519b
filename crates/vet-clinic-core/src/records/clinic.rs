//! The clinic service: validate, then persist.

use chrono::NaiveDate;

use super::{Clock, Record, SaveOutcome};
use crate::config::ClinicConfig;
use crate::db::Database;
use crate::error::{ClinicError, ClinicResult};
use crate::form::Form;
use crate::models::RecordId;
use crate::validation::FieldErrors;

/// Entry point for record operations.
///
/// Each call is one synchronous validate-then-persist step. Callers that
/// share a `Clinic` across threads wrap it in a `Mutex`.
pub struct Clinic {
    db: Database,
    clock: Clock,
}

impl Clinic {
    pub fn new(db: Database) -> Self {
        Self::with_clock(db, Clock::System)
    }

    pub fn with_clock(db: Database, clock: Clock) -> Self {
        Self { db, clock }
    }

    /// Open the store named by `config`, creating the schema if needed.
    pub fn open(config: &ClinicConfig) -> ClinicResult<Self> {
        let db = Database::open_location(&config.database)?;
        let clock = config.today.map(Clock::Fixed).unwrap_or_default();
        tracing::info!(database = ?config.database, ?clock, "clinic database ready");
        Ok(Self::with_clock(db, clock))
    }

    pub fn open_in_memory() -> ClinicResult<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// The evaluation date for date-sensitive rules.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Run the validator for `R` without touching the store.
    pub fn validate<R: Record>(&self, form: &Form) -> FieldErrors {
        R::parse(form, self.today()).err().unwrap_or_default()
    }

    /// Validate `form` and insert a new record if it passes.
    pub fn create<R: Record>(&self, form: &Form) -> ClinicResult<SaveOutcome<R>> {
        let fields = match self.check::<R>(form)? {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(kind = %R::KIND, fields = %errors, "create rejected");
                return Ok(SaveOutcome::Invalid(errors));
            }
        };

        let record = R::insert(&self.db, &fields)?;
        tracing::info!(kind = %R::KIND, id = record.id(), "record created");
        Ok(SaveOutcome::Saved(record))
    }

    /// Load record `id` and apply a partial update to it.
    pub fn update<R: Record>(&self, id: RecordId, partial: &Form) -> ClinicResult<SaveOutcome<R>> {
        let existing = self.get::<R>(id)?;
        self.update_record(&existing, partial)
    }

    /// Apply a partial update to `existing`.
    ///
    /// Fields present and non-empty in `partial` replace the stored values;
    /// everything else is kept. The merged record is validated again and
    /// nothing is written when it fails.
    pub fn update_record<R: Record>(
        &self,
        existing: &R,
        partial: &Form,
    ) -> ClinicResult<SaveOutcome<R>> {
        let id = existing.id();
        let merged = existing.as_form().merged_with(partial);

        let fields = match self.check::<R>(&merged)? {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(kind = %R::KIND, id, fields = %errors, "update rejected");
                return Ok(SaveOutcome::Invalid(errors));
            }
        };

        match R::write(&self.db, id, fields)? {
            Some(record) => {
                tracing::info!(kind = %R::KIND, id, "record updated");
                Ok(SaveOutcome::Saved(record))
            }
            None => Err(self.not_found::<R>(id)),
        }
    }

    /// Get a record by id.
    pub fn get<R: Record>(&self, id: RecordId) -> ClinicResult<R> {
        R::fetch(&self.db, id)?.ok_or_else(|| self.not_found::<R>(id))
    }

    pub fn list<R: Record>(&self) -> ClinicResult<Vec<R>> {
        Ok(R::fetch_all(&self.db)?)
    }

    pub fn count<R: Record>(&self) -> ClinicResult<usize> {
        Ok(self.db.count_records(R::KIND)?)
    }

    /// Delete a record and, through foreign keys, everything that depends on it.
    pub fn delete<R: Record>(&self, id: RecordId) -> ClinicResult<()> {
        if !self.db.delete_record(R::KIND, id)? {
            return Err(self.not_found::<R>(id));
        }
        tracing::info!(kind = %R::KIND, id, "record deleted");
        Ok(())
    }

    /// Pure validation followed by reference checks against the store.
    fn check<R: Record>(&self, form: &Form) -> ClinicResult<Result<R::Fields, FieldErrors>> {
        let fields = match R::parse(form, self.today()) {
            Ok(fields) => fields,
            Err(errors) => return Ok(Err(errors)),
        };

        let missing = R::missing_references(&self.db, &fields)?;
        if missing.is_empty() {
            Ok(Ok(fields))
        } else {
            Ok(Err(missing))
        }
    }

    fn not_found<R: Record>(&self, id: RecordId) -> ClinicError {
        tracing::warn!(kind = %R::KIND, id, "record not found");
        ClinicError::NotFound { kind: R::KIND, id }
    }
}
