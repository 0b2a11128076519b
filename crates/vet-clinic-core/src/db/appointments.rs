//! Appointment database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{constraint_or_sqlite, Database, DbResult};
use crate::models::{Appointment, AppointmentFields, RecordId};

const SELECT_APPOINTMENT: &str = "SELECT id, pet_id, vet_id, date, time FROM appointments";

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        pet_id: row.get(1)?,
        vet_id: row.get(2)?,
        date: row.get(3)?,
        time: row.get(4)?,
    })
}

impl Database {
    /// Insert a new appointment. Pet and vet must exist.
    pub fn insert_appointment(&self, fields: &AppointmentFields) -> DbResult<Appointment> {
        self.conn
            .execute(
                "INSERT INTO appointments (pet_id, vet_id, date, time) VALUES (?1, ?2, ?3, ?4)",
                params![fields.pet_id, fields.vet_id, fields.date, fields.time],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(Appointment::from_fields(self.conn.last_insert_rowid(), fields.clone()))
    }

    pub fn update_appointment(&self, id: RecordId, fields: &AppointmentFields) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE appointments SET
                    pet_id = ?2,
                    vet_id = ?3,
                    date = ?4,
                    time = ?5,
                    updated_at = datetime('now')
                WHERE id = ?1
                "#,
                params![id, fields.pet_id, fields.vet_id, fields.date, fields.time],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(rows_affected > 0)
    }

    pub fn get_appointment(&self, id: RecordId) -> DbResult<Option<Appointment>> {
        self.conn
            .query_row(
                &format!("{SELECT_APPOINTMENT} WHERE id = ?"),
                [id],
                appointment_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List appointments in schedule order.
    pub fn list_appointments(&self) -> DbResult<Vec<Appointment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_APPOINTMENT} ORDER BY date, time, id"))?;
        let rows = stmt.query_map([], appointment_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
