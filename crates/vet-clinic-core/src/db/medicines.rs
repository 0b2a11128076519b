//! Medicine database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{constraint_or_sqlite, Database, DbResult};
use crate::models::{Medicine, MedicineFields, RecordId};

const SELECT_MEDICINE: &str = "SELECT id, name, description, dose FROM medicines";

fn medicine_from_row(row: &Row<'_>) -> rusqlite::Result<Medicine> {
    Ok(Medicine {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        dose: row.get(3)?,
    })
}

impl Database {
    pub fn insert_medicine(&self, fields: &MedicineFields) -> DbResult<Medicine> {
        self.conn
            .execute(
                "INSERT INTO medicines (name, description, dose) VALUES (?1, ?2, ?3)",
                params![fields.name, fields.description, fields.dose],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(Medicine::from_fields(self.conn.last_insert_rowid(), fields.clone()))
    }

    pub fn update_medicine(&self, id: RecordId, fields: &MedicineFields) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE medicines SET
                    name = ?2,
                    description = ?3,
                    dose = ?4,
                    updated_at = datetime('now')
                WHERE id = ?1
                "#,
                params![id, fields.name, fields.description, fields.dose],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(rows_affected > 0)
    }

    pub fn get_medicine(&self, id: RecordId) -> DbResult<Option<Medicine>> {
        self.conn
            .query_row(&format!("{SELECT_MEDICINE} WHERE id = ?"), [id], medicine_from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn list_medicines(&self) -> DbResult<Vec<Medicine>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_MEDICINE} ORDER BY id"))?;
        let rows = stmt.query_map([], medicine_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
