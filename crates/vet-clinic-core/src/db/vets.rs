//! Vet database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{constraint_or_sqlite, Database, DbResult};
use crate::models::{RecordId, Vet, VetFields};

const SELECT_VET: &str = "SELECT id, name, phone, email FROM vets";

fn vet_from_row(row: &Row<'_>) -> rusqlite::Result<Vet> {
    Ok(Vet {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
    })
}

impl Database {
    /// Insert a new vet.
    pub fn insert_vet(&self, fields: &VetFields) -> DbResult<Vet> {
        self.conn
            .execute(
                "INSERT INTO vets (name, phone, email) VALUES (?1, ?2, ?3)",
                params![fields.name, fields.phone, fields.email],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(Vet::from_fields(self.conn.last_insert_rowid(), fields.clone()))
    }

    /// Update an existing vet.
    pub fn update_vet(&self, id: RecordId, fields: &VetFields) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE vets SET
                    name = ?2,
                    phone = ?3,
                    email = ?4,
                    updated_at = datetime('now')
                WHERE id = ?1
                "#,
                params![id, fields.name, fields.phone, fields.email],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(rows_affected > 0)
    }

    pub fn get_vet(&self, id: RecordId) -> DbResult<Option<Vet>> {
        self.conn
            .query_row(&format!("{SELECT_VET} WHERE id = ?"), [id], vet_from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn list_vets(&self) -> DbResult<Vec<Vet>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_VET} ORDER BY id"))?;
        let rows = stmt.query_map([], vet_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
