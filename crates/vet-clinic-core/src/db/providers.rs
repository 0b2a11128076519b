//! Provider database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{constraint_or_sqlite, Database, DbResult};
use crate::models::{Provider, ProviderFields, RecordId};

const SELECT_PROVIDER: &str = "SELECT id, name, email, address FROM providers";

fn provider_from_row(row: &Row<'_>) -> rusqlite::Result<Provider> {
    Ok(Provider {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        address: row.get(3)?,
    })
}

impl Database {
    pub fn insert_provider(&self, fields: &ProviderFields) -> DbResult<Provider> {
        self.conn
            .execute(
                "INSERT INTO providers (name, email, address) VALUES (?1, ?2, ?3)",
                params![fields.name, fields.email, fields.address],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(Provider::from_fields(self.conn.last_insert_rowid(), fields.clone()))
    }

    pub fn update_provider(&self, id: RecordId, fields: &ProviderFields) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE providers SET
                    name = ?2,
                    email = ?3,
                    address = ?4,
                    updated_at = datetime('now')
                WHERE id = ?1
                "#,
                params![id, fields.name, fields.email, fields.address],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(rows_affected > 0)
    }

    pub fn get_provider(&self, id: RecordId) -> DbResult<Option<Provider>> {
        self.conn
            .query_row(&format!("{SELECT_PROVIDER} WHERE id = ?"), [id], provider_from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn list_providers(&self) -> DbResult<Vec<Provider>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_PROVIDER} ORDER BY id"))?;
        let rows = stmt.query_map([], provider_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
