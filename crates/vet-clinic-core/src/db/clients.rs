//! Client database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{constraint_or_sqlite, Database, DbResult};
use crate::models::{Client, ClientFields, RecordId};

const SELECT_CLIENT: &str = "SELECT id, name, phone, email, address FROM clients";

fn client_from_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        address: row.get(4)?,
    })
}

impl Database {
    /// Insert a new client, returning it with its assigned ID.
    pub fn insert_client(&self, fields: &ClientFields) -> DbResult<Client> {
        self.conn
            .execute(
                "INSERT INTO clients (name, phone, email, address) VALUES (?1, ?2, ?3, ?4)",
                params![fields.name, fields.phone, fields.email, fields.address],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(Client::from_fields(self.conn.last_insert_rowid(), fields.clone()))
    }

    /// Update an existing client.
    pub fn update_client(&self, id: RecordId, fields: &ClientFields) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE clients SET
                    name = ?2,
                    phone = ?3,
                    email = ?4,
                    address = ?5,
                    updated_at = datetime('now')
                WHERE id = ?1
                "#,
                params![id, fields.name, fields.phone, fields.email, fields.address],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(rows_affected > 0)
    }

    /// Get a client by ID.
    pub fn get_client(&self, id: RecordId) -> DbResult<Option<Client>> {
        self.conn
            .query_row(&format!("{SELECT_CLIENT} WHERE id = ?"), [id], client_from_row)
            .optional()
            .map_err(Into::into)
    }

    /// List all clients.
    pub fn list_clients(&self) -> DbResult<Vec<Client>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_CLIENT} ORDER BY id"))?;
        let rows = stmt.query_map([], client_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
