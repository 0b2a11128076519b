//! Pet database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{constraint_or_sqlite, Database, DbResult};
use crate::models::{Pet, PetFields, RecordId};

const SELECT_PET: &str = "SELECT id, name, breed, birthday, client_id FROM pets";

fn pet_from_row(row: &Row<'_>) -> rusqlite::Result<Pet> {
    Ok(Pet {
        id: row.get(0)?,
        name: row.get(1)?,
        breed: row.get(2)?,
        birthday: row.get(3)?,
        client_id: row.get(4)?,
    })
}

impl Database {
    /// Insert a new pet. The owning client must exist.
    pub fn insert_pet(&self, fields: &PetFields) -> DbResult<Pet> {
        self.conn
            .execute(
                "INSERT INTO pets (name, breed, birthday, client_id) VALUES (?1, ?2, ?3, ?4)",
                params![fields.name, fields.breed, fields.birthday, fields.client_id],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(Pet::from_fields(self.conn.last_insert_rowid(), fields.clone()))
    }

    pub fn update_pet(&self, id: RecordId, fields: &PetFields) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE pets SET
                    name = ?2,
                    breed = ?3,
                    birthday = ?4,
                    client_id = ?5,
                    updated_at = datetime('now')
                WHERE id = ?1
                "#,
                params![id, fields.name, fields.breed, fields.birthday, fields.client_id],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(rows_affected > 0)
    }

    pub fn get_pet(&self, id: RecordId) -> DbResult<Option<Pet>> {
        self.conn
            .query_row(&format!("{SELECT_PET} WHERE id = ?"), [id], pet_from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn list_pets(&self) -> DbResult<Vec<Pet>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_PET} ORDER BY id"))?;
        let rows = stmt.query_map([], pet_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List the pets owned by a client.
    pub fn list_pets_for_client(&self, client_id: RecordId) -> DbResult<Vec<Pet>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_PET} WHERE client_id = ? ORDER BY id"))?;
        let rows = stmt.query_map([client_id], pet_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;
    use crate::models::ClientFields;
    use chrono::NaiveDate;

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.insert_client(&ClientFields {
            name: "Juan".into(),
            phone: "221".into(),
            email: "juan@example.com".into(),
            address: String::new(),
        })
        .unwrap();
        db
    }

    fn rex(client_id: RecordId) -> PetFields {
        PetFields {
            name: "Rex".into(),
            breed: "Labrador".into(),
            birthday: NaiveDate::from_ymd_opt(2020, 3, 15).unwrap(),
            client_id,
        }
    }

    #[test]
    fn test_birthday_round_trips_through_sqlite() {
        let db = setup_db();
        let pet = db.insert_pet(&rex(1)).unwrap();
        let retrieved = db.get_pet(pet.id).unwrap().unwrap();
        assert_eq!(retrieved.birthday, NaiveDate::from_ymd_opt(2020, 3, 15).unwrap());
        assert_eq!(db.list_pets_for_client(1).unwrap(), vec![retrieved]);
    }

    #[test]
    fn test_unknown_client_is_a_constraint_error() {
        let db = setup_db();
        let result = db.insert_pet(&rex(99));
        assert!(matches!(result, Err(DbError::Constraint(_))));
    }
}
