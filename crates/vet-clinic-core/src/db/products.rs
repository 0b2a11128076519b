//! Product database operations.

use std::str::FromStr;

use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use rust_decimal::Decimal;

use super::{constraint_or_sqlite, Database, DbResult};
use crate::models::{Product, ProductFields, RecordId};

const SELECT_PRODUCT: &str = "SELECT id, name, product_type, price FROM products";

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    let price: String = row.get(3)?;
    let price = Decimal::from_str(&price)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        product_type: row.get(2)?,
        price,
    })
}

impl Database {
    /// Insert a new product. The price is stored as exact decimal text.
    pub fn insert_product(&self, fields: &ProductFields) -> DbResult<Product> {
        self.conn
            .execute(
                "INSERT INTO products (name, product_type, price) VALUES (?1, ?2, ?3)",
                params![fields.name, fields.product_type, fields.price.to_string()],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(Product::from_fields(self.conn.last_insert_rowid(), fields.clone()))
    }

    pub fn update_product(&self, id: RecordId, fields: &ProductFields) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE products SET
                    name = ?2,
                    product_type = ?3,
                    price = ?4,
                    updated_at = datetime('now')
                WHERE id = ?1
                "#,
                params![id, fields.name, fields.product_type, fields.price.to_string()],
            )
            .map_err(constraint_or_sqlite)?;
        Ok(rows_affected > 0)
    }

    pub fn get_product(&self, id: RecordId) -> DbResult<Option<Product>> {
        self.conn
            .query_row(&format!("{SELECT_PRODUCT} WHERE id = ?"), [id], product_from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn list_products(&self) -> DbResult<Vec<Product>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_PRODUCT} ORDER BY id"))?;
        let rows = stmt.query_map([], product_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;

    #[test]
    fn test_non_positive_price_is_a_constraint_error() {
        let db = Database::open_in_memory().unwrap();
        let result = db.insert_product(&ProductFields {
            name: "Pelota".into(),
            product_type: "Juguete".into(),
            price: Decimal::ZERO,
        });
        assert!(matches!(result, Err(DbError::Constraint(_))));
    }

    #[test]
    fn test_price_keeps_its_scale() {
        let db = Database::open_in_memory().unwrap();
        let product = db
            .insert_product(&ProductFields {
                name: "Pelota".into(),
                product_type: "Juguete".into(),
                price: Decimal::new(1250, 2),
            })
            .unwrap();

        let stored: String = db
            .conn()
            .query_row("SELECT price FROM products WHERE id = ?", [product.id], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(stored, "12.50");

        let retrieved = db.get_product(product.id).unwrap().unwrap();
        assert_eq!(retrieved.price.to_string(), "12.50");
    }
}
