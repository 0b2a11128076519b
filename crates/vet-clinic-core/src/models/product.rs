//! Products sold at the clinic counter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::form::Form;

/// Total digits a price may carry.
pub const PRICE_MAX_DIGITS: u32 = 10;
/// Digits after the decimal point.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// A product for sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    /// Product category (e.g., "Juguete", "Alimento")
    #[serde(rename = "type")]
    pub product_type: String,
    /// Unit price, always > 0, kept at [`PRICE_DECIMAL_PLACES`] scale
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductFields {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub price: Decimal,
}

impl Product {
    pub fn from_fields(id: RecordId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            product_type: fields.product_type,
            price: fields.price,
        }
    }

    pub fn to_form(&self) -> Form {
        Form::new()
            .with("name", &self.name)
            .with("type", &self.product_type)
            .with("price", self.price.to_string())
    }
}

/// Check if a price fits the stored precision: at most
/// [`PRICE_DECIMAL_PLACES`] decimals and [`PRICE_MAX_DIGITS`] digits overall.
///
/// Trailing zeros after the point do not count, so `"1.500"` fits.
pub fn fits_price_precision(price: Decimal) -> bool {
    let price = price.normalize();
    let whole_digits = price
        .trunc()
        .abs()
        .to_string()
        .trim_start_matches('0')
        .len() as u32;
    price.scale() <= PRICE_DECIMAL_PLACES
        && whole_digits <= PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES
}

/// Render a price at the stored scale, e.g. `12.5` becomes `12.50`.
pub fn to_price_scale(mut price: Decimal) -> Decimal {
    price.rescale(PRICE_DECIMAL_PLACES);
    price
}
