//! Validators for things the clinic stocks: products and medicines.

use rust_decimal::Decimal;

use super::messages::*;
use super::{FieldCheck, FieldErrors};
use crate::form::Form;
use crate::models::{
    fits_price_precision, is_dose_in_range, to_price_scale, MedicineFields, ProductFields,
};

/// Parse a product form.
///
/// The price must be positive and fit two decimals within ten digits; it
/// comes back at two-decimal scale.
pub fn parse_product(form: &Form) -> Result<ProductFields, FieldErrors> {
    let mut check = FieldCheck::new(form);
    let name = check.required("name", PRODUCT_NAME_REQUIRED);
    let product_type = check.required("type", PRODUCT_TYPE_REQUIRED);
    let price = check
        .decimal("price", PRICE_REQUIRED, PRICE_INVALID)
        .and_then(|price| {
            if price <= Decimal::ZERO {
                check.fail("price", PRICE_NOT_POSITIVE);
                None
            } else if !fits_price_precision(price) {
                check.fail("price", PRICE_INVALID);
                None
            } else {
                Some(to_price_scale(price))
            }
        });

    let fields = match (name, product_type, price) {
        (Some(name), Some(product_type), Some(price)) => Some(ProductFields {
            name: name.to_string(),
            product_type: product_type.to_string(),
            price,
        }),
        _ => None,
    };
    check.finish(fields)
}

pub fn validate_product(form: &Form) -> FieldErrors {
    parse_product(form).err().unwrap_or_default()
}

/// Parse a medicine form; the dose must lie within [1, 10].
pub fn parse_medicine(form: &Form) -> Result<MedicineFields, FieldErrors> {
    let mut check = FieldCheck::new(form);
    let name = check.required("name", MEDICINE_NAME_REQUIRED);
    let description = check.required("description", DESCRIPTION_REQUIRED);
    let dose = check
        .number("dose", DOSE_REQUIRED, DOSE_INVALID)
        .and_then(|dose| {
            if is_dose_in_range(dose) {
                Some(dose)
            } else {
                check.fail("dose", DOSE_OUT_OF_RANGE);
                None
            }
        });

    let fields = match (name, description, dose) {
        (Some(name), Some(description), Some(dose)) => Some(MedicineFields {
            name: name.to_string(),
            description: description.to_string(),
            dose,
        }),
        _ => None,
    };
    check.finish(fields)
}

pub fn validate_medicine(form: &Form) -> FieldErrors {
    parse_medicine(form).err().unwrap_or_default()
}
