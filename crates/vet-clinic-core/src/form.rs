//! Submitted field mappings.
//!
//! A [`Form`] is what the web layer hands over after parsing a request body:
//! field names mapped to raw text. Typed values (dates, times, numbers,
//! identities) are rendered to their canonical text form on the way in and
//! parsed back explicitly by the validators.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::RecordId;

/// Errors turning an external payload into a [`Form`].
#[derive(Error, Debug, PartialEq)]
pub enum FormError {
    #[error("Form payload must be a JSON object")]
    NotAnObject,

    #[error("Unsupported value for field {0}: nested values are not allowed")]
    UnsupportedValue(String),
}

/// String-keyed collection of submitted values for one entity form.
///
/// An empty string is treated exactly like a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Form {
    fields: BTreeMap<String, String>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Insert a date as `YYYY-MM-DD`.
    pub fn with_date(self, field: &str, date: NaiveDate) -> Self {
        self.with(field, date.format("%Y-%m-%d").to_string())
    }

    /// Insert a time as `HH:MM:SS`.
    pub fn with_time(self, field: &str, time: NaiveTime) -> Self {
        self.with(field, time.format("%H:%M:%S").to_string())
    }

    pub fn with_number(self, field: &str, value: f64) -> Self {
        self.with(field, value.to_string())
    }

    pub fn with_id(self, field: &str, id: RecordId) -> Self {
        self.with(field, id.to_string())
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_string(), value.into());
    }

    /// Get a submitted value; `None` when the field is missing or empty.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `partial` on this form, field by field.
    ///
    /// A field takes the submitted value only when it is present and
    /// non-empty; otherwise the current value is kept. Keys that this form
    /// does not know are ignored.
    pub fn merged_with(&self, partial: &Form) -> Form {
        let fields = self
            .fields
            .iter()
            .map(|(field, current)| {
                let value = partial.get(field).unwrap_or(current.as_str());
                (field.clone(), value.to_string())
            })
            .collect();
        Form { fields }
    }

    /// Build a form from a JSON object.
    ///
    /// Strings are taken as-is, numbers and booleans are rendered to text and
    /// `null` counts as missing.
    pub fn from_json(value: &Value) -> Result<Self, FormError> {
        let object = value.as_object().ok_or(FormError::NotAnObject)?;
        let mut form = Form::new();
        for (field, value) in object {
            match value {
                Value::Null => {}
                Value::String(s) => form.set(field, s.as_str()),
                Value::Number(n) => form.set(field, n.to_string()),
                Value::Bool(b) => form.set(field, b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(FormError::UnsupportedValue(field.clone()))
                }
            }
        }
        Ok(form)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Form {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Form {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_value_reads_as_missing() {
        let form = Form::new().with("phone", "");
        assert_eq!(form.get("phone"), None);
        assert_eq!(form.get("email"), None);
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_typed_builders() {
        let form = Form::new()
            .with_date("birthday", NaiveDate::from_ymd_opt(2021, 1, 9).unwrap())
            .with_time("time", NaiveTime::from_hms_opt(9, 30, 0).unwrap())
            .with_number("dose", 1.0)
            .with_number("price", 12.5)
            .with_id("client", 7);

        assert_eq!(form.get("birthday"), Some("2021-01-09"));
        assert_eq!(form.get("time"), Some("09:30:00"));
        assert_eq!(form.get("dose"), Some("1"));
        assert_eq!(form.get("price"), Some("12.5"));
        assert_eq!(form.get("client"), Some("7"));
    }

    #[test]
    fn test_merge_keeps_current_values_for_empty_or_missing() {
        let current = Form::new()
            .with("name", "Juan")
            .with("phone", "221555232")
            .with("email", "juan@example.com");
        let partial = Form::new()
            .with("phone", "221555233")
            .with("email", "")
            .with("unknown", "ignored");

        let merged = current.merged_with(&partial);
        assert_eq!(merged.get("name"), Some("Juan"));
        assert_eq!(merged.get("phone"), Some("221555233"));
        assert_eq!(merged.get("email"), Some("juan@example.com"));
        assert_eq!(merged.get("unknown"), None);
    }

    #[test]
    fn test_from_json_coerces_scalars() {
        let form = Form::from_json(&json!({
            "name": "Ivermectina",
            "dose": 1,
            "price": 2.5,
            "active": true,
            "address": null,
        }))
        .unwrap();

        assert_eq!(form.get("name"), Some("Ivermectina"));
        assert_eq!(form.get("dose"), Some("1"));
        assert_eq!(form.get("price"), Some("2.5"));
        assert_eq!(form.get("active"), Some("true"));
        assert_eq!(form.get("address"), None);
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert_eq!(Form::from_json(&json!([1, 2])), Err(FormError::NotAnObject));
        assert_eq!(
            Form::from_json(&json!({"client": {"id": 1}})),
            Err(FormError::UnsupportedValue("client".into()))
        );
    }

    #[test]
    fn test_collect_from_pairs() {
        let form: Form = [("name", "Rex"), ("breed", "Labrador")].into_iter().collect();
        assert_eq!(form.get("breed"), Some("Labrador"));
    }
}
