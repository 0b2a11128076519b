//! Validators for people and organisations: clients, vets and providers.

use super::messages::*;
use super::{FieldCheck, FieldErrors};
use crate::form::Form;
use crate::models::{ClientFields, ProviderFields, VetFields};

/// Parse a client form. The address is optional.
pub fn parse_client(form: &Form) -> Result<ClientFields, FieldErrors> {
    let mut check = FieldCheck::new(form);
    let name = check.required("name", NAME_REQUIRED);
    let phone = check.required("phone", PHONE_REQUIRED);
    let email = check.email("email");
    let address = check.optional("address").unwrap_or_default();

    let fields = match (name, phone, email) {
        (Some(name), Some(phone), Some(email)) => Some(ClientFields {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            address: address.to_string(),
        }),
        _ => None,
    };
    check.finish(fields)
}

pub fn validate_client(form: &Form) -> FieldErrors {
    parse_client(form).err().unwrap_or_default()
}

/// Parse a vet form. Same rules as a client, without an address.
pub fn parse_vet(form: &Form) -> Result<VetFields, FieldErrors> {
    let mut check = FieldCheck::new(form);
    let name = check.required("name", NAME_REQUIRED);
    let phone = check.required("phone", PHONE_REQUIRED);
    let email = check.email("email");

    let fields = match (name, phone, email) {
        (Some(name), Some(phone), Some(email)) => Some(VetFields {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }),
        _ => None,
    };
    check.finish(fields)
}

pub fn validate_vet(form: &Form) -> FieldErrors {
    parse_vet(form).err().unwrap_or_default()
}

pub fn parse_provider(form: &Form) -> Result<ProviderFields, FieldErrors> {
    let mut check = FieldCheck::new(form);
    let name = check.required("name", NAME_REQUIRED);
    let email = check.email("email");
    let address = check.required("address", ADDRESS_REQUIRED);

    let fields = match (name, email, address) {
        (Some(name), Some(email), Some(address)) => Some(ProviderFields {
            name: name.to_string(),
            email: email.to_string(),
            address: address.to_string(),
        }),
        _ => None,
    };
    check.finish(fields)
}

pub fn validate_provider(form: &Form) -> FieldErrors {
    parse_provider(form).err().unwrap_or_default()
}
