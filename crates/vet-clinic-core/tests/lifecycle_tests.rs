//! Create / update lifecycle tests across every record kind.

use chrono::{Duration, Local, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

use vet_clinic_core::validation::{messages, INVALID_BIRTHDAY};
use vet_clinic_core::{
    Appointment, Client, Clinic, Clock, Database, Form, Medicine, Pet, Product, Provider, Record,
    Vet,
};

fn clinic() -> Clinic {
    Clinic::open_in_memory().unwrap()
}

fn client_form() -> Form {
    Form::new()
        .with("name", "Juan Sebastian Veron")
        .with("phone", "221555232")
        .with("address", "13 y 44")
        .with("email", "brujita75@hotmail.com")
}

fn vet_form() -> Form {
    Form::new()
        .with("name", "Dra. Paz")
        .with("phone", "221444111")
        .with("email", "paz@clinica.com")
}

fn medicine_form(dose: &str) -> Form {
    Form::new()
        .with("name", "Ivermectina")
        .with("description", "Antiparasitario")
        .with("dose", dose)
}

fn product_form(price: &str) -> Form {
    Form::new()
        .with("name", "Pelota")
        .with("type", "Juguete")
        .with("price", price)
}

fn create<R: Record>(clinic: &Clinic, form: &Form) -> R {
    clinic.create::<R>(form).unwrap().into_result().unwrap()
}

/// Every required key must be reported for an empty form.
fn assert_all_required<R: Record>(clinic: &Clinic, required: &[&str]) {
    let outcome = clinic.create::<R>(&Form::new()).unwrap();
    let errors = outcome.errors().expect("empty form must be rejected");
    for field in required {
        assert!(errors.contains(field), "{} missing error for {field}", R::KIND);
    }
    assert_eq!(clinic.count::<R>().unwrap(), 0);
}

#[test]
fn test_empty_forms_report_every_required_field() {
    let clinic = clinic();
    assert_all_required::<Client>(&clinic, &["name", "phone", "email"]);
    assert_all_required::<Vet>(&clinic, &["name", "phone", "email"]);
    assert_all_required::<Provider>(&clinic, &["name", "email", "address"]);
    assert_all_required::<Product>(&clinic, &["name", "type", "price"]);
    assert_all_required::<Pet>(&clinic, &["name", "breed", "birthday", "client"]);
    assert_all_required::<Appointment>(&clinic, &["pet", "vet", "date", "time"]);
    assert_all_required::<Medicine>(&clinic, &["name", "description", "dose"]);
}

#[test]
fn test_create_client_stores_submitted_values() {
    let clinic = clinic();
    let outcome = clinic.create::<Client>(&client_form()).unwrap();
    assert!(outcome.is_saved());

    let clients = clinic.list::<Client>().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].name, "Juan Sebastian Veron");
    assert_eq!(clients[0].phone, "221555232");
    assert_eq!(clients[0].address, "13 y 44");
    assert_eq!(clients[0].email, "brujita75@hotmail.com");
}

#[test]
fn test_email_rule() {
    let clinic = clinic();
    let rejected = clinic.create::<Client>(&client_form().with("email", "ab")).unwrap();
    assert_eq!(
        rejected.errors().unwrap().get("email"),
        Some(messages::EMAIL_INVALID)
    );

    let accepted = clinic.create::<Client>(&client_form().with("email", "a@b")).unwrap();
    assert!(accepted.is_saved());
}

#[test]
fn test_update_client_phone_only() {
    let clinic = clinic();
    let client: Client = create(&clinic, &client_form());

    let updated: Client = clinic
        .update::<Client>(client.id, &Form::new().with("phone", "221555233"))
        .unwrap()
        .into_result()
        .unwrap();

    let stored = clinic.get::<Client>(client.id).unwrap();
    assert_eq!(stored, updated);
    assert_eq!(stored.phone, "221555233");
    assert_eq!(stored.name, client.name);
    assert_eq!(stored.email, client.email);
    assert_eq!(stored.address, client.address);
}

#[test]
fn test_update_client_with_empty_phone_keeps_phone() {
    let clinic = clinic();
    let client: Client = create(&clinic, &client_form());

    let outcome = clinic
        .update::<Client>(client.id, &Form::new().with("phone", ""))
        .unwrap();
    assert!(outcome.is_saved());
    assert_eq!(clinic.get::<Client>(client.id).unwrap().phone, "221555232");
}

#[test]
fn test_pet_birthday_against_system_date() {
    let clinic = clinic();
    let owner: Client = create(&clinic, &client_form());
    let today = Local::now().date_naive();
    let pet = |birthday: NaiveDate| {
        Form::new()
            .with("name", "Rex")
            .with("breed", "Labrador")
            .with_date("birthday", birthday)
            .with_id("client", owner.id)
    };

    let outcome = clinic.create::<Pet>(&pet(today)).unwrap();
    assert!(outcome.errors().unwrap().contains(INVALID_BIRTHDAY));
    assert_eq!(clinic.count::<Pet>().unwrap(), 0);

    let outcome = clinic.create::<Pet>(&pet(today - Duration::days(1))).unwrap();
    assert!(outcome.is_saved());
    assert_eq!(clinic.count::<Pet>().unwrap(), 1);
}

#[test]
fn test_pet_for_unknown_client() {
    let clinic = clinic();
    let form = Form::new()
        .with("name", "Rex")
        .with("breed", "Labrador")
        .with("birthday", "2019-01-01")
        .with("client", "42");

    let outcome = clinic.create::<Pet>(&form).unwrap();
    assert_eq!(
        outcome.errors().unwrap().get("client"),
        Some(messages::CLIENT_INVALID)
    );
}

#[test]
fn test_medicine_dose_bounds() {
    let clinic = clinic();
    for dose in ["0", "11"] {
        let outcome = clinic.create::<Medicine>(&medicine_form(dose)).unwrap();
        assert_eq!(
            outcome.errors().unwrap().get("dose"),
            Some(messages::DOSE_OUT_OF_RANGE),
            "dose {dose}"
        );
    }
    for dose in ["1", "10"] {
        assert!(clinic.create::<Medicine>(&medicine_form(dose)).unwrap().is_saved());
    }
    assert_eq!(clinic.count::<Medicine>().unwrap(), 2);
}

#[test]
fn test_medicine_from_json_with_numeric_dose() {
    let clinic = clinic();
    let form = Form::from_json(&json!({
        "name": "Ivermectina",
        "description": "Antiparasitario",
        "dose": 1,
    }))
    .unwrap();

    let medicine: Medicine = create(&clinic, &form);
    assert_eq!(medicine.dose, 1.0);
}

#[test]
fn test_medicine_update_out_of_range_is_not_saved() {
    let clinic = clinic();
    let medicine: Medicine = create(&clinic, &medicine_form("5"));

    let outcome = clinic
        .update::<Medicine>(medicine.id, &Form::new().with("dose", "11"))
        .unwrap();
    assert_eq!(
        outcome.errors().unwrap().get("dose"),
        Some(messages::DOSE_OUT_OF_RANGE)
    );
    assert_eq!(clinic.get::<Medicine>(medicine.id).unwrap().dose, 5.0);
}

#[test]
fn test_product_price_messages() {
    let clinic = clinic();
    assert!(clinic.create::<Product>(&product_form("33")).unwrap().is_saved());

    for price in ["0", "-33"] {
        let outcome = clinic.create::<Product>(&product_form(price)).unwrap();
        let errors = outcome.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("price"), Some(messages::PRICE_NOT_POSITIVE));
    }

    let outcome = clinic.create::<Product>(&product_form("")).unwrap();
    assert_eq!(
        outcome.errors().unwrap().get("price"),
        Some(messages::PRICE_REQUIRED)
    );

    let outcome = clinic.create::<Product>(&product_form("barato")).unwrap();
    assert_eq!(
        outcome.errors().unwrap().get("price"),
        Some(messages::PRICE_INVALID)
    );
    assert_eq!(clinic.count::<Product>().unwrap(), 1);
}

#[test]
fn test_product_price_precision_is_enforced() {
    let clinic = clinic();
    for price in ["0.001", "12345678901"] {
        let outcome = clinic.create::<Product>(&product_form(price)).unwrap();
        assert_eq!(
            outcome.errors().unwrap().get("price"),
            Some(messages::PRICE_INVALID),
            "price {price}"
        );
    }
    assert_eq!(clinic.count::<Product>().unwrap(), 0);

    let product: Product = create(&clinic, &product_form("12.5"));
    assert_eq!(product.price, Decimal::new(1250, 2));
    assert_eq!(clinic.get::<Product>(product.id).unwrap().price.to_string(), "12.50");

    let outcome = clinic
        .update::<Product>(product.id, &Form::new().with("price", "9.999"))
        .unwrap();
    assert_eq!(
        outcome.errors().unwrap().get("price"),
        Some(messages::PRICE_INVALID)
    );
    assert_eq!(clinic.get::<Product>(product.id).unwrap(), product);
}

#[test]
fn test_provider_create_and_update() {
    let clinic = clinic();
    let provider: Provider = create(
        &clinic,
        &Form::new()
            .with("name", "Servicios Veterinarios SA")
            .with("email", "Serviciosveterinarios@gmail.com")
            .with("address", "Calle 13 n°1587"),
    );

    let updated: Provider = clinic
        .update::<Provider>(provider.id, &Form::new().with("address", "Calle 7 n°200"))
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(updated.address, "Calle 7 n°200");
    assert_eq!(updated.email, provider.email);
}

#[test]
fn test_appointment_lifecycle() {
    let clinic = Clinic::with_clock(
        Database::open_in_memory().unwrap(),
        Clock::Fixed(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()),
    );
    let owner: Client = create(&clinic, &client_form());
    let vet: Vet = create(&clinic, &vet_form());
    let pet: Pet = create(
        &clinic,
        &Form::new()
            .with("name", "Rex")
            .with("breed", "Labrador")
            .with("birthday", "2020-03-15")
            .with_id("client", owner.id),
    );

    let appointment: Appointment = create(
        &clinic,
        &Form::new()
            .with_id("pet", pet.id)
            .with_id("vet", vet.id)
            .with("date", "2024-06-12")
            .with("time", "10:30"),
    );
    assert_eq!(appointment.pet_id, pet.id);

    // Same slot again: double booking is allowed.
    let again = clinic.create::<Appointment>(&appointment.to_form()).unwrap();
    assert!(again.is_saved());

    let moved: Appointment = clinic
        .update::<Appointment>(appointment.id, &Form::new().with("time", "16:00"))
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(moved.date, appointment.date);
    assert_eq!(moved.time.to_string(), "16:00:00");

    let outcome = clinic
        .update::<Appointment>(appointment.id, &Form::new().with("vet", "99"))
        .unwrap();
    assert_eq!(
        outcome.errors().unwrap().get("vet"),
        Some(messages::VET_INVALID)
    );
}

fn pinned_clinic() -> Clinic {
    Clinic::with_clock(
        Database::open_in_memory().unwrap(),
        Clock::Fixed(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()),
    )
}

fn pet_of(clinic: &Clinic, owner: &Client) -> Pet {
    create(
        clinic,
        &Form::new()
            .with("name", "Rex")
            .with("breed", "Labrador")
            .with("birthday", "2020-03-15")
            .with_id("client", owner.id),
    )
}

#[test]
fn test_pet_update_revalidates_birthday() {
    let clinic = pinned_clinic();
    let owner: Client = create(&clinic, &client_form());
    let pet = pet_of(&clinic, &owner);

    for birthday in ["2024-06-10", "2024-07-01", "ayer"] {
        let outcome = clinic
            .update::<Pet>(pet.id, &Form::new().with("birthday", birthday))
            .unwrap();
        let errors = outcome.errors().unwrap();
        assert_eq!(errors.len(), 1, "birthday {birthday}");
        assert_eq!(errors.get(INVALID_BIRTHDAY), Some(messages::BIRTHDAY_INVALID));
        assert_eq!(clinic.get::<Pet>(pet.id).unwrap(), pet);
    }

    let updated: Pet = clinic
        .update::<Pet>(pet.id, &Form::new().with("birthday", "2024-06-09"))
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(updated.birthday, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
    assert_eq!(updated.name, pet.name);
    assert_eq!(clinic.get::<Pet>(pet.id).unwrap(), updated);
}

#[test]
fn test_pet_update_to_unknown_client() {
    let clinic = pinned_clinic();
    let owner: Client = create(&clinic, &client_form());
    let pet = pet_of(&clinic, &owner);

    let outcome = clinic
        .update::<Pet>(pet.id, &Form::new().with("client", "999"))
        .unwrap();
    assert_eq!(
        outcome.errors().unwrap().get("client"),
        Some(messages::CLIENT_INVALID)
    );
    assert_eq!(clinic.get::<Pet>(pet.id).unwrap(), pet);

    let other: Client = create(&clinic, &client_form().with("name", "Martin Palermo"));
    let moved: Pet = clinic
        .update::<Pet>(pet.id, &Form::new().with_id("client", other.id))
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(moved.client_id, other.id);
}

#[test]
fn test_vet_update() {
    let clinic = clinic();
    let vet: Vet = create(&clinic, &vet_form());

    let outcome = clinic
        .update::<Vet>(vet.id, &Form::new().with("email", "paz.clinica.com"))
        .unwrap();
    assert_eq!(
        outcome.errors().unwrap().get("email"),
        Some(messages::EMAIL_INVALID)
    );
    assert_eq!(clinic.get::<Vet>(vet.id).unwrap(), vet);

    let updated: Vet = clinic
        .update::<Vet>(vet.id, &Form::new().with("phone", "221444112").with("email", ""))
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(updated.phone, "221444112");
    assert_eq!(updated.email, vet.email);
    assert_eq!(clinic.get::<Vet>(vet.id).unwrap(), updated);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_partial_update_only_touches_non_empty_fields(
        phone in prop::option::of("[0-9]{0,12}"),
        address in prop::option::of("[a-z0-9 ]{0,20}"),
    ) {
        let clinic = clinic();
        let client: Client = create(&clinic, &client_form());

        let mut partial = Form::new();
        if let Some(phone) = &phone {
            partial.set("phone", phone.as_str());
        }
        if let Some(address) = &address {
            partial.set("address", address.as_str());
        }

        let stored: Client = clinic
            .update::<Client>(client.id, &partial)
            .unwrap()
            .into_result()
            .unwrap();

        let expected_phone = phone.filter(|p| !p.is_empty()).unwrap_or(client.phone.clone());
        let expected_address = address.filter(|a| !a.is_empty()).unwrap_or(client.address.clone());
        prop_assert_eq!(stored.phone, expected_phone);
        prop_assert_eq!(stored.address, expected_address);
        prop_assert_eq!(stored.name, client.name);
        prop_assert_eq!(stored.email, client.email);
    }
}
