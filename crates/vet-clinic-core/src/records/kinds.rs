//! [`Record`] implementations for each kind.

use chrono::NaiveDate;

use super::Record;
use crate::db::{Database, DbResult};
use crate::form::Form;
use crate::models::*;
use crate::validation::{self, messages, FieldErrors};

impl Record for Client {
    type Fields = ClientFields;
    const KIND: RecordKind = RecordKind::Client;

    fn id(&self) -> RecordId {
        self.id
    }

    fn as_form(&self) -> Form {
        self.to_form()
    }

    fn parse(form: &Form, _today: NaiveDate) -> Result<ClientFields, FieldErrors> {
        validation::parse_client(form)
    }

    fn insert(db: &Database, fields: &ClientFields) -> DbResult<Self> {
        db.insert_client(fields)
    }

    fn write(db: &Database, id: RecordId, fields: ClientFields) -> DbResult<Option<Self>> {
        Ok(db
            .update_client(id, &fields)?
            .then(|| Client::from_fields(id, fields)))
    }

    fn fetch(db: &Database, id: RecordId) -> DbResult<Option<Self>> {
        db.get_client(id)
    }

    fn fetch_all(db: &Database) -> DbResult<Vec<Self>> {
        db.list_clients()
    }
}

impl Record for Vet {
    type Fields = VetFields;
    const KIND: RecordKind = RecordKind::Vet;

    fn id(&self) -> RecordId {
        self.id
    }

    fn as_form(&self) -> Form {
        self.to_form()
    }

    fn parse(form: &Form, _today: NaiveDate) -> Result<VetFields, FieldErrors> {
        validation::parse_vet(form)
    }

    fn insert(db: &Database, fields: &VetFields) -> DbResult<Self> {
        db.insert_vet(fields)
    }

    fn write(db: &Database, id: RecordId, fields: VetFields) -> DbResult<Option<Self>> {
        Ok(db.update_vet(id, &fields)?.then(|| Vet::from_fields(id, fields)))
    }

    fn fetch(db: &Database, id: RecordId) -> DbResult<Option<Self>> {
        db.get_vet(id)
    }

    fn fetch_all(db: &Database) -> DbResult<Vec<Self>> {
        db.list_vets()
    }
}

impl Record for Provider {
    type Fields = ProviderFields;
    const KIND: RecordKind = RecordKind::Provider;

    fn id(&self) -> RecordId {
        self.id
    }

    fn as_form(&self) -> Form {
        self.to_form()
    }

    fn parse(form: &Form, _today: NaiveDate) -> Result<ProviderFields, FieldErrors> {
        validation::parse_provider(form)
    }

    fn insert(db: &Database, fields: &ProviderFields) -> DbResult<Self> {
        db.insert_provider(fields)
    }

    fn write(db: &Database, id: RecordId, fields: ProviderFields) -> DbResult<Option<Self>> {
        Ok(db
            .update_provider(id, &fields)?
            .then(|| Provider::from_fields(id, fields)))
    }

    fn fetch(db: &Database, id: RecordId) -> DbResult<Option<Self>> {
        db.get_provider(id)
    }

    fn fetch_all(db: &Database) -> DbResult<Vec<Self>> {
        db.list_providers()
    }
}

impl Record for Product {
    type Fields = ProductFields;
    const KIND: RecordKind = RecordKind::Product;

    fn id(&self) -> RecordId {
        self.id
    }

    fn as_form(&self) -> Form {
        self.to_form()
    }

    fn parse(form: &Form, _today: NaiveDate) -> Result<ProductFields, FieldErrors> {
        validation::parse_product(form)
    }

    fn insert(db: &Database, fields: &ProductFields) -> DbResult<Self> {
        db.insert_product(fields)
    }

    fn write(db: &Database, id: RecordId, fields: ProductFields) -> DbResult<Option<Self>> {
        Ok(db
            .update_product(id, &fields)?
            .then(|| Product::from_fields(id, fields)))
    }

    fn fetch(db: &Database, id: RecordId) -> DbResult<Option<Self>> {
        db.get_product(id)
    }

    fn fetch_all(db: &Database) -> DbResult<Vec<Self>> {
        db.list_products()
    }
}

impl Record for Medicine {
    type Fields = MedicineFields;
    const KIND: RecordKind = RecordKind::Medicine;

    fn id(&self) -> RecordId {
        self.id
    }

    fn as_form(&self) -> Form {
        self.to_form()
    }

    fn parse(form: &Form, _today: NaiveDate) -> Result<MedicineFields, FieldErrors> {
        validation::parse_medicine(form)
    }

    fn insert(db: &Database, fields: &MedicineFields) -> DbResult<Self> {
        db.insert_medicine(fields)
    }

    fn write(db: &Database, id: RecordId, fields: MedicineFields) -> DbResult<Option<Self>> {
        Ok(db
            .update_medicine(id, &fields)?
            .then(|| Medicine::from_fields(id, fields)))
    }

    fn fetch(db: &Database, id: RecordId) -> DbResult<Option<Self>> {
        db.get_medicine(id)
    }

    fn fetch_all(db: &Database) -> DbResult<Vec<Self>> {
        db.list_medicines()
    }
}

impl Record for Pet {
    type Fields = PetFields;
    const KIND: RecordKind = RecordKind::Pet;

    fn id(&self) -> RecordId {
        self.id
    }

    fn as_form(&self) -> Form {
        self.to_form()
    }

    fn parse(form: &Form, today: NaiveDate) -> Result<PetFields, FieldErrors> {
        validation::parse_pet(form, today)
    }

    fn missing_references(db: &Database, fields: &PetFields) -> DbResult<FieldErrors> {
        let mut errors = FieldErrors::new();
        if !db.exists(RecordKind::Client, fields.client_id)? {
            errors.insert("client", messages::CLIENT_INVALID);
        }
        Ok(errors)
    }

    fn insert(db: &Database, fields: &PetFields) -> DbResult<Self> {
        db.insert_pet(fields)
    }

    fn write(db: &Database, id: RecordId, fields: PetFields) -> DbResult<Option<Self>> {
        Ok(db.update_pet(id, &fields)?.then(|| Pet::from_fields(id, fields)))
    }

    fn fetch(db: &Database, id: RecordId) -> DbResult<Option<Self>> {
        db.get_pet(id)
    }

    fn fetch_all(db: &Database) -> DbResult<Vec<Self>> {
        db.list_pets()
    }
}

impl Record for Appointment {
    type Fields = AppointmentFields;
    const KIND: RecordKind = RecordKind::Appointment;

    fn id(&self) -> RecordId {
        self.id
    }

    fn as_form(&self) -> Form {
        self.to_form()
    }

    fn parse(form: &Form, _today: NaiveDate) -> Result<AppointmentFields, FieldErrors> {
        validation::parse_appointment(form)
    }

    fn missing_references(db: &Database, fields: &AppointmentFields) -> DbResult<FieldErrors> {
        let mut errors = FieldErrors::new();
        if !db.exists(RecordKind::Pet, fields.pet_id)? {
            errors.insert("pet", messages::PET_INVALID);
        }
        if !db.exists(RecordKind::Vet, fields.vet_id)? {
            errors.insert("vet", messages::VET_INVALID);
        }
        Ok(errors)
    }

    fn insert(db: &Database, fields: &AppointmentFields) -> DbResult<Self> {
        db.insert_appointment(fields)
    }

    fn write(db: &Database, id: RecordId, fields: AppointmentFields) -> DbResult<Option<Self>> {
        Ok(db
            .update_appointment(id, &fields)?
            .then(|| Appointment::from_fields(id, fields)))
    }

    fn fetch(db: &Database, id: RecordId) -> DbResult<Option<Self>> {
        db.get_appointment(id)
    }

    fn fetch_all(db: &Database) -> DbResult<Vec<Self>> {
        db.list_appointments()
    }
}
