//! Domain models for the clinic's records.

mod appointment;
mod client;
mod medicine;
mod pet;
mod product;
mod provider;
mod vet;

pub use appointment::*;
pub use client::*;
pub use medicine::*;
pub use pet::*;
pub use product::*;
pub use provider::*;
pub use vet::*;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned surrogate identity.
pub type RecordId = i64;

/// The kinds of record the clinic keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Client,
    Pet,
    Vet,
    Provider,
    Product,
    Appointment,
    Medicine,
}

impl RecordKind {
    /// Every kind, in navigation order.
    pub const ALL: [RecordKind; 7] = [
        RecordKind::Client,
        RecordKind::Product,
        RecordKind::Pet,
        RecordKind::Vet,
        RecordKind::Appointment,
        RecordKind::Medicine,
        RecordKind::Provider,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Client => "client",
            RecordKind::Pet => "pet",
            RecordKind::Vet => "vet",
            RecordKind::Provider => "provider",
            RecordKind::Product => "product",
            RecordKind::Appointment => "appointment",
            RecordKind::Medicine => "medicine",
        }
    }

    /// SQLite table holding this kind.
    pub fn table(self) -> &'static str {
        match self {
            RecordKind::Client => "clients",
            RecordKind::Pet => "pets",
            RecordKind::Vet => "vets",
            RecordKind::Provider => "providers",
            RecordKind::Product => "products",
            RecordKind::Appointment => "appointments",
            RecordKind::Medicine => "medicines",
        }
    }

    /// Path of the listing screen for this kind.
    pub fn listing_path(self) -> &'static str {
        match self {
            RecordKind::Client => "/clientes/",
            RecordKind::Pet => "/mascotas/",
            RecordKind::Vet => "/veterinarios/",
            RecordKind::Provider => "/proveedores/",
            RecordKind::Product => "/productos/",
            RecordKind::Appointment => "/citas/",
            RecordKind::Medicine => "/medicamentos/",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
