//! Vet-Clinic Core Library
//!
//! Validation and persistence for a veterinary clinic's records: clients,
//! pets, vets, providers, products, appointments and medicines.
//!
//! # Architecture
//!
//! ```text
//!  web layer (routing, templates)
//!          │  Form
//!          ▼
//!   ┌──────────────┐   FieldErrors   ┌─────────────────────────┐
//!   │  Validators  │ ──────────────▶ │ SaveOutcome::Invalid    │
//!   └──────┬───────┘                 └─────────────────────────┘
//!          │ typed fields
//!          ▼
//!   ┌──────────────┐                 ┌─────────────────────────┐
//!   │    Clinic    │ ──────────────▶ │ SaveOutcome::Saved(rec) │
//!   └──────┬───────┘                 └─────────────────────────┘
//!          │
//!          ▼
//!   SQLite (foreign keys, ON DELETE CASCADE)
//!     clients ─┬─ pets ─┬─ appointments
//!              │        │
//!     vets ────┴────────┘
//! ```
//!
//! # Modules
//!
//! - [`form`]: submitted field mappings
//! - [`validation`]: one validator per record kind
//! - [`models`]: record types
//! - [`db`]: SQLite store
//! - [`records`]: the [`Record`] capability and the [`Clinic`] service
//! - [`nav`]: navigation bar active-link marking
//! - [`config`]: environment configuration

pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod models;
pub mod nav;
pub mod records;
pub mod validation;

// Re-export commonly used types
pub use config::{ClinicConfig, DatabaseLocation};
pub use db::{Database, DbError};
pub use error::{ClinicError, ClinicResult};
pub use form::{Form, FormError};
pub use models::{
    Appointment, Client, Medicine, Pet, Product, Provider, RecordId, RecordKind, Vet,
};
pub use nav::{clinic_links, mark_active, ActiveNavLink, NavLink};
pub use records::{Clinic, Clock, Record, SaveOutcome};
pub use validation::FieldErrors;
