//! Navigation bar links with an active-page flag.
//!
//! The link list is passed in per request; nothing here holds state.

use serde::{Deserialize, Serialize};

use crate::models::RecordKind;

pub const HOME_PATH: &str = "/";

/// A navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Bootstrap icon classes
    pub icon: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Whether this link points at the page being served.
    ///
    /// The home link only matches itself; every other link also matches the
    /// pages below it.
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.href == HOME_PATH {
            current_path == HOME_PATH
        } else {
            current_path.starts_with(&self.href)
        }
    }
}

/// A link plus whether it is the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveNavLink {
    #[serde(flatten)]
    pub link: NavLink,
    pub active: bool,
}

/// Flag the links matching `current_path`, preserving order.
pub fn mark_active(current_path: &str, links: &[NavLink]) -> Vec<ActiveNavLink> {
    links
        .iter()
        .map(|link| ActiveNavLink {
            active: link.is_active(current_path),
            link: link.clone(),
        })
        .collect()
}

/// The clinic's navigation bar.
pub fn clinic_links() -> Vec<NavLink> {
    let mut links = vec![NavLink::new("Home", HOME_PATH, "bi bi-house-door")];
    links.extend(RecordKind::ALL.iter().map(|&kind| {
        let (label, icon) = match kind {
            RecordKind::Client => ("Clientes", "bi bi-people"),
            RecordKind::Product => ("Productos", "bi bi-box"),
            RecordKind::Pet => ("Mascotas", "bi bi-paw"),
            RecordKind::Vet => ("Veterinarios", "bi bi-person"),
            RecordKind::Appointment => ("Citas", "bi bi-calendar"),
            RecordKind::Medicine => ("Medicamentos", "bi bi-capsule"),
            RecordKind::Provider => ("Proveedores", "bi bi-truck"),
        };
        NavLink::new(label, kind.listing_path(), icon)
    }));
    links
}
