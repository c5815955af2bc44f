//! Display fields for cards, map popups, and the detail panel.
//!
//! Absent attributes are replaced with fixed fallback text here, so renderers
//! never need to know which fields are optional.

use serde::Serialize;

use crate::branch::Branch;

pub const UNKNOWN_BRANCH: &str = "Unknown Branch";
pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";
pub const DEFAULT_CATEGORY: &str = "Branch";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NOT_AVAILABLE: &str = "Not available";
pub const UNKNOWN: &str = "Unknown";

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    value.unwrap_or(fallback).to_string()
}

fn location_line(branch: &Branch) -> String {
    let location = branch.location.as_deref().unwrap_or(UNKNOWN);
    match branch.area.as_deref() {
        Some(area) => format!("{location} - {area}"),
        None => location.to_string(),
    }
}

/// Fields shown on a result card in the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFields {
    pub name: String,
    pub category: String,
    pub address: String,
    pub operating_hours: String,
    pub contact: String,
    pub banking_days: String,
    pub badge: String,
}

impl CardFields {
    #[must_use]
    pub fn from_branch(branch: &Branch) -> Self {
        Self {
            name: or_fallback(branch.name.as_deref(), UNKNOWN_BRANCH),
            category: or_fallback(branch.category.as_deref(), DEFAULT_CATEGORY),
            address: or_fallback(branch.address.as_deref(), ADDRESS_NOT_AVAILABLE),
            operating_hours: or_fallback(branch.operating_hours.as_deref(), NOT_SPECIFIED),
            contact: or_fallback(branch.contact_primary.as_deref(), NOT_AVAILABLE),
            banking_days: or_fallback(branch.banking_days.as_deref(), NOT_SPECIFIED),
            badge: location_line(branch),
        }
    }
}

/// Fields shown in the branch detail panel.
///
/// `email`, `coordinates`, and `service_note` are omitted from the panel
/// entirely when absent rather than shown with fallback text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailFields {
    pub title: String,
    pub address: String,
    pub category: String,
    pub operating_hours: String,
    pub banking_days: String,
    pub contacts: Vec<String>,
    pub email: Option<String>,
    pub location: String,
    /// Raw latitude/longitude text, present only when both are set.
    pub coordinates: Option<(String, String)>,
    pub service_note: Option<String>,
}

impl DetailFields {
    #[must_use]
    pub fn from_branch(branch: &Branch) -> Self {
        let mut contacts = Vec::new();
        if let Some(primary) = branch.contact_primary.as_deref() {
            contacts.push(format!("Primary: {primary}"));
        }
        if let Some(secondary) = branch.contact_secondary.as_deref() {
            contacts.push(format!("Secondary: {secondary}"));
        }
        if contacts.is_empty() {
            contacts.push(NOT_AVAILABLE.to_string());
        }

        let coordinates = branch
            .latitude
            .clone()
            .zip(branch.longitude.clone());

        Self {
            title: or_fallback(branch.name.as_deref(), UNKNOWN_BRANCH),
            address: or_fallback(branch.address.as_deref(), NOT_AVAILABLE),
            category: or_fallback(branch.category.as_deref(), DEFAULT_CATEGORY),
            operating_hours: or_fallback(branch.operating_hours.as_deref(), NOT_SPECIFIED),
            banking_days: or_fallback(branch.banking_days.as_deref(), NOT_SPECIFIED),
            contacts,
            email: branch.email.clone(),
            location: location_line(branch),
            coordinates,
            service_note: branch.service_note.clone(),
        }
    }
}

/// Popup content attached to a map marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popup {
    pub title: String,
    pub rows: Vec<String>,
}

impl Popup {
    /// Popup for a marker on the main results map.
    #[must_use]
    pub fn for_marker(branch: &Branch) -> Self {
        Self {
            title: or_fallback(branch.name.as_deref(), UNKNOWN_BRANCH),
            rows: vec![
                or_fallback(branch.address.as_deref(), ADDRESS_NOT_AVAILABLE),
                or_fallback(branch.category.as_deref(), DEFAULT_CATEGORY),
                or_fallback(branch.operating_hours.as_deref(), NOT_SPECIFIED),
                or_fallback(branch.contact_primary.as_deref(), NOT_AVAILABLE),
            ],
        }
    }

    /// Compact popup for the single marker on the detail map.
    #[must_use]
    pub fn for_detail(branch: &Branch) -> Self {
        Self {
            title: or_fallback(branch.name.as_deref(), UNKNOWN_BRANCH),
            rows: vec![or_fallback(branch.address.as_deref(), ADDRESS_NOT_AVAILABLE)],
        }
    }
}
