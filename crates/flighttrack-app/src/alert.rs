//! Alert modal state.
//!
//! Data model for the blocking alert shown on invalid input or an unknown
//! flight. The rendering widget lives in flighttrack-tui/src/widgets/alert_dialog.rs.

use flighttrack_core::FlightTable;

/// What triggered the alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Submitted with blank input
    InvalidInput,
    /// Code not present in the table
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl AlertState {
    pub fn new(kind: AlertKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Alert for blank input
    pub fn invalid_input() -> Self {
        Self::new(
            AlertKind::InvalidInput,
            "Error",
            "Please enter a flight number",
        )
    }

    /// Alert for an unknown code, listing the codes that do exist
    pub fn not_found(table: &FlightTable) -> Self {
        Self::new(AlertKind::NotFound, "Flight Not Found", table.not_found_hint())
    }
}
