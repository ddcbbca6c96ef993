//! Core domain type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operational status of a flight
///
/// Serialized as the human-readable label ("On Time", "Delayed", ...).
/// Labels outside the known set deserialize to [`FlightStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FlightStatus {
    OnTime,
    Delayed,
    Departed,
    Arrived,
    Cancelled,
    /// Status label not recognized by this build
    Unknown,
}

impl FlightStatus {
    /// All recognized statuses, in display order
    pub const KNOWN: [FlightStatus; 5] = [
        FlightStatus::OnTime,
        FlightStatus::Delayed,
        FlightStatus::Departed,
        FlightStatus::Arrived,
        FlightStatus::Cancelled,
    ];

    /// Display label shown next to the flight number
    pub fn label(&self) -> &'static str {
        match self {
            FlightStatus::OnTime => "On Time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Departed => "Departed",
            FlightStatus::Arrived => "Arrived",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Unknown => "Unknown",
        }
    }

    /// Parse a display label. Matching ignores case and surrounding whitespace;
    /// anything unrecognized maps to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::KNOWN
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(label))
            .unwrap_or(FlightStatus::Unknown)
    }

    /// Accent used when rendering this status. Total over every variant.
    pub fn accent(&self) -> StatusAccent {
        match self {
            FlightStatus::OnTime => StatusAccent::Green,
            FlightStatus::Delayed => StatusAccent::Orange,
            FlightStatus::Cancelled => StatusAccent::Red,
            FlightStatus::Departed => StatusAccent::Blue,
            FlightStatus::Arrived => StatusAccent::Green,
            FlightStatus::Unknown => StatusAccent::Neutral,
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for FlightStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<FlightStatus> for String {
    fn from(status: FlightStatus) -> Self {
        status.label().to_string()
    }
}

/// Display accent for a status, independent of any terminal color type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusAccent {
    Green,
    Orange,
    Red,
    Blue,
    /// Default label color
    Neutral,
}

/// Departure or arrival descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// IATA airport code (e.g. "JFK")
    pub airport: String,
    pub city: String,
    /// Local time as a display string (e.g. "2:30 PM")
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
}

impl Endpoint {
    pub fn new(airport: impl Into<String>, city: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            airport: airport.into(),
            city: city.into(),
            time: time.into(),
            gate: None,
        }
    }

    pub fn with_gate(mut self, gate: impl Into<String>) -> Self {
        self.gate = Some(gate.into());
        self
    }

    /// "Gate A12", or `None` when no gate is assigned
    pub fn gate_label(&self) -> Option<String> {
        self.gate.as_ref().map(|gate| format!("Gate {gate}"))
    }
}

/// One flight, as shown on the detail card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Canonical uppercase identifier (e.g. "AA123")
    pub flight_number: String,
    pub airline: String,
    pub departure: Endpoint,
    pub arrival: Endpoint,
    pub status: FlightStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_minutes: Option<u32>,
}

impl FlightRecord {
    pub fn new(
        flight_number: impl Into<String>,
        airline: impl Into<String>,
        departure: Endpoint,
        arrival: Endpoint,
        status: FlightStatus,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            airline: airline.into(),
            departure,
            arrival,
            status,
            aircraft: None,
            delay_minutes: None,
        }
    }

    pub fn with_aircraft(mut self, aircraft: impl Into<String>) -> Self {
        self.aircraft = Some(aircraft.into());
        self
    }

    pub fn with_delay(mut self, minutes: u32) -> Self {
        self.delay_minutes = Some(minutes);
        self
    }

    /// Minutes of delay worth showing.
    ///
    /// Only a `Delayed` flight with a positive delay reports one; a stray
    /// `delay_minutes` on any other status is ignored.
    pub fn effective_delay(&self) -> Option<u32> {
        match (self.status, self.delay_minutes) {
            (FlightStatus::Delayed, Some(minutes)) if minutes > 0 => Some(minutes),
            _ => None,
        }
    }

    /// Suffix appended to the status label, e.g. " (25 min delay)"
    pub fn delay_suffix(&self) -> Option<String> {
        self.effective_delay()
            .map(|minutes| format!(" ({minutes} min delay)"))
    }

    /// Status label including any delay suffix
    pub fn status_text(&self) -> String {
        match self.delay_suffix() {
            Some(suffix) => format!("{}{}", self.status.label(), suffix),
            None => self.status.label().to_string(),
        }
    }

    /// Whether `delay_minutes` is consistent with `status`
    pub fn delay_is_consistent(&self) -> bool {
        self.delay_minutes.is_none() || self.status == FlightStatus::Delayed
    }
}
