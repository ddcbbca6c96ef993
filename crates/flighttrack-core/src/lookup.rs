//! Flight lookup service
//!
//! A fixed table of mock flights keyed by canonical flight number, plus the
//! normalization rules that turn raw user input into a lookup key.
//!
//! ## Flow
//!
//! ```text
//! raw input ──normalize──▶ FlightNumber ──lookup──▶ FlightRecord
//!     │                                     │
//!     └─ blank ─▶ InvalidInput              └─ miss ─▶ NotFound
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::{Endpoint, FlightRecord, FlightStatus};

/// Canonical flight number: trimmed and uppercased, never empty
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FlightNumber(String);

impl FlightNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FlightNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize raw input into a canonical flight number.
///
/// Returns `None` when the input is empty or whitespace only.
pub fn normalize(input: &str) -> Option<FlightNumber> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(FlightNumber(trimmed.to_uppercase()))
}

/// Result of a full search over raw input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Input was blank; no lookup was attempted
    InvalidInput,
    /// Exact match on the canonical code
    Found(&'a FlightRecord),
    /// Valid code with no matching record
    NotFound { code: FlightNumber },
}

impl<'a> SearchOutcome<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Convert into a `Result`, mapping the two failure cases onto [`Error`]
    pub fn into_result(self) -> Result<&'a FlightRecord> {
        match self {
            SearchOutcome::Found(record) => Ok(record),
            SearchOutcome::InvalidInput => Err(Error::EmptyFlightNumber),
            SearchOutcome::NotFound { code } => Err(Error::flight_not_found(code.as_str())),
        }
    }
}

/// Immutable mapping from canonical flight number to record
#[derive(Debug, Clone, Default)]
pub struct FlightTable {
    flights: BTreeMap<String, FlightRecord>,
}

impl FlightTable {
    /// Build a table from records.
    ///
    /// Keys are taken from each record's own flight number, normalized the
    /// same way user input is. Records with a blank flight number are skipped.
    pub fn from_records(records: impl IntoIterator<Item = FlightRecord>) -> Self {
        let flights = records
            .into_iter()
            .filter_map(|record| {
                let code = normalize(&record.flight_number)?;
                Some((code.0, record))
            })
            .collect();
        Self { flights }
    }

    /// The process-wide demo table (AA123, DL456, UA789)
    pub fn demo() -> &'static FlightTable {
        static DEMO: OnceLock<FlightTable> = OnceLock::new();
        DEMO.get_or_init(|| FlightTable::from_records(demo_records()))
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Exact match on an already-canonical code. No fuzzy or prefix matching.
    pub fn lookup(&self, code: &FlightNumber) -> Option<&FlightRecord> {
        self.flights.get(code.as_str())
    }

    /// Normalize then look up
    pub fn search(&self, raw: &str) -> SearchOutcome<'_> {
        let Some(code) = normalize(raw) else {
            return SearchOutcome::InvalidInput;
        };
        match self.lookup(&code) {
            Some(record) => SearchOutcome::Found(record),
            None => SearchOutcome::NotFound { code },
        }
    }

    /// Known codes in sorted order
    pub fn demo_codes(&self) -> Vec<&str> {
        self.flights.keys().map(String::as_str).collect()
    }

    /// Message shown when a code is not in the table
    pub fn not_found_hint(&self) -> String {
        let codes = self.demo_codes();
        match codes.as_slice() {
            [] => "No flight found with that number.".to_string(),
            [only] => format!("No flight found with that number. Try {only}."),
            [rest @ .., last] => format!(
                "No flight found with that number. Try {}, or {last}.",
                rest.join(", ")
            ),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlightRecord> {
        self.flights.values()
    }
}

fn demo_records() -> Vec<FlightRecord> {
    vec![
        FlightRecord::new(
            "AA123",
            "American Airlines",
            Endpoint::new("JFK", "New York", "2:30 PM").with_gate("A12"),
            Endpoint::new("LAX", "Los Angeles", "6:45 PM").with_gate("B8"),
            FlightStatus::OnTime,
        )
        .with_aircraft("Boeing 737-800"),
        FlightRecord::new(
            "DL456",
            "Delta Air Lines",
            Endpoint::new("ATL", "Atlanta", "9:15 AM").with_gate("C15"),
            Endpoint::new("MIA", "Miami", "11:30 AM").with_gate("D22"),
            FlightStatus::Delayed,
        )
        .with_aircraft("Airbus A320")
        .with_delay(25),
        FlightRecord::new(
            "UA789",
            "United Airlines",
            Endpoint::new("ORD", "Chicago", "1:00 PM").with_gate("E7"),
            Endpoint::new("SFO", "San Francisco", "3:30 PM").with_gate("F14"),
            FlightStatus::Departed,
        )
        .with_aircraft("Boeing 777-200"),
    ]
}
