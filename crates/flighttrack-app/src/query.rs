//! Per-screen query state
//!
//! Tracks the text typed into the flight number field and where the current
//! search is in its lifecycle:
//!
//! ```text
//! Idle ──submit──▶ Searching ──hit──▶ Found
//!                      │
//!                      └──miss──▶ NotFound
//! ```
//!
//! Found and NotFound accept a new submit, which returns to Searching.

use flighttrack_core::{FlightNumber, FlightRecord};

/// Query lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    /// Nothing searched yet
    #[default]
    Idle,
    /// Waiting out the simulated latency
    Searching,
    /// Last search matched a record
    Found,
    /// Last search matched nothing
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Raw text as typed
    pub input: String,
    pub phase: QueryPhase,
    /// Record shown on the detail card
    pub result: Option<FlightRecord>,
    /// Code of the search in flight, if any
    pub pending: Option<FlightNumber>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submission is inert while true
    pub fn is_busy(&self) -> bool {
        self.phase == QueryPhase::Searching
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Enter `Searching` for `code`. The displayed result is kept until the
    /// search completes.
    pub fn begin_search(&mut self, code: FlightNumber) {
        self.phase = QueryPhase::Searching;
        self.pending = Some(code);
    }

    /// Whether `code` is the search currently in flight
    pub fn is_pending(&self, code: &FlightNumber) -> bool {
        self.pending.as_ref() == Some(code)
    }

    pub fn complete_found(&mut self, record: FlightRecord) {
        self.phase = QueryPhase::Found;
        self.result = Some(record);
        self.pending = None;
    }

    /// Miss: the previous detail card is cleared
    pub fn complete_not_found(&mut self) {
        self.phase = QueryPhase::NotFound;
        self.result = None;
        self.pending = None;
    }
}
