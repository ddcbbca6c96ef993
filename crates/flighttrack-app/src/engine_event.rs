//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use flighttrack_core::{FlightNumber, FlightRecord};

/// Domain events emitted by the Engine.
///
/// Derived from state changes, so subscribers see a consistent view of what
/// happened during a processing cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Search Lifecycle
    // ─────────────────────────────────────────────────────────
    /// A valid code was submitted and the simulated lookup started
    SearchStarted { code: FlightNumber },

    /// The pending search matched a record
    FlightFound { record: FlightRecord },

    /// The pending search matched nothing
    FlightNotFound { code: FlightNumber, hint: String },

    /// Submit was pressed with blank input
    InvalidInput { message: String },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Get a short name for this event type (for logging/filtering)
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::SearchStarted { .. } => "search_started",
            EngineEvent::FlightFound { .. } => "flight_found",
            EngineEvent::FlightNotFound { .. } => "flight_not_found",
            EngineEvent::InvalidInput { .. } => "invalid_input",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
