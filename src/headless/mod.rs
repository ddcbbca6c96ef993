//! Headless mode - JSON event output for scripts and tests
//!
//! Performs one lookup and prints NDJSON (newline-delimited JSON) events to
//! stdout, one per line, each with an "event" field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"search_started","flight":"DL456","delay_ms":1000,"timestamp":1704700001000}
//! {"event":"flight_found","record":{"flight_number":"DL456",...},"timestamp":1704700002000}
//! ```

pub mod runner;

pub use runner::{run_headless, run_search, HeadlessOutcome};

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use flighttrack_app::EngineEvent;
use flighttrack_core::prelude::*;
use flighttrack_core::FlightRecord;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Valid flight number submitted; the result follows after `delay_ms`
    SearchStarted {
        flight: String,
        delay_ms: u64,
        timestamp: i64,
    },

    FlightFound {
        record: FlightRecord,
        timestamp: i64,
    },

    FlightNotFound {
        flight: String,
        message: String,
        timestamp: i64,
    },

    /// Blank flight number
    InvalidInput { message: String, timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Serialize as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Translate an engine event; `Shutdown` has no headless counterpart
    pub fn from_engine(event: &EngineEvent, delay_ms: u64) -> Option<Self> {
        let timestamp = Self::now();
        match event {
            EngineEvent::SearchStarted { code } => Some(Self::SearchStarted {
                flight: code.to_string(),
                delay_ms,
                timestamp,
            }),
            EngineEvent::FlightFound { record } => Some(Self::FlightFound {
                record: record.clone(),
                timestamp,
            }),
            EngineEvent::FlightNotFound { code, hint } => Some(Self::FlightNotFound {
                flight: code.to_string(),
                message: hint.clone(),
                timestamp,
            }),
            EngineEvent::InvalidInput { message } => Some(Self::InvalidInput {
                message: message.clone(),
                timestamp,
            }),
            EngineEvent::Shutdown => None,
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}
