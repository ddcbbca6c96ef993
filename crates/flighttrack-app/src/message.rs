//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use flighttrack_core::FlightNumber;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application (Esc on empty input, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Input Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the flight number input
    InputChar(char),
    /// Delete the last character of the input
    InputBackspace,
    /// Clear the whole input
    InputClear,

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// "Track Flight" pressed
    Submit,
    /// Simulated latency elapsed for a pending search
    LookupCompleted { code: FlightNumber },

    // ─────────────────────────────────────────────────────────
    // Alert Messages
    // ─────────────────────────────────────────────────────────
    /// Close the alert modal
    DismissAlert,
}
