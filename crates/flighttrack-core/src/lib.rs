//! # flighttrack-core - Core Domain Types
//!
//! Foundation crate for Flight Tracker. Provides domain types, the flight
//! lookup service, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`FlightRecord`] - One flight with route, status, aircraft, and delay
//! - [`Endpoint`] - Departure or arrival airport, city, time, and gate
//! - [`FlightStatus`] - On Time, Delayed, Departed, Arrived, Cancelled
//! - [`StatusAccent`] - Display accent for a status
//!
//! ### Lookup (`lookup`)
//! - [`normalize()`] - Turn raw input into a canonical [`FlightNumber`]
//! - [`FlightTable`] - Immutable table with `lookup` and `search`
//! - [`SearchOutcome`] - InvalidInput, Found, or NotFound
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use flighttrack_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod lookup;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use lookup::{normalize, FlightNumber, FlightTable, SearchOutcome};
pub use types::{Endpoint, FlightRecord, FlightStatus, StatusAccent};
