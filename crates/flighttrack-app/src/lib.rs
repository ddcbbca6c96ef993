//! flighttrack-app - Application state and orchestration for Flight Tracker
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! flight lookup screen: messages, state, the update function, the Engine
//! shared by the TUI and headless runners, and configuration loading.

pub mod actions;
pub mod alert;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod query;
pub mod signals;
pub mod state;

// Re-export primary types
pub use alert::{AlertKind, AlertState};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use query::{QueryPhase, QueryState};
pub use state::{AppPhase, AppState, UiMode};
