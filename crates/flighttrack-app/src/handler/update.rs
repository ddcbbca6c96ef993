//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppPhase;
use crate::state::AppState;

use super::{keys::handle_key, search, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.query.is_busy() {
                state.spinner.tick();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Input Messages
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            state.query.push_char(c);
            UpdateResult::none()
        }

        Message::InputBackspace => {
            state.query.pop_char();
            UpdateResult::none()
        }

        Message::InputClear => {
            state.query.clear_input();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => search::handle_submit(state),

        Message::LookupCompleted { code } => search::handle_lookup_completed(state, code),

        // ─────────────────────────────────────────────────────────
        // Alert Messages
        // ─────────────────────────────────────────────────────────
        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }
    }
}
