//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Alert => handle_key_alert(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Alert is modal: dismiss or force-quit, nothing else
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissAlert),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events on the search screen
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // "Track Flight"
        InputKey::Enter => Some(Message::Submit),

        // Esc clears typed text first, quits on an empty field
        InputKey::Esc => {
            if state.query.input.is_empty() {
                Some(Message::Quit)
            } else {
                Some(Message::InputClear)
            }
        }

        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('u') => Some(Message::InputClear),
        InputKey::CharCtrl('c' | 'q') => Some(Message::Quit),

        InputKey::Char(c) if !c.is_control() => Some(Message::InputChar(c)),

        _ => None,
    }
}
