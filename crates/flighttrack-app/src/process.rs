//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages returned by `update` are processed immediately, in
/// order; actions are dispatched as background tasks that report back on
/// `msg_tx`.
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone());
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::query::QueryPhase;

    #[tokio::test(start_paused = true)]
    async fn test_key_enter_runs_through_to_scheduled_lookup() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::new();
        for c in "ua789".chars() {
            process_message(&mut state, Message::Key(InputKey::Char(c)), &tx);
        }

        process_message(&mut state, Message::Key(InputKey::Enter), &tx);
        assert_eq!(state.query.phase, QueryPhase::Searching);

        let completed = rx.recv().await.unwrap();
        process_message(&mut state, completed, &tx);
        assert_eq!(state.query.phase, QueryPhase::Found);
    }

    #[tokio::test]
    async fn test_blank_submit_spawns_nothing() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::new();

        process_message(&mut state, Message::Submit, &tx);

        assert!(state.alert.is_some());
        assert!(rx.try_recv().is_err());
    }
}
