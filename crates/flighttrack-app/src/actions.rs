//! Action handlers: UpdateAction dispatch and background task spawning

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;
use flighttrack_core::FlightNumber;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::ScheduleLookup { code, delay } => {
            tokio::spawn(async move {
                complete_after(code, delay, msg_tx).await;
            });
        }
    }
}

/// Sleep for the simulated latency, then report the search as complete.
///
/// The lookup itself runs in the update handler so the table never leaves
/// the event loop.
async fn complete_after(code: FlightNumber, delay: Duration, msg_tx: mpsc::Sender<Message>) {
    debug!("Lookup for {} scheduled in {:?}", code, delay);
    tokio::time::sleep(delay).await;

    if msg_tx
        .send(Message::LookupCompleted { code: code.clone() })
        .await
        .is_err()
    {
        warn!("Lookup for {} finished after the event loop closed", code);
    }
}
