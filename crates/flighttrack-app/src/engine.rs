//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, and the event
//! broadcaster. Both frontends create one, feed it messages, and read state
//! (TUI) or events (headless) back out.

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use crate::alert::AlertKind;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::query::QueryPhase;
use crate::signals;
use crate::state::AppState;
use flighttrack_core::FlightNumber;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Capacity of the engine event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect what changed
/// and emit the matching EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    phase: QueryPhase,
    pending: Option<FlightNumber>,
    alert_kind: Option<AlertKind>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            phase: state.query.phase,
            pending: state.query.pending.clone(),
            alert_kind: state.alert.as_ref().map(|alert| alert.kind),
        }
    }
}

/// Orchestration engine for Flight Tracker.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, lookup timers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create a new Engine and spawn the OS signal handler.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: Settings) -> Self {
        let engine = Self::without_signals(settings);
        signals::spawn_signal_handler(engine.msg_tx.clone());
        engine
    }

    /// Create an Engine that does not listen for OS signals (tests, embedding)
    pub fn without_signals(settings: Settings) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// Only events emitted after this call are received.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit events
    /// for any resulting state changes.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner,
    /// which drains everything before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Replace the input with `raw` and submit it, as if typed then Enter.
    ///
    /// Bypasses key routing, so an open alert does not block it. Callers
    /// submit before any alert can exist: the startup flight and headless
    /// mode.
    pub fn submit_input(&mut self, raw: &str) {
        debug!("Submitting {:?}", raw);
        self.state.query.input = raw.to_string();
        self.process_message(Message::Submit);
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if let Some(code) = &post.pending {
            if pre.pending.as_ref() != Some(code) {
                self.emit(EngineEvent::SearchStarted { code: code.clone() });
            }
        }

        if pre.phase == QueryPhase::Searching {
            match post.phase {
                QueryPhase::Found => {
                    if let Some(record) = &self.state.query.result {
                        self.emit(EngineEvent::FlightFound {
                            record: record.clone(),
                        });
                    }
                }
                QueryPhase::NotFound => {
                    if let Some(code) = &pre.pending {
                        let hint = self
                            .state
                            .alert
                            .as_ref()
                            .map(|alert| alert.message.clone())
                            .unwrap_or_else(|| self.state.table.not_found_hint());
                        self.emit(EngineEvent::FlightNotFound {
                            code: code.clone(),
                            hint,
                        });
                    }
                }
                QueryPhase::Idle | QueryPhase::Searching => {}
            }
        }

        if pre.alert_kind.is_none() && post.alert_kind == Some(AlertKind::InvalidInput) {
            if let Some(alert) = &self.state.alert {
                self.emit(EngineEvent::InvalidInput {
                    message: alert.message.clone(),
                });
            }
        }
    }

    /// send() only fails when nobody is subscribed.
    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
