//! Headless mode runner - one lookup without the TUI

use std::io::{self, Write};
use std::process::ExitCode;

use tokio::sync::broadcast::error::TryRecvError;

use flighttrack_app::config::Settings;
use flighttrack_app::{Engine, EngineEvent};
use tracing::{error, info, warn};

use flighttrack_core::prelude::*;

use super::HeadlessEvent;

/// How a headless lookup ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Found,
    NotFound,
    InvalidInput,
    /// Quit (signal) before the lookup finished
    Interrupted,
}

impl HeadlessOutcome {
    fn from_event(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::FlightFound { .. } => Some(Self::Found),
            EngineEvent::FlightNotFound { .. } => Some(Self::NotFound),
            EngineEvent::InvalidInput { .. } => Some(Self::InvalidInput),
            EngineEvent::SearchStarted { .. } | EngineEvent::Shutdown => None,
        }
    }

    /// 0 when the flight was found, 1 otherwise
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Found => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    }
}

/// Run in headless mode: look up `flight` and print NDJSON events to stdout
pub async fn run_headless(settings: Settings, flight: &str) -> Result<HeadlessOutcome> {
    info!("═══════════════════════════════════════════════════════");
    info!("Flight Tracker starting in HEADLESS mode");
    info!("Flight: {:?}", flight);
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);
    let mut stdout = io::stdout();
    let result = run_search(&mut engine, flight, &mut stdout).await;

    if let Err(ref e) = result {
        error!("Headless lookup failed: {}", e);
        // Best effort; stdout may be what failed
        let _ = HeadlessEvent::error(e.to_string(), e.is_fatal()).write_to(&mut stdout);
    }

    engine.shutdown();
    info!("Flight Tracker headless mode exiting");
    result
}

/// Submit `flight` to `engine` and write events to `out` until the search
/// resolves.
pub async fn run_search<W: Write>(
    engine: &mut Engine,
    flight: &str,
    out: &mut W,
) -> Result<HeadlessOutcome> {
    let mut events = engine.subscribe();
    let delay_ms = engine.state.settings.lookup.delay().as_millis() as u64;

    engine.submit_input(flight);

    loop {
        loop {
            let event = match events.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Headless output skipped {} engine events", skipped);
                    continue;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            };

            if let Some(headless_event) = HeadlessEvent::from_engine(&event, delay_ms) {
                headless_event.write_to(out)?;
            }
            if let Some(outcome) = HeadlessOutcome::from_event(&event) {
                return Ok(outcome);
            }
        }

        if engine.should_quit() {
            HeadlessEvent::error("Interrupted before the lookup finished", false)
                .write_to(out)?;
            return Ok(HeadlessOutcome::Interrupted);
        }

        if !engine.process_next().await {
            return Err(Error::ChannelClosed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flighttrack_app::Message;

    fn engine(delay_ms: u64) -> Engine {
        let mut settings = Settings::default();
        settings.lookup.delay_ms = delay_ms;
        Engine::without_signals(settings)
    }

    fn lines(out: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_found_emits_two_events() {
        let mut engine = engine(1000);
        let mut out = Vec::new();

        let outcome = run_search(&mut engine, " aa123 ", &mut out).await.unwrap();

        assert_eq!(outcome, HeadlessOutcome::Found);
        let events = lines(&out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "search_started");
        assert_eq!(events[0]["flight"], "AA123");
        assert_eq!(events[1]["event"], "flight_found");
        assert_eq!(events[1]["record"]["status"], "On Time");
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found() {
        let mut engine = engine(10);
        let mut out = Vec::new();

        let outcome = run_search(&mut engine, "ZZ999", &mut out).await.unwrap();

        assert_eq!(outcome, HeadlessOutcome::NotFound);
        let events = lines(&out);
        assert_eq!(events[1]["event"], "flight_not_found");
        assert!(events[1]["message"].as_str().unwrap().contains("UA789"));
    }

    #[tokio::test]
    async fn test_blank_input_is_immediate() {
        let mut engine = engine(1000);
        let mut out = Vec::new();

        let outcome = run_search(&mut engine, "   ", &mut out).await.unwrap();

        assert_eq!(outcome, HeadlessOutcome::InvalidInput);
        let events = lines(&out);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "invalid_input");
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_before_completion_is_interrupted() {
        let mut engine = engine(1000);
        engine.msg_sender().send(Message::Quit).await.unwrap();
        let mut out = Vec::new();

        let outcome = run_search(&mut engine, "DL456", &mut out).await.unwrap();

        assert_eq!(outcome, HeadlessOutcome::Interrupted);
        let events = lines(&out);
        assert_eq!(events.last().unwrap()["event"], "error");
    }

    #[test]
    fn test_only_resolving_events_end_the_run() {
        let code = flighttrack_core::normalize("AA123").unwrap();
        assert_eq!(
            HeadlessOutcome::from_event(&EngineEvent::SearchStarted { code: code.clone() }),
            None
        );
        assert_eq!(HeadlessOutcome::from_event(&EngineEvent::Shutdown), None);
        assert_eq!(
            HeadlessOutcome::from_event(&EngineEvent::FlightNotFound {
                code,
                hint: String::new()
            }),
            Some(HeadlessOutcome::NotFound)
        );
        assert_eq!(
            HeadlessOutcome::from_event(&EngineEvent::InvalidInput {
                message: String::new()
            }),
            Some(HeadlessOutcome::InvalidInput)
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(HeadlessOutcome::Found.exit_code(), ExitCode::SUCCESS);
        assert_eq!(HeadlessOutcome::NotFound.exit_code(), ExitCode::FAILURE);
        assert_eq!(HeadlessOutcome::InvalidInput.exit_code(), ExitCode::FAILURE);
    }
}
