//! End-to-end search flow through the Engine, as the TUI and headless
//! runners drive it.

use std::time::Duration;

use clap::Parser;
use flight_tracker::cli::Args;
use flight_tracker::headless::{run_search, HeadlessOutcome};
use flighttrack_app::config::Settings;
use flighttrack_app::{AlertKind, Engine, InputKey, Message, QueryPhase, UiMode};
use flighttrack_core::{FlightStatus, StatusAccent};
use tokio::time::Instant;

fn engine_with_delay(delay_ms: u64) -> Engine {
    let mut settings = Settings::default();
    settings.lookup.delay_ms = delay_ms;
    Engine::without_signals(settings)
}

fn type_and_submit(engine: &mut Engine, text: &str) {
    for c in text.chars() {
        engine.process_message(Message::Key(InputKey::Char(c)));
    }
    engine.process_message(Message::Key(InputKey::Enter));
}

/// Process messages until the pending search resolves
async fn settle(engine: &mut Engine) {
    while engine.state.query.is_busy() {
        assert!(engine.process_next().await, "channel closed mid-search");
    }
}

#[tokio::test(start_paused = true)]
async fn on_time_flight_after_delay() {
    let mut engine = engine_with_delay(1000);
    let started = Instant::now();

    type_and_submit(&mut engine, "AA123");
    assert_eq!(engine.state.query.phase, QueryPhase::Searching);
    assert!(engine.state.query.result.is_none());

    settle(&mut engine).await;

    assert!(started.elapsed() >= Duration::from_millis(1000));
    let record = engine.state.query.result.as_ref().unwrap();
    assert_eq!(record.status, FlightStatus::OnTime);
    assert_eq!(record.status.accent(), StatusAccent::Green);
    assert_eq!(record.departure.gate.as_deref(), Some("A12"));
    assert_eq!(record.aircraft.as_deref(), Some("Boeing 737-800"));
}

#[tokio::test(start_paused = true)]
async fn lowercase_delayed_flight() {
    let mut engine = engine_with_delay(1000);

    type_and_submit(&mut engine, "dl456");
    settle(&mut engine).await;

    let record = engine.state.query.result.as_ref().unwrap();
    assert_eq!(record.flight_number, "DL456");
    assert_eq!(record.status_text(), "Delayed (25 min delay)");
    assert_eq!(record.status.accent(), StatusAccent::Orange);
}

#[tokio::test(start_paused = true)]
async fn departed_flight_is_blue() {
    let mut engine = engine_with_delay(1000);

    type_and_submit(&mut engine, "ua789");
    settle(&mut engine).await;

    let record = engine.state.query.result.as_ref().unwrap();
    assert_eq!(record.status, FlightStatus::Departed);
    assert_eq!(record.status.accent(), StatusAccent::Blue);
}

#[tokio::test(start_paused = true)]
async fn unknown_flight_shows_alert_then_dismisses() {
    let mut engine = engine_with_delay(1000);

    type_and_submit(&mut engine, "ZZ999");
    settle(&mut engine).await;

    assert_eq!(engine.state.query.phase, QueryPhase::NotFound);
    assert!(engine.state.query.result.is_none());
    let alert = engine.state.alert.as_ref().unwrap();
    assert_eq!(alert.kind, AlertKind::NotFound);
    assert_eq!(
        alert.message,
        "No flight found with that number. Try AA123, DL456, or UA789."
    );

    engine.process_message(Message::Key(InputKey::Enter));
    assert_eq!(engine.state.ui_mode(), UiMode::Normal);
    // Input survives the alert
    assert_eq!(engine.state.query.input, "ZZ999");
}

#[tokio::test]
async fn empty_input_alerts_without_waiting() {
    let mut engine = engine_with_delay(1000);

    engine.process_message(Message::Key(InputKey::Enter));

    assert_eq!(engine.state.query.phase, QueryPhase::Idle);
    let alert = engine.state.alert.as_ref().unwrap();
    assert_eq!(alert.kind, AlertKind::InvalidInput);
    assert_eq!(engine.drain_pending_messages(), 0);
}

#[tokio::test(start_paused = true)]
async fn second_submit_during_search_is_ignored() {
    let mut engine = engine_with_delay(1000);

    type_and_submit(&mut engine, "AA123");
    engine.process_message(Message::Key(InputKey::Enter));
    engine.process_message(Message::Submit);

    settle(&mut engine).await;
    assert_eq!(engine.state.query.phase, QueryPhase::Found);

    // Only one completion was ever scheduled
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(engine.drain_pending_messages(), 0);
}

#[tokio::test(start_paused = true)]
async fn headless_search_reports_outcome() {
    let mut engine = engine_with_delay(250);
    let mut out = Vec::new();

    let outcome = run_search(&mut engine, "dl456", &mut out).await.unwrap();

    assert_eq!(outcome, HeadlessOutcome::Found);
    let text = String::from_utf8(out).unwrap();
    let events: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(events[0]["event"], "search_started");
    assert_eq!(events[0]["delay_ms"], 250);
    assert_eq!(events[1]["record"]["delay_minutes"], 25);
}

#[test]
fn config_file_and_cli_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[lookup]\ndelay_ms = 40\n\n[ui]\nshow_demo_hint = false\n").unwrap();
    let path_arg = path.to_string_lossy().to_string();

    let args = Args::try_parse_from(["flighttrack", "--config", &path_arg]).unwrap();
    let settings = flight_tracker::load_settings(&args);
    assert_eq!(settings.lookup.delay_ms, 40);
    assert!(!settings.ui.show_demo_hint);

    let args =
        Args::try_parse_from(["flighttrack", "--config", &path_arg, "--delay-ms", "7"]).unwrap();
    assert_eq!(flight_tracker::load_settings(&args).lookup.delay_ms, 7);
}

#[test]
fn missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let path_arg = path.to_string_lossy().to_string();

    let args = Args::try_parse_from(["flighttrack", "--config", &path_arg]).unwrap();
    assert_eq!(flight_tracker::load_settings(&args), Settings::default());
}
