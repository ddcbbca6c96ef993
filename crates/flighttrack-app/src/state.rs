//! Application state (Model in TEA pattern)

use flighttrack_core::FlightTable;

use crate::alert::AlertState;
use crate::config::Settings;
use crate::query::QueryState;

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    /// Event loop exits after the current iteration
    Quitting,
}

/// Which layer currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Search screen: typing, submit, quit
    #[default]
    Normal,
    /// Blocking alert: only dismiss keys are handled
    Alert,
}

/// Spinner animation state shown while a search is outstanding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinnerState {
    /// Animation frame counter
    pub frame: u64,
}

impl SpinnerState {
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Application settings from config file and CLI overrides
    pub settings: Settings,

    /// Flight number input and search lifecycle
    pub query: QueryState,

    /// Alert modal, when one is showing
    pub alert: Option<AlertState>,

    /// Busy indicator animation
    pub spinner: SpinnerState,

    /// Lookup table, fixed for the process lifetime
    pub table: &'static FlightTable,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings and the demo table
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState with explicit settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            settings,
            query: QueryState::new(),
            alert: None,
            spinner: SpinnerState::default(),
            table: FlightTable::demo(),
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.alert.is_some() {
            UiMode::Alert
        } else {
            UiMode::Normal
        }
    }

    pub fn show_alert(&mut self, alert: AlertState) {
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertState;

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.phase, AppPhase::Running);
        assert_eq!(state.ui_mode(), UiMode::Normal);
        assert!(!state.should_quit());
        assert_eq!(state.table.len(), 3);
    }

    #[test]
    fn test_alert_switches_ui_mode() {
        let mut state = AppState::new();
        state.show_alert(AlertState::invalid_input());
        assert_eq!(state.ui_mode(), UiMode::Alert);

        state.dismiss_alert();
        assert_eq!(state.ui_mode(), UiMode::Normal);
    }

    #[test]
    fn test_spinner_tick_and_reset() {
        let mut spinner = SpinnerState::default();
        spinner.tick();
        spinner.tick();
        assert_eq!(spinner.frame, 2);
        spinner.reset();
        assert_eq!(spinner.frame, 0);
    }
}
