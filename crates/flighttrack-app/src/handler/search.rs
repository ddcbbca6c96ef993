//! Search handlers: submit and simulated-lookup completion

use flighttrack_core::prelude::*;
use flighttrack_core::{normalize, FlightNumber};

use crate::alert::AlertState;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Handle "Track Flight"
///
/// Blank input raises the alert immediately and never schedules a lookup.
/// A submit while a search is outstanding is ignored.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.query.is_busy() {
        debug!("Submit ignored: search already in progress");
        return UpdateResult::none();
    }

    let Some(code) = normalize(&state.query.input) else {
        debug!("Submit rejected: empty flight number");
        state.show_alert(AlertState::invalid_input());
        return UpdateResult::none();
    };

    let delay = state.settings.lookup.delay();
    info!("Searching for flight {} ({}ms)", code, delay.as_millis());

    state.query.begin_search(code.clone());
    state.spinner.reset();

    UpdateResult::action(UpdateAction::ScheduleLookup { code, delay })
}

/// Handle the end of the simulated latency for `code`
pub fn handle_lookup_completed(state: &mut AppState, code: FlightNumber) -> UpdateResult {
    if !state.query.is_pending(&code) {
        debug!("Ignoring stale lookup completion for {}", code);
        return UpdateResult::none();
    }

    let table = state.table;
    match table.lookup(&code) {
        Some(record) => {
            info!("Flight {} found: {}", code, record.status);
            state.query.complete_found(record.clone());
        }
        None => {
            info!("Flight {} not found", code);
            state.query.complete_not_found();
            state.show_alert(AlertState::not_found(table));
        }
    }

    UpdateResult::none()
}
