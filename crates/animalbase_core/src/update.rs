use animal_logging::{animal_error, animal_info, animal_warn};

use crate::winner::request_winner_toggle;
use crate::{AppState, Effect, Filter, FlowError, Msg, Resolution, WinnerOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DataLoaded { records, rejected } => {
            animal_info!(
                "Loaded {} record(s), {} rejected",
                records.len(),
                rejected
            );
            state.replace_records(records, rejected);
            Vec::new()
        }
        Msg::LoadFailed(message) => {
            animal_error!("Load failed: {}", message);
            state.fail_load(message);
            Vec::new()
        }
        Msg::FilterChanged(raw) => {
            let filter = Filter::parse(&raw);
            if state.settings().filter != filter {
                state.settings_mut().filter = filter;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SortChanged { key, direction } => {
            let settings = state.settings_mut();
            if settings.sort_key != key || settings.sort_direction != direction {
                settings.sort_key = key;
                settings.sort_direction = direction;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::StarToggled(name) => {
            match state.position(&name) {
                Some(idx) => {
                    let record = &mut state.records_mut()[idx];
                    record.is_starred = !record.is_starred;
                    state.mark_dirty();
                }
                None => animal_error!("Star toggle for unknown record {:?}", name),
            }
            Vec::new()
        }
        Msg::WinnerToggled(name) => toggle_winner(&mut state, &name),
        Msg::SingleConflictResolved(choice) => {
            let (records, flow) = state.records_and_conflict_mut();
            let result = flow.resolve_single(choice, records);
            finish_resolution(&mut state, result);
            Vec::new()
        }
        Msg::TwoConflictResolved(choice) => {
            let (records, flow) = state.records_and_conflict_mut();
            let result = flow.resolve_two(choice, records);
            finish_resolution(&mut state, result);
            Vec::new()
        }
    };

    (state, effects)
}

fn toggle_winner(state: &mut AppState, name: &str) -> Vec<Effect> {
    if !state.conflict().is_idle() {
        animal_warn!(
            "Winner toggle for {:?} ignored: {}",
            name,
            FlowError::AlreadyActive
        );
        return Vec::new();
    }
    let Some(idx) = state.position(name) else {
        animal_error!("Winner toggle for unknown record {:?}", name);
        return Vec::new();
    };

    let (records, flow) = state.records_and_conflict_mut();
    let effects = match request_winner_toggle(records, idx) {
        WinnerOutcome::Unset | WinnerOutcome::Promote => Vec::new(),
        WinnerOutcome::SingleConflict { incumbent } => {
            animal_info!("There can only be one winner of each type ({})", incumbent);
            match flow.begin_single(incumbent.clone(), name) {
                Ok(()) => vec![Effect::PromptSingleConflict { incumbent }],
                Err(err) => {
                    animal_warn!("Cannot open prompt for {:?}: {}", name, err);
                    Vec::new()
                }
            }
        }
        WinnerOutcome::DoubleConflict { first, second } => {
            animal_info!("There can only be two winners ({}, {})", first, second);
            match flow.begin_two(first.clone(), second.clone(), name) {
                Ok(()) => vec![Effect::PromptTwoConflict { first, second }],
                Err(err) => {
                    animal_warn!("Cannot open prompt for {:?}: {}", name, err);
                    Vec::new()
                }
            }
        }
    };
    state.mark_dirty();
    effects
}

fn finish_resolution(state: &mut AppState, result: Result<Resolution, FlowError>) {
    match result {
        Ok(Resolution::Dismissed) => {
            animal_info!("Conflict prompt dismissed");
            state.mark_dirty();
        }
        Ok(Resolution::Replaced { demoted, promoted }) => {
            animal_info!("Winner {} replaced by {}", demoted, promoted);
            state.mark_dirty();
        }
        Err(err @ FlowError::UnknownRecord(_)) => {
            animal_error!("Conflict resolution failed: {}", err);
            state.mark_dirty();
        }
        Err(err) => animal_warn!("Conflict answer ignored: {}", err),
    }
}
