//! Animalbase core: pure state machine, winner rules and view-model helpers.
mod conflict;
mod controller;
mod effect;
mod msg;
mod projection;
mod record;
mod settings;
mod state;
mod update;
mod view_model;
mod winner;

pub use conflict::{ConflictFlow, FlowError, Resolution, SingleChoice, TwoChoice};
pub use controller::{ConflictPrompt, Controller, Renderer};
pub use effect::Effect;
pub use msg::Msg;
pub use projection::{available_types, project};
pub use record::{AnimalRecord, RecordError};
pub use settings::{
    Filter, HeaderDirections, SettingsParseError, SortDirection, SortKey, ViewSettings, FILTER_ALL,
};
pub use state::AppState;
pub use update::update;
pub use view_model::{AnimalRowView, AppViewModel, LoadStatus, PromptView};
pub use winner::{request_winner_toggle, winners_within_limits, WinnerOutcome, MAX_WINNERS};
