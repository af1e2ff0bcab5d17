use crate::projection::{available_types, project};
use crate::view_model::{AppViewModel, LoadStatus, PromptView};
use crate::{AnimalRecord, ConflictFlow, ViewSettings};

/// Everything the session knows: the record store, view settings and the
/// conflict prompt in progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    records: Vec<AnimalRecord>,
    settings: ViewSettings,
    conflict: ConflictFlow,
    load: LoadStatus,
    rejected_entries: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with `records` already loaded, for adapters that parse their own input.
    pub fn with_records(records: Vec<AnimalRecord>) -> Self {
        let mut state = Self::new();
        state.replace_records(records, 0);
        state.dirty = false;
        state
    }

    pub fn records(&self) -> &[AnimalRecord] {
        &self.records
    }

    pub fn record(&self, name: &str) -> Option<&AnimalRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn conflict(&self) -> &ConflictFlow {
        &self.conflict
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    pub fn winner_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_winner).count()
    }

    pub fn view(&self) -> AppViewModel {
        let prompt = match &self.conflict {
            ConflictFlow::Idle => None,
            ConflictFlow::AwaitingSingleChoice { incumbent, .. } => {
                Some(PromptView::SingleConflict {
                    incumbent: incumbent.clone(),
                })
            }
            ConflictFlow::AwaitingTwoChoice { first, second, .. } => {
                Some(PromptView::TwoConflict {
                    first: first.clone(),
                    second: second.clone(),
                })
            }
        };
        AppViewModel {
            load: self.load.clone(),
            rows: project(&self.records, &self.settings)
                .into_iter()
                .map(Into::into)
                .collect(),
            settings: self.settings.clone(),
            available_types: available_types(&self.records),
            total_records: self.records.len(),
            rejected_entries: self.rejected_entries,
            winner_count: self.winner_count(),
            prompt,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    pub(crate) fn replace_records(&mut self, records: Vec<AnimalRecord>, rejected_entries: usize) {
        self.records = records;
        self.rejected_entries = rejected_entries;
        self.conflict = ConflictFlow::Idle;
        self.load = LoadStatus::Loaded;
        self.mark_dirty();
    }

    pub(crate) fn fail_load(&mut self, message: String) {
        self.load = LoadStatus::Failed(message);
        self.mark_dirty();
    }

    pub(crate) fn settings_mut(&mut self) -> &mut ViewSettings {
        &mut self.settings
    }

    pub(crate) fn records_and_conflict_mut(&mut self) -> (&mut [AnimalRecord], &mut ConflictFlow) {
        (&mut self.records, &mut self.conflict)
    }

    pub(crate) fn records_mut(&mut self) -> &mut [AnimalRecord] {
        &mut self.records
    }
}
