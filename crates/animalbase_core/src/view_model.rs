use crate::{AnimalRecord, ViewSettings};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

/// Conflict prompt currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptView {
    SingleConflict { incumbent: String },
    TwoConflict { first: String, second: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub load: LoadStatus,
    pub rows: Vec<AnimalRowView>,
    pub settings: ViewSettings,
    pub available_types: Vec<String>,
    pub total_records: usize,
    pub rejected_entries: usize,
    pub winner_count: usize,
    pub prompt: Option<PromptView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRowView {
    pub name: String,
    pub description: String,
    pub animal_type: String,
    pub age: u32,
    pub is_starred: bool,
    pub is_winner: bool,
}

impl From<AnimalRecord> for AnimalRowView {
    fn from(record: AnimalRecord) -> Self {
        Self {
            name: record.name,
            description: record.description,
            animal_type: record.animal_type,
            age: record.age,
            is_starred: record.is_starred,
            is_winner: record.is_winner,
        }
    }
}
