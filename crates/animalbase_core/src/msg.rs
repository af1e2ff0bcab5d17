use crate::{AnimalRecord, SingleChoice, SortDirection, SortKey, TwoChoice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Source document loaded; replaces the record store.
    DataLoaded {
        records: Vec<AnimalRecord>,
        rejected: usize,
    },
    /// Source document could not be loaded.
    LoadFailed(String),
    /// User picked a filter button (`"all"` or a type).
    FilterChanged(String),
    /// User clicked a column header.
    SortChanged {
        key: SortKey,
        direction: SortDirection,
    },
    /// User clicked the star cell of a row.
    StarToggled(String),
    /// User clicked the winner cell of a row.
    WinnerToggled(String),
    /// Answer to the one-winner-per-type prompt.
    SingleConflictResolved(SingleChoice),
    /// Answer to the two-winner prompt.
    TwoConflictResolved(TwoChoice),
}
