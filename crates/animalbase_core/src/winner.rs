//! Winner rules: at most one winner per type and at most [`MAX_WINNERS`] in total.

use animal_logging::animal_debug;

use crate::AnimalRecord;

/// Inclusive cap on simultaneous winners.
pub const MAX_WINNERS: usize = 2;

/// Result of asking to toggle a record's winner flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinnerOutcome {
    /// The target was a winner and has been cleared.
    Unset,
    /// The target has been made a winner.
    Promote,
    /// A winner of the same type holds the slot. Nothing was changed.
    SingleConflict { incumbent: String },
    /// The cap is reached. Incumbents are the first two winners in collection
    /// order, not display order. Nothing was changed.
    DoubleConflict { first: String, second: String },
}

impl WinnerOutcome {
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            WinnerOutcome::SingleConflict { .. } | WinnerOutcome::DoubleConflict { .. }
        )
    }
}

/// Applies a winner toggle on `records[target]`.
///
/// `Unset` and `Promote` mutate immediately; conflicts leave `records` untouched.
///
/// # Panics
///
/// Panics if `target` is out of bounds.
pub fn request_winner_toggle(records: &mut [AnimalRecord], target: usize) -> WinnerOutcome {
    if records[target].is_winner {
        records[target].is_winner = false;
        animal_debug!("winner unset: {}", records[target].name);
        return WinnerOutcome::Unset;
    }

    let outcome = {
        let candidate = &records[target];
        let winners: Vec<&AnimalRecord> = records.iter().filter(|r| r.is_winner).collect();
        let same_type = winners
            .iter()
            .find(|r| r.animal_type == candidate.animal_type);

        if let Some(incumbent) = same_type {
            WinnerOutcome::SingleConflict {
                incumbent: incumbent.name.clone(),
            }
        } else if winners.len() >= MAX_WINNERS {
            WinnerOutcome::DoubleConflict {
                first: winners[0].name.clone(),
                second: winners[1].name.clone(),
            }
        } else {
            WinnerOutcome::Promote
        }
    };

    if outcome == WinnerOutcome::Promote {
        records[target].is_winner = true;
    }
    animal_debug!("winner toggle {}: {:?}", records[target].name, outcome);
    outcome
}

/// True when `records` satisfy both winner limits.
pub fn winners_within_limits(records: &[AnimalRecord]) -> bool {
    let winners: Vec<&AnimalRecord> = records.iter().filter(|r| r.is_winner).collect();
    if winners.len() > MAX_WINNERS {
        return false;
    }
    winners.iter().enumerate().all(|(i, a)| {
        winners[i + 1..]
            .iter()
            .all(|b| a.animal_type != b.animal_type)
    })
}
