//! Interactive resolution of winner conflicts.
//!
//! At most one flow is active. While it is, the prompt it opened is the only
//! way to change winner status; see [`ConflictFlow::is_idle`].

use thiserror::Error;

use crate::AnimalRecord;

/// Answer to the "only one winner of each type" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleChoice {
    Dismiss,
    Replace,
}

/// Answer to the "only two winners" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoChoice {
    Dismiss,
    ReplaceFirst,
    ReplaceSecond,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Dismissed,
    Replaced { demoted: String, promoted: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("a conflict prompt is already open")]
    AlreadyActive,
    #[error("no conflict prompt is open")]
    NotAwaiting,
    #[error("answer does not match the open prompt")]
    ChoiceMismatch,
    #[error("record {0:?} is not in the store")]
    UnknownRecord(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConflictFlow {
    #[default]
    Idle,
    AwaitingSingleChoice {
        incumbent: String,
        target: String,
    },
    AwaitingTwoChoice {
        first: String,
        second: String,
        target: String,
    },
}

impl ConflictFlow {
    pub fn is_idle(&self) -> bool {
        matches!(self, ConflictFlow::Idle)
    }

    pub fn begin_single(
        &mut self,
        incumbent: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<(), FlowError> {
        self.ensure_idle()?;
        *self = ConflictFlow::AwaitingSingleChoice {
            incumbent: incumbent.into(),
            target: target.into(),
        };
        Ok(())
    }

    pub fn begin_two(
        &mut self,
        first: impl Into<String>,
        second: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<(), FlowError> {
        self.ensure_idle()?;
        *self = ConflictFlow::AwaitingTwoChoice {
            first: first.into(),
            second: second.into(),
            target: target.into(),
        };
        Ok(())
    }

    /// Applies the answer to an open single-conflict prompt.
    ///
    /// A mismatched answer leaves the prompt open. Any other outcome,
    /// including [`FlowError::UnknownRecord`], returns the flow to `Idle`.
    pub fn resolve_single(
        &mut self,
        choice: SingleChoice,
        records: &mut [AnimalRecord],
    ) -> Result<Resolution, FlowError> {
        let (incumbent, target) = match self {
            ConflictFlow::AwaitingSingleChoice { incumbent, target } => {
                (incumbent.clone(), target.clone())
            }
            ConflictFlow::AwaitingTwoChoice { .. } => return Err(FlowError::ChoiceMismatch),
            ConflictFlow::Idle => return Err(FlowError::NotAwaiting),
        };
        *self = ConflictFlow::Idle;
        match choice {
            SingleChoice::Dismiss => Ok(Resolution::Dismissed),
            SingleChoice::Replace => replace(records, incumbent, target),
        }
    }

    /// Applies the answer to an open two-winner prompt. Same state rules as
    /// [`ConflictFlow::resolve_single`].
    pub fn resolve_two(
        &mut self,
        choice: TwoChoice,
        records: &mut [AnimalRecord],
    ) -> Result<Resolution, FlowError> {
        let (first, second, target) = match self {
            ConflictFlow::AwaitingTwoChoice {
                first,
                second,
                target,
            } => (first.clone(), second.clone(), target.clone()),
            ConflictFlow::AwaitingSingleChoice { .. } => return Err(FlowError::ChoiceMismatch),
            ConflictFlow::Idle => return Err(FlowError::NotAwaiting),
        };
        *self = ConflictFlow::Idle;
        match choice {
            TwoChoice::Dismiss => Ok(Resolution::Dismissed),
            TwoChoice::ReplaceFirst => replace(records, first, target),
            TwoChoice::ReplaceSecond => replace(records, second, target),
        }
    }

    fn ensure_idle(&self) -> Result<(), FlowError> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(FlowError::AlreadyActive)
        }
    }
}

fn replace(
    records: &mut [AnimalRecord],
    demoted: String,
    promoted: String,
) -> Result<Resolution, FlowError> {
    let demoted_idx = position(records, &demoted)?;
    let promoted_idx = position(records, &promoted)?;
    records[demoted_idx].is_winner = false;
    records[promoted_idx].is_winner = true;
    Ok(Resolution::Replaced { demoted, promoted })
}

fn position(records: &[AnimalRecord], name: &str) -> Result<usize, FlowError> {
    records
        .iter()
        .position(|r| r.name == name)
        .ok_or_else(|| FlowError::UnknownRecord(name.to_string()))
}
