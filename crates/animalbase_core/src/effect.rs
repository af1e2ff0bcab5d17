#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the user whether `incumbent` should give up its slot.
    PromptSingleConflict { incumbent: String },
    /// Ask the user which of the two winners should give up its slot.
    PromptTwoConflict { first: String, second: String },
}
