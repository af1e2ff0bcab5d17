use thiserror::Error;

/// One row of the animal table.
///
/// `name` is the identity: intents refer to records by name, so the store
/// never holds two records with the same one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRecord {
    pub name: String,
    pub description: String,
    pub animal_type: String,
    pub age: u32,
    pub is_starred: bool,
    pub is_winner: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("fullname {fullname:?} has {tokens} token(s), expected at least 4")]
    MalformedFullname { fullname: String, tokens: usize },
    #[error("invalid entry: {reason}")]
    InvalidEntry { reason: String },
    #[error("duplicate name {name:?}")]
    DuplicateName { name: String },
}

impl AnimalRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        animal_type: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            animal_type: animal_type.into(),
            age,
            is_starred: false,
            is_winner: false,
        }
    }

    /// Builds a record from the composite `fullname` field, e.g.
    /// `"Mandu the amazing cat"`: token 0 is the name, token 2 the
    /// description and token 3 the type. Token 1 is filler.
    pub fn from_fullname(fullname: &str, age: u32) -> Result<Self, RecordError> {
        let tokens: Vec<&str> = fullname.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(RecordError::MalformedFullname {
                fullname: fullname.to_string(),
                tokens: tokens.len(),
            });
        }
        Ok(Self::new(tokens[0], tokens[2], tokens[3], age))
    }
}
