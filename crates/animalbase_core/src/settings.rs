use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::AnimalRecord;

/// Textual form of [`Filter::All`].
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Type(String),
}

impl Filter {
    /// Parses the adapter's filter value: `"all"` or a type name.
    pub fn parse(raw: &str) -> Self {
        if raw == FILTER_ALL {
            Filter::All
        } else {
            Filter::Type(raw.to_string())
        }
    }

    pub fn matches(&self, record: &AnimalRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Type(animal_type) => record.animal_type == *animal_type,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str(FILTER_ALL),
            Filter::Type(animal_type) => f.write_str(animal_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Description,
    Type,
    Age,
    Star,
    Winner,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Name,
        SortKey::Description,
        SortKey::Type,
        SortKey::Age,
        SortKey::Star,
        SortKey::Winner,
    ];

    /// Total order on `key`'s field. Strings compare lexicographically,
    /// age numerically and flags with `false < true`.
    pub fn compare(self, a: &AnimalRecord, b: &AnimalRecord) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Description => a.description.cmp(&b.description),
            SortKey::Type => a.animal_type.cmp(&b.animal_type),
            SortKey::Age => a.age.cmp(&b.age),
            SortKey::Star => a.is_starred.cmp(&b.is_starred),
            SortKey::Winner => a.is_winner.cmp(&b.is_winner),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Description => "desc",
            SortKey::Type => "type",
            SortKey::Age => "age",
            SortKey::Star => "star",
            SortKey::Winner => "winner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsParseError {
    #[error("unknown sort key {0:?}")]
    UnknownSortKey(String),
    #[error("unknown sort direction {0:?} (expected asc or desc)")]
    UnknownDirection(String),
}

impl FromStr for SortKey {
    type Err = SettingsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "desc" | "description" => Ok(SortKey::Description),
            "type" => Ok(SortKey::Type),
            "age" => Ok(SortKey::Age),
            "star" => Ok(SortKey::Star),
            "winner" => Ok(SortKey::Winner),
            other => Err(SettingsParseError::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = SettingsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(SettingsParseError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Current filter and sort configuration. Defaults to all records sorted by
/// name, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewSettings {
    pub filter: Filter,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

/// Next direction of each column header.
///
/// Every header remembers its own direction: a click sorts with the stored
/// direction and flips it for the next click on that header, whatever other
/// columns were clicked in between. All headers start ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderDirections {
    next: [SortDirection; SortKey::ALL.len()],
}

impl HeaderDirections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction the next click on `key` will request.
    pub fn peek(&self, key: SortKey) -> SortDirection {
        self.next[key as usize]
    }

    /// Clicks `key`'s header and returns the direction to sort with.
    pub fn click(&mut self, key: SortKey) -> SortDirection {
        let direction = self.peek(key);
        self.next[key as usize] = direction.flipped();
        direction
    }

    /// Records an explicit sort on `key`; its next click goes the other way.
    pub fn set(&mut self, key: SortKey, direction: SortDirection) {
        self.next[key as usize] = direction.flipped();
    }
}
