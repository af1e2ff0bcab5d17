use std::collections::HashSet;

use animal_logging::animal_warn;
use animalbase_core::{AnimalRecord, RecordError};
use serde::Deserialize;
use serde_json::Value;

use crate::{LoadError, LoadReport, RejectedEntry};

#[derive(Debug, Deserialize)]
struct RawEntry {
    fullname: String,
    age: u32,
}

/// Parses a JSON array of `{ "fullname", "age" }` entries.
///
/// Bad entries are collected in [`LoadReport::rejected`] and the rest still
/// load in document order. Only a document that is not a JSON array fails.
pub fn parse_document(bytes: &[u8]) -> Result<LoadReport, LoadError> {
    let Value::Array(entries) = serde_json::from_slice::<Value>(bytes)? else {
        return Err(LoadError::NotAnArray);
    };

    let mut report = LoadReport::default();
    let mut seen: HashSet<String> = HashSet::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match parse_entry(entry, &seen) {
            Ok(record) => {
                seen.insert(record.name.clone());
                report.records.push(record);
            }
            Err(error) => {
                let rejected = RejectedEntry { index, error };
                animal_warn!("Rejected {}", rejected);
                report.rejected.push(rejected);
            }
        }
    }
    Ok(report)
}

fn parse_entry(entry: Value, seen: &HashSet<String>) -> Result<AnimalRecord, RecordError> {
    let raw: RawEntry = serde_json::from_value(entry).map_err(|err| RecordError::InvalidEntry {
        reason: err.to_string(),
    })?;
    let record = AnimalRecord::from_fullname(&raw.fullname, raw.age)?;
    if seen.contains(&record.name) {
        return Err(RecordError::DuplicateName { name: record.name });
    }
    Ok(record)
}
