use crate::{AnimalRecord, ViewSettings};

/// Filtered and sorted copy of `records` for display.
///
/// The sort is stable in both directions: records comparing equal under the
/// active key keep their collection order.
pub fn project(records: &[AnimalRecord], settings: &ViewSettings) -> Vec<AnimalRecord> {
    let mut rows: Vec<AnimalRecord> = records
        .iter()
        .filter(|record| settings.filter.matches(record))
        .cloned()
        .collect();
    let key = settings.sort_key;
    let direction = settings.sort_direction;
    rows.sort_by(|a, b| direction.apply(key.compare(a, b)));
    rows
}

/// Distinct types in first-appearance order.
pub fn available_types(records: &[AnimalRecord]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for record in records {
        if !types.iter().any(|known| *known == record.animal_type) {
            types.push(record.animal_type.clone());
        }
    }
    types
}
