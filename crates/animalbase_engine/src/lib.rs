//! Animalbase engine: loads the source document once and parses it into records.
mod engine;
mod load;
mod parse;
mod types;

pub use engine::LoadHandle;
pub use load::{LoadSettings, Loader, SourceLoader};
pub use parse::parse_document;
pub use types::{DataSource, LoadError, LoadReport, RejectedEntry};
