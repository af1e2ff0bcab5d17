use std::fmt;
use std::io;
use std::path::PathBuf;

use animalbase_core::{AnimalRecord, RecordError};
use thiserror::Error;

/// Where the source document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(reqwest::Url),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = reqwest::Url::parse(raw)
                .map_err(|err| LoadError::InvalidUrl(format!("{raw}: {err}")))?;
            Ok(DataSource::Url(url))
        } else {
            Ok(DataSource::File(PathBuf::from(raw)))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// An entry that was left out of the store, with its position in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub index: usize,
    pub error: RecordError,
}

impl fmt::Display for RejectedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry #{}: {}", self.index, self.error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub records: Vec<AnimalRecord>,
    pub rejected: Vec<RejectedEntry>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid url {0}")]
    InvalidUrl(String),
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("source document is not a json array")]
    NotAnArray,
    #[error("loader stopped before reporting: {0}")]
    Runtime(String),
}
