use std::time::Duration;

use animal_logging::{animal_debug, animal_info};
use futures_util::StreamExt;

use crate::parse::parse_document;
use crate::{DataSource, LoadError, LoadReport};

#[derive(Debug, Clone)]
pub struct LoadSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Loader: Send + Sync {
    async fn load(&self, source: &DataSource) -> Result<LoadReport, LoadError>;
}

/// Reads the source document from disk or over HTTP, once, and parses it.
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    settings: LoadSettings,
}

impl SourceLoader {
    pub fn new(settings: LoadSettings) -> Self {
        Self { settings }
    }

    async fn read_file(&self, path: &std::path::Path) -> Result<Vec<u8>, LoadError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.len() as u64 > self.settings.max_bytes {
            return Err(LoadError::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(bytes.len() as u64),
            });
        }
        Ok(bytes)
    }

    async fn fetch(&self, url: &reqwest::Url) -> Result<Vec<u8>, LoadError> {
        let client = reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| LoadError::Network(err.to_string()))?;

        let response = client.get(url.clone()).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus(status.as_u16()));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(LoadError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            append_capped(&mut bytes, &chunk, self.settings.max_bytes)?;
        }
        animal_debug!("Fetched {} byte(s) from {}", bytes.len(), url);
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl Loader for SourceLoader {
    async fn load(&self, source: &DataSource) -> Result<LoadReport, LoadError> {
        animal_info!("Loading animals from {}", source);
        let bytes = match source {
            DataSource::File(path) => self.read_file(path).await?,
            DataSource::Url(url) => self.fetch(url).await?,
        };
        let report = parse_document(&bytes)?;
        animal_info!(
            "Parsed {} record(s), rejected {}",
            report.records.len(),
            report.rejected.len()
        );
        Ok(report)
    }
}

/// Appends `chunk` unless the body would grow past `max_bytes`. Covers bodies
/// sent without a `Content-Length` header.
fn append_capped(bytes: &mut Vec<u8>, chunk: &[u8], max_bytes: u64) -> Result<(), LoadError> {
    let next_len = bytes.len() as u64 + chunk.len() as u64;
    if next_len > max_bytes {
        return Err(LoadError::TooLarge {
            max_bytes,
            actual: Some(next_len),
        });
    }
    bytes.extend_from_slice(chunk);
    Ok(())
}

fn map_reqwest_error(err: reqwest::Error) -> LoadError {
    if err.is_timeout() {
        return LoadError::Timeout;
    }
    LoadError::Network(err.to_string())
}
