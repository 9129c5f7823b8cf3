//! Ticker list stored as a JSON array of strings.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::InstrumentId;
use crate::error::{Error, Result};
use crate::port::outbound::InstrumentSource;

/// Reads instruments from a file such as `["AAPL", "MSFT"]`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a JSON ticker array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the content is not a JSON array of
    /// strings or contains a blank entry.
    pub fn parse(content: &str) -> Result<Vec<InstrumentId>> {
        let raw: Vec<String> = serde_json::from_str(content)
            .map_err(|e| Error::InvalidInput(format!("malformed ticker list: {e}")))?;
        raw.iter()
            .map(|ticker| {
                InstrumentId::try_new(ticker)
                    .map_err(|e| Error::InvalidInput(format!("malformed ticker list: {e}")))
            })
            .collect()
    }
}

impl InstrumentSource for JsonFileSource {
    fn load_instruments(&self) -> Result<Vec<InstrumentId>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            Error::SourceUnavailable(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let instruments = Self::parse(&content)?;
        debug!(
            path = %self.path.display(),
            count = instruments.len(),
            "Read ticker list"
        );
        Ok(instruments)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}
