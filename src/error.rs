use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::InstrumentId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Per-instrument price retrieval errors.
///
/// These never abort a scan; the scanner records them against the
/// instrument and moves on.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("price provider unavailable for {instrument}: {reason}")]
    ProviderUnavailable {
        instrument: InstrumentId,
        reason: String,
    },

    #[error("no price data for instrument {instrument}")]
    UnknownInstrument { instrument: InstrumentId },

    #[error("invalid price data for {instrument}: {source}")]
    InvalidSeries {
        instrument: InstrumentId,
        #[source]
        source: DomainError,
    },
}

impl FetchError {
    /// The instrument the failure belongs to.
    #[must_use]
    pub fn instrument(&self) -> &InstrumentId {
        match self {
            Self::ProviderUnavailable { instrument, .. }
            | Self::UnknownInstrument { instrument }
            | Self::InvalidSeries { instrument, .. } => instrument,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("instrument source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Invalid input uses the conventional usage-error code 2.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::Domain(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
