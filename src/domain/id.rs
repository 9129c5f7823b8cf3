//! Domain identifier types with proper encapsulation.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Instrument identifier (ticker symbol) - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(String);

impl InstrumentId {
    /// Create a new `InstrumentId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create an `InstrumentId`, rejecting blank identifiers.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyInstrumentId`] if the identifier is blank.
    pub fn try_new(id: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyInstrumentId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the instrument ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InstrumentId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for InstrumentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Check that a list of instruments is usable for a scan.
///
/// # Errors
///
/// Returns [`DomainError::EmptyInstrumentId`] for a blank entry and
/// [`DomainError::DuplicateInstrument`] for the first repeated entry.
pub fn ensure_unique(instruments: &[InstrumentId]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(instruments.len());
    for id in instruments {
        if id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyInstrumentId);
        }
        if !seen.insert(id.as_str()) {
            return Err(DomainError::DuplicateInstrument {
                id: id.as_str().to_string(),
            });
        }
    }
    Ok(())
}
