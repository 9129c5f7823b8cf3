//! Instrument list port.

use crate::domain::InstrumentId;
use crate::error::Result;

/// Source of the instruments to scan.
pub trait InstrumentSource: Send + Sync {
    /// Load instrument identifiers in their stored order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`](crate::error::Error::SourceUnavailable)
    /// when the backing list cannot be read, and
    /// [`Error::InvalidInput`](crate::error::Error::InvalidInput) when it is
    /// malformed.
    fn load_instruments(&self) -> Result<Vec<InstrumentId>>;

    /// Get the source name for logging/debugging.
    fn name(&self) -> &'static str;
}
