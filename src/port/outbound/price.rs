//! Market data port for historical price series.

use async_trait::async_trait;

use crate::domain::{InstrumentId, PriceSeries};
use crate::error::FetchError;

/// Provider of historical prices for one instrument at a time.
///
/// Implementations own their timeout and retry policy; the scanner calls
/// each instrument once and treats any error as final for that instrument.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch the chronological price observations for the trailing
    /// `window_days` days.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ProviderUnavailable`] on network or service
    /// failure and [`FetchError::UnknownInstrument`] when the provider has no
    /// data for `instrument`.
    async fn fetch_price_series(
        &self,
        instrument: &InstrumentId,
        window_days: u32,
    ) -> Result<PriceSeries, FetchError>;

    /// Get the provider name for logging/debugging.
    fn name(&self) -> &'static str;
}
