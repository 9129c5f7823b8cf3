//! Scripted [`PriceProvider`] for testing.
//!
//! Each instrument is scripted with a fixed outcome. Instruments that were
//! never scripted answer [`FetchError::UnknownInstrument`], like a real
//! provider with no data for the symbol.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{InstrumentId, PriceSeries};
use crate::error::FetchError;
use crate::port::outbound::PriceProvider;

#[derive(Debug, Clone)]
enum Script {
    Series(PriceSeries),
    Unknown,
    Unavailable,
    Panic,
}

/// Shared counters of concurrent and total fetch calls.
#[derive(Debug, Clone, Default)]
pub struct InFlightTracker {
    current: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    calls: Arc<AtomicU32>,
}

impl InFlightTracker {
    /// Highest number of fetches observed running at the same time.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    /// Total number of fetch calls made.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.current.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A provider answering from a fixed per-instrument script.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceProvider {
    scripts: HashMap<InstrumentId, Script>,
    delay: Option<Duration>,
    tracker: InFlightTracker,
}

impl StaticPriceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, id: &str, series: PriceSeries) -> Self {
        self.scripts.insert(id.into(), Script::Series(series));
        self
    }

    pub fn with_unknown(mut self, id: &str) -> Self {
        self.scripts.insert(id.into(), Script::Unknown);
        self
    }

    pub fn with_unavailable(mut self, id: &str) -> Self {
        self.scripts.insert(id.into(), Script::Unavailable);
        self
    }

    /// Make the fetch for `id` panic.
    pub fn with_panic(mut self, id: &str) -> Self {
        self.scripts.insert(id.into(), Script::Panic);
        self
    }

    /// Sleep this long inside every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get a handle on the call counters, shared with clones of this provider.
    pub fn in_flight_tracker(&self) -> InFlightTracker {
        self.tracker.clone()
    }
}

#[async_trait]
impl PriceProvider for StaticPriceProvider {
    async fn fetch_price_series(
        &self,
        instrument: &InstrumentId,
        _window_days: u32,
    ) -> Result<PriceSeries, FetchError> {
        self.tracker.enter();
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.tracker.leave();

        match self.scripts.get(instrument) {
            Some(Script::Series(series)) => Ok(series.clone()),
            Some(Script::Unavailable) => Err(FetchError::ProviderUnavailable {
                instrument: instrument.clone(),
                reason: "scripted outage".into(),
            }),
            Some(Script::Panic) => panic!("scripted panic for {instrument}"),
            Some(Script::Unknown) | None => Err(FetchError::UnknownInstrument {
                instrument: instrument.clone(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
