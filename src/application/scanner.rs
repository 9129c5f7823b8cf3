//! Concurrent opportunity scanner.
//!
//! Fans out fetch + compute over every instrument with a bounded number of
//! units in flight, and joins them all before returning. Each unit runs on
//! its own task; a unit that fails (provider error, empty series, panic) is
//! recorded against its instrument and never aborts the others.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::stream::{self, StreamExt};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::profit::best_opportunity;
use crate::domain::{InstrumentId, Opportunity};
use crate::error::FetchError;
use crate::port::outbound::PriceProvider;

/// Scanner settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// Maximum number of instruments fetched concurrently.
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Length of the trailing price window in days.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

fn default_workers() -> usize {
    num_cpus::get().max(1)
}

const fn default_window_days() -> u32 {
    30
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            window_days: default_window_days(),
        }
    }
}

/// Why an instrument produced no opportunity.
#[derive(Error, Debug)]
pub enum FailureReason {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("price series is empty")]
    EmptySeries,

    #[error("scan task aborted: {0}")]
    Aborted(String),
}

/// An instrument that was dropped from the scan.
#[derive(Debug)]
pub struct ScanFailure {
    pub instrument: InstrumentId,
    pub reason: FailureReason,
}

/// Everything a scan produced: one entry per requested instrument, either
/// an opportunity or a failure.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub opportunities: Vec<Opportunity>,
    pub failures: Vec<ScanFailure>,
    pub elapsed: Duration,
}

impl ScanReport {
    /// Number of instruments the scan covered.
    #[must_use]
    pub fn scanned(&self) -> usize {
        self.opportunities.len() + self.failures.len()
    }

    /// Number of instruments that produced no opportunity.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn into_opportunities(self) -> Vec<Opportunity> {
        self.opportunities
    }
}

/// Bounded-parallel scanner over a [`PriceProvider`].
pub struct Scanner {
    provider: Arc<dyn PriceProvider>,
    config: ScannerConfig,
}

impl Scanner {
    #[must_use]
    pub fn new(provider: Arc<dyn PriceProvider>, config: ScannerConfig) -> Self {
        Self { provider, config }
    }

    #[must_use]
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Scan every instrument and wait for all of them to finish.
    ///
    /// Completion order is unspecified, so `opportunities` has no particular
    /// order.
    pub async fn scan(&self, instruments: Vec<InstrumentId>) -> ScanReport {
        let started = Instant::now();
        let workers = self.config.workers.max(1);
        let window_days = self.config.window_days;

        info!(
            instruments = instruments.len(),
            workers,
            window_days,
            provider = self.provider.name(),
            "Scanning instruments"
        );

        let outcomes: Vec<(InstrumentId, Result<Opportunity, FailureReason>)> =
            stream::iter(instruments)
                .map(|instrument| {
                    let provider = Arc::clone(&self.provider);
                    async move {
                        let unit_id = instrument.clone();
                        let handle = tokio::spawn(async move {
                            scan_unit(provider.as_ref(), &unit_id, window_days).await
                        });
                        let outcome = match handle.await {
                            Ok(outcome) => outcome,
                            Err(err) => Err(FailureReason::Aborted(err.to_string())),
                        };
                        (instrument, outcome)
                    }
                })
                .buffer_unordered(workers)
                .collect()
                .await;

        let mut report = ScanReport::default();
        for (instrument, outcome) in outcomes {
            match outcome {
                Ok(opportunity) => report.opportunities.push(opportunity),
                Err(reason) => {
                    warn!(instrument = %instrument, error = %reason, "Skipping instrument");
                    report.failures.push(ScanFailure { instrument, reason });
                }
            }
        }
        report.elapsed = started.elapsed();

        report
    }
}

async fn scan_unit(
    provider: &dyn PriceProvider,
    instrument: &InstrumentId,
    window_days: u32,
) -> Result<Opportunity, FailureReason> {
    let series = provider
        .fetch_price_series(instrument, window_days)
        .await?;
    debug!(
        instrument = %instrument,
        observations = series.len(),
        "Fetched price series"
    );
    best_opportunity(instrument.clone(), &series).ok_or(FailureReason::EmptySeries)
}
