//! Missed-opportunity pipeline: load → scan → select → report.

use std::sync::Arc;

use tracing::info;

use super::scanner::Scanner;
use crate::domain::id::ensure_unique;
use crate::domain::selection::select;
use crate::domain::{Budget, InstrumentId, Selection};
use crate::error::{Error, Result};
use crate::port::outbound::{InstrumentSource, Reporter};

/// Sequences the scan pipeline over its ports.
pub struct Explorer {
    source: Arc<dyn InstrumentSource>,
    scanner: Scanner,
    reporter: Arc<dyn Reporter>,
}

impl Explorer {
    #[must_use]
    pub fn new(
        source: Arc<dyn InstrumentSource>,
        scanner: Scanner,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            source,
            scanner,
            reporter,
        }
    }

    /// Run the pipeline over the instruments of the configured source.
    ///
    /// # Errors
    ///
    /// Fails if the source cannot be read, the instrument list is malformed,
    /// or the reporter fails. Per-instrument fetch failures are not errors.
    pub async fn explore(&self, budget: Budget) -> Result<Selection> {
        let instruments = self.source.load_instruments()?;
        info!(
            source = self.source.name(),
            count = instruments.len(),
            "Loaded instruments"
        );
        self.explore_instruments(instruments, budget).await
    }

    /// Run the pipeline over an explicit instrument list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for blank or duplicate identifiers,
    /// before any fetch is made. Reporter failures propagate.
    pub async fn explore_instruments(
        &self,
        instruments: Vec<InstrumentId>,
        budget: Budget,
    ) -> Result<Selection> {
        ensure_unique(&instruments).map_err(|e| Error::InvalidInput(e.to_string()))?;

        let report = self.scanner.scan(instruments).await;
        info!(
            scanned = report.scanned(),
            failed = report.failed(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Scan complete"
        );

        let selection = select(report.into_opportunities(), budget);
        info!(
            budget = %budget,
            selected = selection.len(),
            total_profit = %selection.total_profit(),
            "Selection built"
        );

        self.reporter.report(budget, &selection)?;
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::scanner::ScannerConfig;
    use crate::testkit::domain::{budget, ids, series};
    use crate::testkit::provider::StaticPriceProvider;
    use crate::testkit::report::RecordingReporter;
    use crate::testkit::source::StaticInstrumentSource;
    use rust_decimal_macros::dec;

    fn explorer(
        source: StaticInstrumentSource,
        provider: StaticPriceProvider,
        reporter: RecordingReporter,
    ) -> Explorer {
        let scanner = Scanner::new(
            Arc::new(provider),
            ScannerConfig {
                workers: 2,
                window_days: 30,
            },
        );
        Explorer::new(Arc::new(source), scanner, Arc::new(reporter))
    }

    fn provider() -> StaticPriceProvider {
        // A: buy 100, profit 10. B: buy 50, profit 8.
        StaticPriceProvider::new()
            .with_series("A", series(&[dec!(105), dec!(100), dec!(110)]))
            .with_series("B", series(&[dec!(50), dec!(58), dec!(55)]))
    }

    #[tokio::test]
    async fn explore_runs_full_pipeline_and_reports() {
        let reporter = RecordingReporter::new();
        let explorer = explorer(
            StaticInstrumentSource::new(&["A", "B"]),
            provider(),
            reporter.clone(),
        );

        let selection = explorer.explore(budget(dec!(120))).await.unwrap();

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.opportunities()[0].instrument().as_str(), "A");
        assert_eq!(selection.total_profit(), dec!(10.0));

        let reports = reporter.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, budget(dec!(120)));
        assert_eq!(reports[0].1, selection);
    }

    #[tokio::test]
    async fn explore_tolerates_failed_instruments() {
        let reporter = RecordingReporter::new();
        let explorer = explorer(
            StaticInstrumentSource::new(&["A", "MISSING", "B"]),
            provider(),
            reporter,
        );

        let selection = explorer.explore(budget(dec!(1000))).await.unwrap();

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.total_profit(), dec!(18.0));
    }

    #[tokio::test]
    async fn unavailable_source_is_fatal() {
        let reporter = RecordingReporter::new();
        let explorer = explorer(
            StaticInstrumentSource::unavailable(),
            provider(),
            reporter.clone(),
        );

        let err = explorer.explore(budget(dec!(10))).await.unwrap_err();

        assert!(matches!(err, Error::SourceUnavailable(_)));
        assert!(reporter.reports().is_empty());
    }

    #[tokio::test]
    async fn duplicate_instruments_are_rejected_before_scanning() {
        let provider = provider();
        let tracker = provider.in_flight_tracker();
        let explorer = explorer(
            StaticInstrumentSource::default(),
            provider,
            RecordingReporter::new(),
        );

        let err = explorer
            .explore_instruments(ids(&["A", "B", "A"]), budget(dec!(10)))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(tracker.calls(), 0);
    }

    #[tokio::test]
    async fn zero_budget_reports_empty_selection() {
        let reporter = RecordingReporter::new();
        let explorer = explorer(
            StaticInstrumentSource::new(&["A", "B"]),
            provider(),
            reporter.clone(),
        );

        let selection = explorer.explore(budget(dec!(0))).await.unwrap();

        assert!(selection.is_empty());
        assert_eq!(reporter.reports().len(), 1);
    }
}
