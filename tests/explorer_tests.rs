//! End-to-end pipeline tests over scripted ports.

use std::sync::Arc;
use std::time::Duration;

use hindsight::application::{Explorer, Scanner, ScannerConfig};
use hindsight::domain::InstrumentId;
use hindsight::error::Error;
use hindsight::testkit::domain::{budget, series};
use hindsight::testkit::provider::StaticPriceProvider;
use hindsight::testkit::report::RecordingReporter;
use hindsight::testkit::source::StaticInstrumentSource;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn explorer(
    names: &[&str],
    provider: StaticPriceProvider,
    workers: usize,
    reporter: RecordingReporter,
) -> Explorer {
    let scanner = Scanner::new(
        Arc::new(provider),
        ScannerConfig {
            workers,
            window_days: 30,
        },
    );
    Explorer::new(
        Arc::new(StaticInstrumentSource::new(names)),
        scanner,
        Arc::new(reporter),
    )
}

/// Three instruments whose profit ranking differs from their price ranking.
fn market() -> StaticPriceProvider {
    StaticPriceProvider::new()
        // buy 30, profit 15
        .with_series("HIGH", series(&[dec!(40), dec!(30), dec!(45)]))
        // buy 12, profit 4
        .with_series("MID", series(&[dec!(12), dec!(16), dec!(14)]))
        // buy 1.25, profit 0.5
        .with_series("LOW", series(&[dec!(1.25), dec!(1.75)]))
}

#[tokio::test]
async fn selection_is_ranked_by_profit() {
    let reporter = RecordingReporter::new();
    let explorer = explorer(&["LOW", "MID", "HIGH"], market(), 3, reporter.clone());

    let selection = explorer.explore(budget(dec!(100))).await.unwrap();

    let order: Vec<&str> = selection
        .opportunities()
        .iter()
        .map(|o| o.instrument().as_str())
        .collect();
    assert_eq!(order, vec!["HIGH", "MID", "LOW"]);
    assert_eq!(selection.total_profit(), dec!(19.5));
    assert_eq!(selection.spent(), dec!(43.2));
    assert_eq!(reporter.reports().len(), 1);
}

#[tokio::test]
async fn selection_stops_at_first_unaffordable_candidate() {
    // HIGH (30) fits, MID (12) does not fit in the remaining 5; LOW is never
    // considered even though it would fit.
    let explorer = explorer(&["LOW", "MID", "HIGH"], market(), 2, RecordingReporter::new());

    let selection = explorer.explore(budget(dec!(35))).await.unwrap();

    assert_eq!(selection.len(), 1);
    assert_eq!(selection.opportunities()[0].instrument().as_str(), "HIGH");
    assert_eq!(selection.total_profit(), dec!(15.0));
    assert_eq!(selection.remaining(), dec!(5.0));
}

#[tokio::test]
async fn budget_equal_to_buy_price_is_accepted() {
    let explorer = explorer(&["HIGH"], market(), 1, RecordingReporter::new());

    let selection = explorer.explore(budget(dec!(30))).await.unwrap();

    assert_eq!(selection.len(), 1);
    assert_eq!(selection.remaining(), Decimal::ZERO);
}

#[tokio::test]
async fn failing_instruments_do_not_change_the_result() {
    let provider = market()
        .with_unknown("DELISTED")
        .with_unavailable("FLAKY")
        .with_panic("BROKEN")
        .with_series("EMPTY", series(&[]));
    let explorer = explorer(
        &["DELISTED", "LOW", "FLAKY", "MID", "BROKEN", "EMPTY", "HIGH"],
        provider,
        4,
        RecordingReporter::new(),
    );

    let selection = explorer.explore(budget(dec!(100))).await.unwrap();

    assert_eq!(selection.len(), 3);
    assert_eq!(selection.total_profit(), dec!(19.5));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn many_instruments_with_latency_complete() {
    let names: Vec<String> = (0..40).map(|i| format!("T{i:02}")).collect();
    let mut provider = StaticPriceProvider::new().with_delay(Duration::from_millis(5));
    for (i, name) in names.iter().enumerate() {
        let base = Decimal::from(i as u64 + 1);
        provider = provider.with_series(name, series(&[base, base + dec!(1)]));
    }
    let tracker = provider.in_flight_tracker();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let explorer = explorer(&refs, provider, 8, RecordingReporter::new());

    let selection = explorer.explore(budget(dec!(1000))).await.unwrap();

    // Every profit is 1, so ties keep scan order and the sum of buys 1..=40 is 820.
    assert_eq!(selection.len(), 40);
    assert_eq!(selection.total_profit(), dec!(40.0));
    assert_eq!(tracker.calls(), 40);
    assert!(tracker.peak() <= 8);
}

#[tokio::test]
async fn blank_identifier_is_invalid_input() {
    let explorer = explorer(&[], market(), 1, RecordingReporter::new());

    let err = explorer
        .explore_instruments(vec![InstrumentId::from("  ")], budget(dec!(10)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
}
