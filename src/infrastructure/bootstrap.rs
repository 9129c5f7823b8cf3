//! Composition root: wires adapters into the scan pipeline.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::instrument::JsonFileSource;
use crate::adapter::outbound::report::ConsoleReporter;
use crate::adapter::outbound::yahoo::YahooClient;
use crate::application::{Explorer, Scanner};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::{InstrumentSource, PriceProvider, Reporter};

/// Build the explorer for a validated configuration.
#[must_use]
pub fn build_explorer(config: &Config) -> Explorer {
    let source: Arc<dyn InstrumentSource> =
        Arc::new(JsonFileSource::new(config.instruments.path.clone()));
    let provider: Arc<dyn PriceProvider> = Arc::new(YahooClient::from_config(&config.provider));
    let reporter: Arc<dyn Reporter> = Arc::new(ConsoleReporter::stdout(
        config.output.format,
        config.scanner.window_days,
    ));

    info!(
        instruments = %config.instruments.path.display(),
        provider = provider.name(),
        workers = config.scanner.workers,
        window_days = config.scanner.window_days,
        "Pipeline configured"
    );

    Explorer::new(
        source,
        Scanner::new(provider, config.scanner.clone()),
        reporter,
    )
}
