//! Handler for a `hindsight <BUDGET>` invocation.

use tracing::info;

use super::command::{Cli, ColorChoice};
use crate::adapter::outbound::report::ReportFormat;
use crate::domain::{Budget, Selection};
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap::build_explorer;
use crate::infrastructure::config::settings::Config;

/// Validate the budget, resolve configuration, and run the pipeline.
///
/// The budget is checked before anything else is loaded.
pub async fn execute(cli: Cli) -> Result<Selection> {
    let budget = Budget::try_new(cli.budget).map_err(|e| Error::InvalidInput(e.to_string()))?;

    let config = resolve_config(&cli)?;
    config.init_logging();
    apply_color(cli.color);

    info!(
        budget = %budget,
        version = env!("CARGO_PKG_VERSION"),
        "hindsight starting"
    );

    let explorer = build_explorer(&config);
    let selection = explorer.explore(budget).await?;

    info!("hindsight finished");
    Ok(selection)
}

/// Load configuration and apply command-line overrides.
///
/// # Errors
///
/// Fails if the config cannot be loaded or the overridden values are invalid.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;

    if let Some(ref path) = cli.tickers {
        config.instruments.path = path.clone();
    }
    if let Some(workers) = cli.workers {
        config.scanner.workers = workers;
    }
    if let Some(days) = cli.window_days {
        config.scanner.window_days = days;
    }
    if cli.json {
        config.output.format = ReportFormat::Json;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }

    config.validate()?;
    Ok(config)
}

fn apply_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => {}
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}
