//! Plain-text and JSON rendering of a selection.

use std::io::{self, Write};
use std::sync::Mutex;

use owo_colors::{OwoColorize, Stream};
use serde::{Deserialize, Serialize};

use crate::domain::{Budget, Opportunity, Price, Selection};
use crate::error::Result;
use crate::port::outbound::Reporter;

/// Output format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable sentences.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    budget: Budget,
    window_days: u32,
    opportunities: &'a [Opportunity],
    spent: Price,
    total_profit: Price,
}

/// Writes the report to a byte sink, stdout by default.
pub struct ConsoleReporter {
    out: Mutex<Box<dyn Write + Send>>,
    format: ReportFormat,
    window_days: u32,
    color: bool,
}

impl ConsoleReporter {
    /// Report to stdout, styling the headline when stdout supports color.
    #[must_use]
    pub fn stdout(format: ReportFormat, window_days: u32) -> Self {
        Self {
            out: Mutex::new(Box::new(io::stdout())),
            format,
            window_days,
            color: true,
        }
    }

    /// Report to an arbitrary sink without styling.
    #[must_use]
    pub fn with_writer(
        writer: Box<dyn Write + Send>,
        format: ReportFormat,
        window_days: u32,
    ) -> Self {
        Self {
            out: Mutex::new(writer),
            format,
            window_days,
            color: false,
        }
    }

    fn headline(&self, text: &str) -> String {
        if self.color {
            text.if_supports_color(Stream::Stdout, |t| t.bold())
                .to_string()
        } else {
            text.to_string()
        }
    }

    fn render_text(&self, budget: Budget, selection: &Selection) -> String {
        let days = self.window_days;
        if selection.is_empty() {
            return format!(
                "{}\n",
                self.headline(&format!(
                    "You did not miss any buy opportunities in the last {days} days with a budget of ${budget}."
                ))
            );
        }

        let mut text = format!(
            "{}\n",
            self.headline(&format!(
                "Here are the buy opportunities you missed in the last {days} days with a budget of ${budget}:"
            ))
        );
        for opportunity in selection.opportunities() {
            text.push_str(&format!("\t-{opportunity}.\n"));
        }
        text.push_str(&format!(
            "For a total profit of ${}.\n",
            selection.total_profit()
        ));
        text
    }

    fn render_json(&self, budget: Budget, selection: &Selection) -> Result<String> {
        let report = JsonReport {
            budget,
            window_days: self.window_days,
            opportunities: selection.opportunities(),
            spent: selection.spent(),
            total_profit: selection.total_profit(),
        };
        Ok(format!("{}\n", serde_json::to_string(&report)?))
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, budget: Budget, selection: &Selection) -> Result<()> {
        let rendered = match self.format {
            ReportFormat::Text => self.render_text(budget, selection),
            ReportFormat::Json => self.render_json(budget, selection)?,
        };

        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
