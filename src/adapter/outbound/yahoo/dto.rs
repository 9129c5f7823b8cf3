//! Yahoo chart API payloads.
//!
//! Only the fields needed to rebuild the open/close sequence are modelled.
//! Quotes are `null` on days without trading data.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartResponse {
    /// Flatten daily quotes into `open, close, open, close, ...` order.
    ///
    /// Returns `None` when the payload carries no result at all. Missing or
    /// non-finite quotes are skipped.
    pub fn into_prices(self) -> Option<Vec<Decimal>> {
        let result = self.chart.result?.into_iter().next()?;
        let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

        let days = quote.open.len().max(quote.close.len());
        let mut prices = Vec::with_capacity(days * 2);
        for day in 0..days {
            for side in [&quote.open, &quote.close] {
                let price = side.get(day).copied().flatten();
                if let Some(price) = price.and_then(Decimal::from_f64) {
                    prices.push(price);
                }
            }
        }
        Some(prices)
    }
}
