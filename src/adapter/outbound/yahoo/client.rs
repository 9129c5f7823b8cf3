//! Yahoo Finance chart API client.
//!
//! Fetches daily bars for the trailing window and flattens them into the
//! open/close sequence the profit scan works on.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client as HttpClient, StatusCode, Url};
use tokio::time::sleep;
use tracing::{debug, warn};

use super::dto::ChartResponse;
use super::settings::YahooConfig;
use crate::domain::{InstrumentId, PriceSeries};
use crate::error::FetchError;
use crate::port::outbound::PriceProvider;

const SECONDS_PER_DAY: i64 = 86_400;

/// HTTP client for the Yahoo Finance chart API.
pub struct YahooClient {
    http: HttpClient,
    base_url: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl YahooClient {
    /// Create a client with default HTTP settings.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The chart API base URL
    ///   (e.g., `https://query1.finance.yahoo.com`)
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            http: HttpClient::new(),
            base_url,
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &YahooConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .user_agent(concat!("hindsight/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.base_url.clone(),
            retry_max_attempts: config.http.retry_max_attempts,
            retry_backoff_ms: config.http.retry_backoff_ms,
        }
    }

    /// Build the chart URL for `instrument` covering `window_days` up to `now`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ProviderUnavailable`] if the base URL is invalid.
    pub fn chart_url(
        &self,
        instrument: &InstrumentId,
        window_days: u32,
        now: DateTime<Utc>,
    ) -> Result<Url, FetchError> {
        let invalid = |reason: String| FetchError::ProviderUnavailable {
            instrument: instrument.clone(),
            reason,
        };

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| invalid(format!("invalid base url {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| invalid(format!("base url {} cannot have a path", self.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", instrument.as_str()]);

        let period2 = now.timestamp();
        let period1 = period2 - i64::from(window_days) * SECONDS_PER_DAY;
        url.query_pairs_mut()
            .append_pair("period1", &period1.to_string())
            .append_pair("period2", &period2.to_string())
            .append_pair("interval", "1d");

        Ok(url)
    }

    async fn get_chart(
        &self,
        instrument: &InstrumentId,
        url: Url,
    ) -> Result<ChartResponse, FetchError> {
        let unavailable = |reason: String| FetchError::ProviderUnavailable {
            instrument: instrument.clone(),
            reason,
        };

        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(unavailable(err.to_string()));
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            if response.status() == StatusCode::NOT_FOUND {
                return Err(FetchError::UnknownInstrument {
                    instrument: instrument.clone(),
                });
            }

            let response = response
                .error_for_status()
                .map_err(|err| unavailable(err.to_string()))?;

            match response.json::<ChartResponse>().await {
                Ok(parsed) => return Ok(parsed),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(unavailable(err.to_string()));
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

/// Turn a decoded chart payload into a price series.
///
/// # Errors
///
/// Returns [`FetchError::UnknownInstrument`] when the payload carries an
/// error or no result, and [`FetchError::InvalidSeries`] for negative prices.
pub fn series_from_chart(
    instrument: &InstrumentId,
    response: ChartResponse,
) -> Result<PriceSeries, FetchError> {
    if let Some(error) = &response.chart.error {
        debug!(
            instrument = %instrument,
            code = %error.code,
            description = error.description.as_deref().unwrap_or(""),
            "Chart API returned an error"
        );
        return Err(FetchError::UnknownInstrument {
            instrument: instrument.clone(),
        });
    }

    let prices = response
        .into_prices()
        .ok_or_else(|| FetchError::UnknownInstrument {
            instrument: instrument.clone(),
        })?;

    PriceSeries::try_new(prices).map_err(|source| FetchError::InvalidSeries {
        instrument: instrument.clone(),
        source,
    })
}

#[async_trait]
impl PriceProvider for YahooClient {
    async fn fetch_price_series(
        &self,
        instrument: &InstrumentId,
        window_days: u32,
    ) -> Result<PriceSeries, FetchError> {
        let url = self.chart_url(instrument, window_days, Utc::now())?;
        debug!(instrument = %instrument, url = %url, "Fetching chart");

        let response = self.get_chart(instrument, url).await?;
        series_from_chart(instrument, response)
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}
