//! Chart client tests against a mock chart API.

mod support;

use std::time::Duration;

use hindsight::adapter::outbound::yahoo::settings::YahooHttpConfig;
use hindsight::adapter::outbound::yahoo::{YahooClient, YahooConfig};
use hindsight::domain::InstrumentId;
use hindsight::error::FetchError;
use hindsight::port::outbound::PriceProvider;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wiremock::matchers::query_param_is_missing;
use wiremock::{MockServer, ResponseTemplate};

use support::chart::{chart_body, chart_error_body, chart_request, mount_quotes};

fn client_with(base_url: String, timeout_ms: u64, retry_max_attempts: u32) -> YahooClient {
    YahooClient::from_config(&YahooConfig {
        base_url,
        http: YahooHttpConfig {
            timeout_ms,
            connect_timeout_ms: 500,
            retry_max_attempts,
            retry_backoff_ms: 0,
        },
    })
}

fn client(server: &MockServer) -> YahooClient {
    client_with(server.uri(), 2_000, 2)
}

async fn fetch(client: &YahooClient, symbol: &str) -> Result<Vec<Decimal>, FetchError> {
    client
        .fetch_price_series(&InstrumentId::from(symbol), 30)
        .await
        .map(|series| series.prices().to_vec())
}

#[tokio::test]
async fn fetches_interleaved_open_close_series() {
    let server = MockServer::start().await;
    mount_quotes(
        &server,
        "AAPL",
        &[Some(189.5), None, Some(191.0)],
        &[Some(190.25), None, Some(188.75)],
    )
    .await;

    let prices = fetch(&client(&server), "AAPL").await.unwrap();

    assert_eq!(
        prices,
        vec![dec!(189.5), dec!(190.25), dec!(191.0), dec!(188.75)]
    );
}

#[tokio::test]
async fn request_carries_the_trailing_window() {
    let server = MockServer::start().await;
    let body = chart_body(&[Some(1.0)], &[Some(2.0)]);
    chart_request("MSFT")
        .and(query_param_is_missing("range"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    fetch(&client(&server), "MSFT").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = requests[0].url.query_pairs().into_owned().collect();
    let period = |key: &str| -> i64 {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.parse().unwrap())
            .unwrap()
    };
    assert_eq!(period("period2") - period("period1"), 30 * 86_400);
}

#[tokio::test]
async fn not_found_is_unknown_instrument() {
    let server = MockServer::start().await;
    chart_request("NOPE")
        .respond_with(ResponseTemplate::new(404).set_body_json(chart_error_body()))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetch(&client(&server), "NOPE").await.unwrap_err();

    assert!(matches!(err, FetchError::UnknownInstrument { .. }));
    assert_eq!(err.instrument().as_str(), "NOPE");
}

#[tokio::test]
async fn error_payload_is_unknown_instrument() {
    let server = MockServer::start().await;
    chart_request("DEAD")
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_error_body()))
        .mount(&server)
        .await;

    let err = fetch(&client(&server), "DEAD").await.unwrap_err();

    assert!(matches!(err, FetchError::UnknownInstrument { .. }));
}

#[tokio::test]
async fn server_error_is_unavailable_without_retry() {
    let server = MockServer::start().await;
    chart_request("DOWN")
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetch(&client_with(server.uri(), 2_000, 3), "DOWN")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::ProviderUnavailable { .. }));
}

#[tokio::test]
async fn timeout_is_retried_until_attempts_run_out() {
    let server = MockServer::start().await;
    chart_request("SLOW")
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chart_body(&[Some(1.0)], &[Some(2.0)]))
                .set_delay(Duration::from_millis(500)),
        )
        .expect(3)
        .mount(&server)
        .await;

    let err = fetch(&client_with(server.uri(), 100, 3), "SLOW")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::ProviderUnavailable { .. }));
}

#[tokio::test]
async fn undecodable_body_is_provider_unavailable() {
    let server = MockServer::start().await;
    chart_request("JUNK")
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetch(&client(&server), "JUNK").await.unwrap_err();

    assert!(matches!(err, FetchError::ProviderUnavailable { .. }));
}

#[tokio::test]
async fn negative_quote_is_invalid_series() {
    let server = MockServer::start().await;
    mount_quotes(&server, "ODD", &[Some(5.0)], &[Some(-1.0)]).await;

    let err = fetch(&client(&server), "ODD").await.unwrap_err();

    assert!(matches!(err, FetchError::InvalidSeries { .. }));
}

#[tokio::test]
async fn refused_connection_is_provider_unavailable() {
    // Bind then drop so the port is very likely closed.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let err = fetch(&client_with(format!("http://{addr}"), 1_000, 2), "AAPL")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::ProviderUnavailable { .. }));
}
