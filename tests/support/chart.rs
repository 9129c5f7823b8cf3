//! Chart API responses mounted on a [`MockServer`].

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// Daily chart request for `symbol`, as the client sends it.
pub fn chart_request(symbol: &str) -> MockBuilder {
    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{symbol}")))
        .and(query_param("interval", "1d"))
}

/// Chart payload with one quote row per day.
pub fn chart_body(opens: &[Option<f64>], closes: &[Option<f64>]) -> Value {
    let days = opens.len().max(closes.len()) as i64;
    let timestamps: Vec<i64> = (0..days).map(|day| 1_717_200_000 + day * 86_400).collect();
    json!({
        "chart": {
            "result": [{
                "meta": { "currency": "USD" },
                "timestamp": timestamps,
                "indicators": { "quote": [{ "open": opens, "close": closes }] }
            }],
            "error": null
        }
    })
}

/// Payload the API returns for a delisted or unknown symbol.
pub fn chart_error_body() -> Value {
    json!({
        "chart": {
            "result": null,
            "error": {
                "code": "Not Found",
                "description": "No data found, symbol may be delisted"
            }
        }
    })
}

pub async fn mount_quotes(
    server: &MockServer,
    symbol: &str,
    opens: &[Option<f64>],
    closes: &[Option<f64>],
) {
    chart_request(symbol)
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(opens, closes)))
        .mount(server)
        .await;
}

/// Fail the test if the server sees any request at all.
pub async fn forbid_requests(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}
