use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `contents` to a temporary file that lives as long as the handle.
pub fn temp_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("hindsight-test-")
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Config pointing the provider at `base_url` with retries disabled.
pub fn offline_config(base_url: &str, workers: usize) -> NamedTempFile {
    temp_file(
        &format!(
            "[logging]\nlevel = \"warn\"\n\n\
             [provider]\nbase_url = \"{base_url}\"\n\n\
             [provider.http]\ntimeout_ms = 2000\nconnect_timeout_ms = 1000\nretry_max_attempts = 1\n\n\
             [scanner]\nworkers = {workers}\nwindow_days = 30\n"
        ),
        ".toml",
    )
}

/// Ticker file holding a JSON array of `symbols`.
pub fn tickers(symbols: &[&str]) -> NamedTempFile {
    let body = serde_json::to_string(symbols).expect("encode tickers");
    temp_file(&body, ".json")
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}
