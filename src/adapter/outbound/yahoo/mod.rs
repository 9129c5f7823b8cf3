//! Yahoo Finance market data adapter.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::YahooClient;
pub use settings::YahooConfig;
