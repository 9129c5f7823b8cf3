//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`provider`] — Scripted [`PriceProvider`](crate::port::outbound::PriceProvider)
//!   with per-instrument outcomes, optional latency, and in-flight tracking.
//! - [`source`] — In-memory [`InstrumentSource`](crate::port::outbound::InstrumentSource).
//! - [`report`] — [`Reporter`](crate::port::outbound::Reporter) that records
//!   every selection it receives.
//! - [`domain`] — Builders for domain primitives: ids, series, opportunities.

pub mod domain;
pub mod provider;
pub mod report;
pub mod source;
