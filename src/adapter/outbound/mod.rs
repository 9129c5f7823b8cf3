//! Outbound adapters (driven side).

pub mod instrument;
pub mod report;
pub mod yahoo;
