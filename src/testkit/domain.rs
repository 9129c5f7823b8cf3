//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`InstrumentId`], [`PriceSeries`],
//! and [`Opportunity`] so tests focus on assertions rather than construction
//! boilerplate.

use rust_decimal::Decimal;

use crate::domain::{Budget, InstrumentId, Opportunity, PriceSeries};

/// Build instrument ids from string slices, preserving order.
pub fn ids(names: &[&str]) -> Vec<InstrumentId> {
    names.iter().map(|name| InstrumentId::from(*name)).collect()
}

/// Build a price series from prices that are known to be valid.
///
/// # Panics
///
/// Panics if any price is negative.
pub fn series(prices: &[Decimal]) -> PriceSeries {
    PriceSeries::try_new(prices.to_vec()).expect("test prices are non-negative")
}

/// Build an opportunity directly.
pub fn opportunity(id: &str, buy_price: Decimal, profit: Decimal) -> Opportunity {
    Opportunity::new(InstrumentId::from(id), buy_price, profit)
}

/// Build a budget that is known to be valid.
///
/// # Panics
///
/// Panics if `amount` is negative.
pub fn budget(amount: Decimal) -> Budget {
    Budget::try_new(amount).expect("test budget is non-negative")
}
