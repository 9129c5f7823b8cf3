//! The best single buy-then-sell opportunity of one instrument.

use std::fmt;

use serde::Serialize;

use super::id::InstrumentId;
use super::money::{round_report, Price};

/// A missed buy opportunity.
///
/// Prices are stored rounded to the reported precision. Instances are
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opportunity {
    instrument: InstrumentId,
    buy_price: Price,
    profit: Price,
}

impl Opportunity {
    /// Create an opportunity, rounding both amounts to the reported precision.
    #[must_use]
    pub fn new(instrument: InstrumentId, buy_price: Price, profit: Price) -> Self {
        Self {
            instrument,
            buy_price: round_report(buy_price),
            profit: round_report(profit),
        }
    }

    /// Get the instrument ID.
    #[must_use]
    pub fn instrument(&self) -> &InstrumentId {
        &self.instrument
    }

    /// Get the buy price.
    #[must_use]
    pub fn buy_price(&self) -> Price {
        self.buy_price
    }

    /// Get the profit of selling at the best later price.
    #[must_use]
    pub fn profit(&self) -> Price {
        self.profit
    }
}

impl fmt::Display for Opportunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} purchased at ${} for a profit of ${}",
            self.instrument, self.buy_price, self.profit
        )
    }
}
