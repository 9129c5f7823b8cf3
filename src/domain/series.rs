//! Chronological price observations for a single instrument.

use super::error::DomainError;
use super::money::Price;

/// Ordered sequence of non-negative prices for one instrument.
///
/// Order is significant: a sale can only use a price at or after the
/// position of its buy price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceSeries(Vec<Price>);

impl PriceSeries {
    /// Create a series, rejecting negative prices.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativePrice`] for the first negative entry.
    pub fn try_new(prices: Vec<Price>) -> Result<Self, DomainError> {
        if let Some((index, price)) = prices
            .iter()
            .enumerate()
            .find(|(_, p)| p.is_sign_negative() && !p.is_zero())
        {
            return Err(DomainError::NegativePrice {
                price: *price,
                index,
            });
        }
        Ok(Self(prices))
    }

    /// An empty series.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prices in chronological order.
    #[must_use]
    pub fn prices(&self) -> &[Price] {
        &self.0
    }
}

impl TryFrom<Vec<Price>> for PriceSeries {
    type Error = DomainError;

    fn try_from(prices: Vec<Price>) -> Result<Self, Self::Error> {
        Self::try_new(prices)
    }
}
