//! Monetary types for price and budget representation.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::error::DomainError;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Number of decimal places reported for prices and profits.
pub const REPORT_DECIMALS: u32 = 1;

/// Round a monetary value to the reported precision.
///
/// Ties round to the even neighbour. The result always carries exactly
/// [`REPORT_DECIMALS`] places so whole amounts print as `5.0`.
#[must_use]
pub fn round_report(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(REPORT_DECIMALS, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(REPORT_DECIMALS);
    rounded
}

/// Amount available to spend on buy prices. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Budget(Decimal);

impl Budget {
    /// A budget of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a budget, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeBudget`] if `amount` is below zero.
    pub fn try_new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::NegativeBudget { budget: amount });
        }
        Ok(Self(amount))
    }

    /// The budget amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
