//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors when a domain
//! invariant would be violated.
//!
//! # Examples
//!
//! ```
//! use hindsight::domain::error::DomainError;
//! use hindsight::domain::money::Budget;
//! use rust_decimal_macros::dec;
//!
//! let result = Budget::try_new(dec!(-1));
//! assert!(matches!(result, Err(DomainError::NegativeBudget { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Prices are observations of a traded value and cannot be negative.
    #[error("price must be non-negative, got {price} at position {index}")]
    NegativePrice {
        /// The offending price.
        price: rust_decimal::Decimal,
        /// Position of the price in the series.
        index: usize,
    },

    /// A budget is an amount available to spend.
    #[error("budget must be non-negative, got {budget}")]
    NegativeBudget {
        /// The invalid budget that was provided.
        budget: rust_decimal::Decimal,
    },

    /// Instrument identifiers cannot be blank.
    #[error("instrument identifier cannot be empty")]
    EmptyInstrumentId,

    /// Each instrument may appear at most once in a scan.
    #[error("duplicate instrument identifier: {id}")]
    DuplicateInstrument {
        /// The repeated identifier.
        id: String,
    },
}
