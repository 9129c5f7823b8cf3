//! Hindsight - find the buy opportunities you missed.
//!
//! For each instrument in a ticker list, fetches the trailing price window,
//! finds the single buy-then-sell pair with the largest profit, and greedily
//! fills a budget with the most profitable of those opportunities.
//!
//! # Architecture
//!
//! - **`domain`** - Prices, budgets, the profit calculation and budget selection
//! - **`port`** - Outbound traits for instrument lists, prices and reports
//! - **`application`** - Bounded-concurrency scanner and the explore pipeline
//! - **`adapter`** - Yahoo chart client, JSON ticker file, console reporter, CLI
//! - **`infrastructure`** - Configuration, logging and wiring
//!
//! # Example
//!
//! ```
//! use hindsight::domain::profit::best_opportunity;
//! use hindsight::domain::{InstrumentId, PriceSeries};
//! use rust_decimal_macros::dec;
//!
//! let series = PriceSeries::try_new(vec![dec!(10), dec!(7), dec!(12)]).unwrap();
//! let opportunity = best_opportunity(InstrumentId::from("AAPL"), &series).unwrap();
//! assert_eq!(opportunity.profit(), dec!(5.0));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
