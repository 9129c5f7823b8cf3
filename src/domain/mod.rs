//! Pure domain logic: price series, opportunities, and budget selection.

pub mod error;
pub mod id;
pub mod money;
pub mod opportunity;
pub mod profit;
pub mod selection;
pub mod series;

// Core domain types
pub use id::InstrumentId;
pub use money::{Budget, Price};
pub use opportunity::Opportunity;
pub use selection::Selection;
pub use series::PriceSeries;
