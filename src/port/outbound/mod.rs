//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod instrument;
pub mod price;
pub mod report;

pub use instrument::InstrumentSource;
pub use price::PriceProvider;
pub use report::Reporter;
