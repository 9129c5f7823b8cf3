//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the scan pipeline.

pub mod explorer;
pub mod scanner;

pub use explorer::Explorer;
pub use scanner::{FailureReason, ScanFailure, ScanReport, Scanner, ScannerConfig};
