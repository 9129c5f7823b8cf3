//! Result renderers.

pub mod console;

pub use console::{ConsoleReporter, ReportFormat};
