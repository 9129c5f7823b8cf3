//! Output port for scan results.

use crate::domain::{Budget, Selection};
use crate::error::Result;

/// Renders a finished selection.
pub trait Reporter: Send + Sync {
    /// Render `selection` for the given budget.
    fn report(&self, budget: Budget, selection: &Selection) -> Result<()>;
}
