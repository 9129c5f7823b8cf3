//! [`Reporter`] that records what it was asked to render.

use std::sync::{Arc, Mutex};

use crate::domain::{Budget, Selection};
use crate::error::Result;
use crate::port::outbound::Reporter;

/// Records every `(budget, selection)` pair. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    reports: Arc<Mutex<Vec<(Budget, Selection)>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything reported so far, oldest first.
    pub fn reports(&self) -> Vec<(Budget, Selection)> {
        match self.reports.lock() {
            Ok(reports) => reports.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, budget: Budget, selection: &Selection) -> Result<()> {
        match self.reports.lock() {
            Ok(mut reports) => reports.push((budget, selection.clone())),
            Err(poisoned) => poisoned.into_inner().push((budget, selection.clone())),
        }
        Ok(())
    }
}
