//! In-memory [`InstrumentSource`] for testing.

use crate::domain::InstrumentId;
use crate::error::{Error, Result};
use crate::port::outbound::InstrumentSource;

/// Serves a fixed instrument list, or fails every load.
#[derive(Debug, Clone, Default)]
pub struct StaticInstrumentSource {
    instruments: Vec<InstrumentId>,
    unavailable: bool,
}

impl StaticInstrumentSource {
    pub fn new(names: &[&str]) -> Self {
        Self {
            instruments: names.iter().map(|name| InstrumentId::from(*name)).collect(),
            unavailable: false,
        }
    }

    /// A source whose backing list cannot be read.
    pub fn unavailable() -> Self {
        Self {
            instruments: Vec::new(),
            unavailable: true,
        }
    }
}

impl InstrumentSource for StaticInstrumentSource {
    fn load_instruments(&self) -> Result<Vec<InstrumentId>> {
        if self.unavailable {
            return Err(Error::SourceUnavailable("scripted outage".into()));
        }
        Ok(self.instruments.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
