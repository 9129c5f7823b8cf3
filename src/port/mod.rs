//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the scan pipeline and the outside world.
//! Adapters implement them to read instrument lists, fetch price history,
//! and render results.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌──────────┐           ┌─────────────┐              ┌───────────┐
//! │Instrument│           │    Price    │              │  Report   │
//! │ Adapter  │           │   Adapter   │              │  Adapter  │
//! └──────────┘           └─────────────┘              └───────────┘
//! ```

pub mod outbound;
