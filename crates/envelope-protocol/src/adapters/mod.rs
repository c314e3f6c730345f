//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for the protocol service.

mod clock;

pub use clock::{ManualClock, SystemClock};
