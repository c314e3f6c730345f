//! # Ports Module
//!
//! Outbound boundaries consumed by the client: the key custodian and
//! the submission/confirmation gateway.

pub mod outbound;

pub use outbound::*;
