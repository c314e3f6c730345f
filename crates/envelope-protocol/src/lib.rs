//! # envelope-protocol
//!
//! Hash-time-locked envelope protocol core.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Custody of native tokens behind a secret-phrase commitment and a time
//! window:
//! - Lock: debit an owner and store a `Locked` envelope
//! - Claim: beneficiary reveals the secret inside `[unlock, expiry)`
//! - Reclaim: owner recovers unclaimed funds at or after expiry
//!
//! The service executes as a single sequential ledger: each operation
//! runs to completion under one write guard, so no reader ever observes
//! a partial transition.
//!
//! ## Module Structure
//!
//! ```text
//! envelope-protocol/
//! ├── domain/          # Envelope, store, account ledger, errors
//! ├── algorithms/      # Secret hashing and verification pipelines
//! ├── ports/           # EnvelopeApi, Clock
//! ├── adapters/        # System and manual clocks
//! └── service.rs       # EnvelopeService (lock/claim/reclaim engines)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{ManualClock, SystemClock};
pub use algorithms::{
    generate_random_secret, hash_secret, verify_claim, verify_reclaim, verify_secret,
};
pub use domain::{
    invariant_claim_window, invariant_creation_timing, invariant_positive_amount,
    invariant_reclaim_eligible, invariant_secret_matches, AccountLedger, Address, Envelope,
    EnvelopeError, EnvelopeId, EnvelopeParams, EnvelopeStatus, EnvelopeStore, Hash,
    ProtocolConfig, SecretPhrase, FIRST_ENVELOPE_ID,
};
pub use ports::{Clock, EnvelopeApi};
pub use service::EnvelopeService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
