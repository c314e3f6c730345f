//! # envelope-client
//!
//! Asynchronous client for the envelope protocol.
//!
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! The requesting side of the protocol: build create/claim/reclaim
//! requests, hand them to a key custodian for signing, submit through a
//! gateway, and poll for the asynchronous outcome under a bounded
//! timeout.
//!
//! The client never treats its own state as authoritative: every
//! submission is a request to an external, sequentially-consistent
//! ledger, and success is only reported after the gateway confirms it.
//! An operation whose outcome is unknown when the confirmation window
//! closes is surfaced as unknown, never as failed, and can be re-queried
//! by its handle before any retry.
//!
//! ## Module Structure
//!
//! ```text
//! envelope-client/
//! ├── requests.rs      # OperationRequest, unit conversion, validation
//! ├── ports/           # RequestSigner, LedgerGateway
//! ├── adapters/        # In-process gateway and dev signer
//! ├── errors.rs        # ClientError
//! └── service.rs       # EnvelopeClient (submit-and-confirm loop)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod errors;
pub mod ports;
pub mod requests;
pub mod service;

// Re-exports
pub use adapters::{DevSigner, InProcessGateway};
pub use errors::ClientError;
pub use ports::{LedgerGateway, RequestSigner, SubmissionStatus, SubmitHandle};
pub use requests::{
    parse_secret_hash, tokens_to_base_units, OperationRequest, SignedRequest,
    BASE_UNITS_PER_TOKEN, TOKEN_DECIMALS,
};
pub use service::{ClientConfig, EnvelopeClient};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
