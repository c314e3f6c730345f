//! # Client Errors
//!
//! Error types for the envelope client.

use crate::ports::SubmitHandle;
use envelope_protocol::EnvelopeError;
use thiserror::Error;

/// Envelope client error types.
///
/// Every ledger failure kind is surfaced distinctly; a confirmation
/// timeout means the outcome is unknown, not that the operation failed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The ledger rejected the operation.
    #[error("Operation rejected: {0}")]
    Rejected(#[from] EnvelopeError),

    /// No terminal outcome within the confirmation window.
    ///
    /// The operation may still complete; re-query by handle before
    /// retrying. A duplicate create would lock funds twice.
    #[error("Confirmation timeout after {timeout_secs}s; outcome unknown")]
    ConfirmationTimeout {
        /// Handle for re-querying the submission
        handle: SubmitHandle,
        /// Window that elapsed, in seconds
        timeout_secs: u64,
    },

    /// Secret hash input is not a 32-byte value.
    #[error("Malformed secret hash: expected 32 bytes, got {got}")]
    MalformedSecretHash {
        /// Decoded length of the provided value
        got: usize,
    },

    /// Amount string did not parse to positive base units.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Requested window has expiry at or before unlock.
    #[error("Invalid time window: unlock={unlock_time}, expiry={expiry_time}")]
    InvalidWindow {
        /// Requested unlock time
        unlock_time: u64,
        /// Requested expiry time
        expiry_time: u64,
    },

    /// Key custodian refused or failed to sign.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Transport-level failure; says nothing about the operation.
    #[error("Network error: {0}")]
    Network(String),

    /// Handle does not correspond to any known submission.
    #[error("Unknown submission handle")]
    UnknownHandle,

    /// Gateway response did not match the submitted operation.
    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),
}
