//! # Domain Errors
//!
//! Error types for the envelope protocol.

use thiserror::Error;

/// Digest type (32-byte SHA-256).
pub type Hash = [u8; 32];

/// Account address type (20-byte).
pub type Address = [u8; 20];

/// Envelope identifier, assigned monotonically by the store.
pub type EnvelopeId = u64;

/// Envelope protocol error types.
#[derive(Debug, Error, Clone)]
pub enum EnvelopeError {
    /// Envelope does not exist.
    #[error("Envelope not found: {0}")]
    NotFound(EnvelopeId),

    /// Envelope was already claimed or reclaimed.
    #[error("Envelope {0} already finalized")]
    AlreadyFinalized(EnvelopeId),

    /// Caller is not authorized for this operation.
    #[error("Unauthorized caller")]
    Unauthorized,

    /// Claim attempted before the unlock time.
    #[error("Not yet unlocked: current={current}, unlock={unlock_time}")]
    NotYetUnlocked {
        /// Service time at validation
        current: u64,
        /// Envelope unlock time
        unlock_time: u64,
    },

    /// Claim attempted at or after the expiry time.
    #[error("Claim window closed: current={current}, expiry={expiry_time}")]
    Expired {
        /// Service time at validation
        current: u64,
        /// Envelope expiry time
        expiry_time: u64,
    },

    /// Reclaim attempted before the expiry time.
    #[error("Not yet expired: current={current}, expiry={expiry_time}")]
    NotYetExpired {
        /// Service time at validation
        current: u64,
        /// Envelope expiry time
        expiry_time: u64,
    },

    /// Provided secret does not hash to the stored commitment.
    #[error("Invalid secret")]
    InvalidSecret,

    /// Amount must be positive.
    #[error("Invalid amount: {0}")]
    InvalidAmount(u128),

    /// Unlock/expiry times violate ordering rules.
    #[error("Invalid timing: unlock={unlock_time}, expiry={expiry_time}, current={current}")]
    InvalidTiming {
        /// Requested unlock time
        unlock_time: u64,
        /// Requested expiry time
        expiry_time: u64,
        /// Service time at validation
        current: u64,
    },

    /// Owner balance cannot cover amount plus fee.
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        /// Total required (amount plus protocol fee)
        required: u128,
        /// Spendable balance available
        available: u128,
    },

    /// Identifier counter exhausted.
    #[error("Envelope capacity exceeded")]
    CapacityExceeded,

    /// Illegal status transition.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status
        from: String,
        /// Attempted status
        to: String,
    },
}
