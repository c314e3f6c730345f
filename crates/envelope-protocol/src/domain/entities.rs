//! # Domain Entities
//!
//! Core entities for the envelope protocol.

use super::errors::{Address, EnvelopeError, EnvelopeId, Hash};
use super::value_objects::EnvelopeStatus;
use serde::{Deserialize, Serialize};

/// A hash-locked envelope: a token amount paired with a secret-hash
/// commitment and a claim window.
///
/// The sole persistent entity of the protocol. Envelopes are never
/// deleted; finalized records remain for audit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    /// Unique identifier, immutable once assigned.
    pub id: EnvelopeId,
    /// Creator, exclusively authorized to reclaim after expiry.
    pub owner: Address,
    /// Party authorized to claim with the secret.
    pub beneficiary: Address,
    /// Locked amount in base units. Invariant: positive.
    pub amount: u128,
    /// SHA-256 commitment to the secret phrase, never the plaintext.
    pub secret_hash: Hash,
    /// Unix timestamp before which claiming is forbidden.
    pub unlock_time: u64,
    /// Unix timestamp at which claiming closes and reclaiming opens.
    /// Invariant: `expiry_time > unlock_time`.
    pub expiry_time: u64,
    /// Current lifecycle state.
    pub status: EnvelopeStatus,
}

/// Parameters for creating an envelope.
///
/// `id` and `status` are assigned by the store at insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvelopeParams {
    /// Creator address.
    pub owner: Address,
    /// Beneficiary address.
    pub beneficiary: Address,
    /// Amount to lock, in base units.
    pub amount: u128,
    /// SHA-256 commitment to the secret.
    pub secret_hash: Hash,
    /// Claim window opens.
    pub unlock_time: u64,
    /// Claim window closes, reclaim opens.
    pub expiry_time: u64,
}

impl Envelope {
    /// Create a new `Locked` envelope with an assigned id.
    pub fn new(id: EnvelopeId, params: EnvelopeParams) -> Self {
        Self {
            id,
            owner: params.owner,
            beneficiary: params.beneficiary,
            amount: params.amount,
            secret_hash: params.secret_hash,
            unlock_time: params.unlock_time,
            expiry_time: params.expiry_time,
            status: EnvelopeStatus::Locked,
        }
    }

    /// Check if the claim window has closed.
    pub fn is_expired(&self, current_time: u64) -> bool {
        current_time >= self.expiry_time
    }

    /// Check if the claim window is open: `[unlock_time, expiry_time)`.
    pub fn claim_window_open(&self, current_time: u64) -> bool {
        current_time >= self.unlock_time && !self.is_expired(current_time)
    }

    /// Check if claiming is allowed at `current_time`.
    pub fn can_claim(&self, current_time: u64) -> bool {
        self.status == EnvelopeStatus::Locked && self.claim_window_open(current_time)
    }

    /// Check if reclaiming is allowed at `current_time`.
    pub fn can_reclaim(&self, current_time: u64) -> bool {
        self.status == EnvelopeStatus::Locked && self.is_expired(current_time)
    }

    /// Transition to a new status.
    pub fn transition_to(&mut self, new_status: EnvelopeStatus) -> Result<(), EnvelopeError> {
        if !self.status.can_transition_to(new_status) {
            return Err(EnvelopeError::InvalidTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", new_status),
            });
        }
        self.status = new_status;
        Ok(())
    }
}
