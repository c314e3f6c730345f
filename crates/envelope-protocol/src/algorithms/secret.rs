//! # Secret Hashing and Verification
//!
//! Cryptographic operations for envelope commitments.

use crate::domain::{
    invariant_claim_window, invariant_reclaim_eligible, invariant_secret_matches, Address,
    EnvelopeError, Hash,
};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate a cryptographically secure random 32-byte secret.
pub fn generate_random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut secret);
    secret
}

/// Hash a secret with SHA-256, producing the envelope commitment.
///
/// Total over all byte strings; the protocol never interprets the
/// plaintext.
pub fn hash_secret(secret: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(secret);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Verify that a secret matches a commitment.
///
/// Recomputes the digest and compares fixed-length outputs.
pub fn verify_secret(secret: &[u8], secret_hash: &Hash) -> bool {
    let computed_hash = hash_secret(secret);
    computed_hash == *secret_hash
}

/// Validate a claim attempt against an envelope's fields.
///
/// Checks run in the protocol's fixed order: authorization, timing,
/// then secret. Authorization failures never disclose whether the
/// secret would have matched.
pub fn verify_claim(
    secret: &[u8],
    secret_hash: &Hash,
    claimant: &Address,
    beneficiary: &Address,
    current_time: u64,
    unlock_time: u64,
    expiry_time: u64,
) -> Result<(), EnvelopeError> {
    if claimant != beneficiary {
        return Err(EnvelopeError::Unauthorized);
    }

    invariant_claim_window(current_time, unlock_time, expiry_time)?;

    if !invariant_secret_matches(secret, secret_hash) {
        return Err(EnvelopeError::InvalidSecret);
    }

    Ok(())
}

/// Validate a reclaim attempt against an envelope's fields.
pub fn verify_reclaim(
    caller: &Address,
    owner: &Address,
    current_time: u64,
    expiry_time: u64,
) -> Result<(), EnvelopeError> {
    if caller != owner {
        return Err(EnvelopeError::Unauthorized);
    }

    invariant_reclaim_eligible(current_time, expiry_time)
}
