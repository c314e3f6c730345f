//! # Domain Invariants
//!
//! Business rules for the envelope protocol. Pure checks, no state.

use super::errors::{EnvelopeError, Hash};

/// Invariant: locked amounts are positive.
pub fn invariant_positive_amount(amount: u128) -> Result<(), EnvelopeError> {
    if amount == 0 {
        return Err(EnvelopeError::InvalidAmount(amount));
    }
    Ok(())
}

/// Invariant: creation timing.
///
/// The unlock time must be strictly in the future relative to service
/// time (never client-supplied "now"), and expiry must come after unlock.
pub fn invariant_creation_timing(
    unlock_time: u64,
    expiry_time: u64,
    current_time: u64,
) -> Result<(), EnvelopeError> {
    if unlock_time <= current_time || expiry_time <= unlock_time {
        return Err(EnvelopeError::InvalidTiming {
            unlock_time,
            expiry_time,
            current: current_time,
        });
    }
    Ok(())
}

/// Invariant: claim window.
///
/// Claiming is permitted only in `[unlock_time, expiry_time)`.
pub fn invariant_claim_window(
    current_time: u64,
    unlock_time: u64,
    expiry_time: u64,
) -> Result<(), EnvelopeError> {
    if current_time < unlock_time {
        return Err(EnvelopeError::NotYetUnlocked {
            current: current_time,
            unlock_time,
        });
    }
    if current_time >= expiry_time {
        return Err(EnvelopeError::Expired {
            current: current_time,
            expiry_time,
        });
    }
    Ok(())
}

/// Invariant: reclaim eligibility.
///
/// Reclaiming is permitted at or after expiry.
pub fn invariant_reclaim_eligible(
    current_time: u64,
    expiry_time: u64,
) -> Result<(), EnvelopeError> {
    if current_time < expiry_time {
        return Err(EnvelopeError::NotYetExpired {
            current: current_time,
            expiry_time,
        });
    }
    Ok(())
}

/// Invariant: secret matches commitment.
///
/// SHA-256(secret) must equal the stored hash for a valid claim.
pub fn invariant_secret_matches(secret: &[u8], secret_hash: &Hash) -> bool {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(secret);
    let result = hasher.finalize();
    result.as_slice() == secret_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount() {
        assert!(invariant_positive_amount(1).is_ok());
        assert!(invariant_positive_amount(0).is_err());
    }

    #[test]
    fn test_creation_timing_valid() {
        // unlock=200 > now=100, expiry=300 > unlock=200
        assert!(invariant_creation_timing(200, 300, 100).is_ok());
    }

    #[test]
    fn test_creation_timing_unlock_in_past() {
        assert!(invariant_creation_timing(100, 300, 100).is_err());
        assert!(invariant_creation_timing(50, 300, 100).is_err());
    }

    #[test]
    fn test_creation_timing_expiry_before_unlock() {
        assert!(invariant_creation_timing(200, 200, 100).is_err());
        assert!(invariant_creation_timing(200, 150, 100).is_err());
    }

    #[test]
    fn test_claim_window_open() {
        assert!(invariant_claim_window(150, 100, 200).is_ok());
        assert!(invariant_claim_window(100, 100, 200).is_ok()); // At unlock
    }

    #[test]
    fn test_claim_window_too_early() {
        let result = invariant_claim_window(50, 100, 200);
        assert!(matches!(result, Err(EnvelopeError::NotYetUnlocked { .. })));
    }

    #[test]
    fn test_claim_window_too_late() {
        let result = invariant_claim_window(200, 100, 200);
        assert!(matches!(result, Err(EnvelopeError::Expired { .. })));
    }

    #[test]
    fn test_reclaim_eligible() {
        assert!(invariant_reclaim_eligible(200, 200).is_ok()); // At expiry
        assert!(invariant_reclaim_eligible(300, 200).is_ok());
    }

    #[test]
    fn test_reclaim_not_yet_expired() {
        let result = invariant_reclaim_eligible(199, 200);
        assert!(matches!(result, Err(EnvelopeError::NotYetExpired { .. })));
    }

    #[test]
    fn test_secret_matches() {
        use sha2::{Digest, Sha256};
        let secret = b"open sesame";
        let mut hasher = Sha256::new();
        hasher.update(secret);
        let hash: [u8; 32] = hasher.finalize().into();

        assert!(invariant_secret_matches(secret, &hash));
    }

    #[test]
    fn test_secret_not_matches() {
        let wrong_hash = [0xCDu8; 32];
        assert!(!invariant_secret_matches(b"open sesame", &wrong_hash));
    }
}
