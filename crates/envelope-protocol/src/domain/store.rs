//! # Envelope Store
//!
//! Keyed collection of envelope records with a monotonic id counter.
//!
//! The store is a plain single-threaded structure; the owning service
//! provides the single mutual-exclusion boundary that makes status
//! transitions and fund movement atomic as observed by readers.

use super::entities::{Envelope, EnvelopeParams};
use super::errors::{EnvelopeError, EnvelopeId};
use super::value_objects::EnvelopeStatus;
use std::collections::HashMap;

/// Identifier assigned to the first envelope. Ids are dense and never
/// reused.
pub const FIRST_ENVELOPE_ID: EnvelopeId = 0;

/// Durable keyed map from id to envelope.
///
/// Records are never deleted; finalized envelopes remain for audit.
#[derive(Debug, Default)]
pub struct EnvelopeStore {
    envelopes: HashMap<EnvelopeId, Envelope>,
    next_id: EnvelopeId,
}

impl EnvelopeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            envelopes: HashMap::new(),
            next_id: FIRST_ENVELOPE_ID,
        }
    }

    /// Allocate the next id and store a new `Locked` envelope.
    ///
    /// Fails with `CapacityExceeded` only if the id counter would
    /// overflow its 64-bit domain; nothing is stored in that case.
    pub fn insert(&mut self, params: EnvelopeParams) -> Result<EnvelopeId, EnvelopeError> {
        let id = self.next_id;
        let next = id.checked_add(1).ok_or(EnvelopeError::CapacityExceeded)?;

        self.envelopes.insert(id, Envelope::new(id, params));
        self.next_id = next;
        Ok(id)
    }

    /// Get an envelope by id.
    pub fn get(&self, id: EnvelopeId) -> Option<&Envelope> {
        self.envelopes.get(&id)
    }

    /// Transition an envelope's status.
    ///
    /// The caller must have validated that the transition is legal;
    /// this only fails with `NotFound` for an absent id (or
    /// `InvalidTransition` if the caller's validation was skipped).
    pub fn update_status(
        &mut self,
        id: EnvelopeId,
        new_status: EnvelopeStatus,
    ) -> Result<(), EnvelopeError> {
        let envelope = self
            .envelopes
            .get_mut(&id)
            .ok_or(EnvelopeError::NotFound(id))?;
        envelope.transition_to(new_status)
    }

    /// Next id to be assigned; doubles as the count of envelopes ever
    /// created.
    pub fn next_id(&self) -> EnvelopeId {
        self.next_id
    }

    /// Number of stored envelopes.
    pub fn len(&self) -> usize {
        self.envelopes.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.envelopes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> EnvelopeParams {
        EnvelopeParams {
            owner: [1u8; 20],
            beneficiary: [2u8; 20],
            amount: 100,
            secret_hash: [3u8; 32],
            unlock_time: 1000,
            expiry_time: 2000,
        }
    }

    #[test]
    fn test_insert_assigns_dense_ids_from_zero() {
        let mut store = EnvelopeStore::new();
        assert_eq!(store.insert(test_params()).unwrap(), FIRST_ENVELOPE_ID);
        assert_eq!(store.insert(test_params()).unwrap(), 1);
        assert_eq!(store.insert(test_params()).unwrap(), 2);
        assert_eq!(store.next_id(), 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_returns_stored_fields() {
        let mut store = EnvelopeStore::new();
        let id = store.insert(test_params()).unwrap();

        let envelope = store.get(id).unwrap();
        assert_eq!(envelope.amount, 100);
        assert_eq!(envelope.status, EnvelopeStatus::Locked);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = EnvelopeStore::new();
        assert!(store.get(42).is_none());
    }

    #[test]
    fn test_update_status() {
        let mut store = EnvelopeStore::new();
        let id = store.insert(test_params()).unwrap();

        store.update_status(id, EnvelopeStatus::Claimed).unwrap();
        assert_eq!(store.get(id).unwrap().status, EnvelopeStatus::Claimed);
    }

    #[test]
    fn test_update_status_missing_fails() {
        let mut store = EnvelopeStore::new();
        let result = store.update_status(42, EnvelopeStatus::Claimed);
        assert!(matches!(result, Err(EnvelopeError::NotFound(42))));
    }

    #[test]
    fn test_insert_at_counter_limit_fails_without_storing() {
        let mut store = EnvelopeStore::new();
        store.next_id = u64::MAX;

        let result = store.insert(test_params());
        assert!(matches!(result, Err(EnvelopeError::CapacityExceeded)));
        assert!(store.is_empty());
        assert_eq!(store.next_id(), u64::MAX);
    }
}
