//! # Inbound Ports
//!
//! API trait defining what the envelope protocol service can do.

use crate::domain::{Address, Envelope, EnvelopeError, EnvelopeId, EnvelopeParams};
use async_trait::async_trait;

/// Envelope protocol API - inbound port.
///
/// Every mutation executes to completion with exclusive access to the
/// store and balances before the next begins; callers observe only
/// pre- or post-transition state.
#[async_trait]
pub trait EnvelopeApi: Send + Sync {
    /// Lock funds behind a secret commitment and a time window.
    ///
    /// Debits `amount` plus the protocol fee from the owner and stores
    /// a `Locked` envelope, atomically. Returns the assigned id.
    async fn create_envelope(&self, params: EnvelopeParams) -> Result<EnvelopeId, EnvelopeError>;

    /// Claim an envelope by revealing the secret.
    ///
    /// Valid only for the beneficiary, inside `[unlock, expiry)`, with
    /// the correct pre-image. Releases custody to the beneficiary.
    async fn claim(
        &self,
        envelope_id: EnvelopeId,
        secret: &[u8],
        claimant: Address,
    ) -> Result<(), EnvelopeError>;

    /// Reclaim an expired envelope.
    ///
    /// Valid only for the owner at or after expiry. Returns custody to
    /// the owner.
    async fn reclaim(&self, envelope_id: EnvelopeId, caller: Address)
        -> Result<(), EnvelopeError>;

    /// Get an envelope snapshot by id.
    async fn get_envelope(&self, envelope_id: EnvelopeId) -> Result<Envelope, EnvelopeError>;

    /// Next id to be assigned (count of envelopes ever created).
    async fn next_id(&self) -> EnvelopeId;

    /// Spendable balance of an account.
    async fn balance_of(&self, address: Address) -> u128;
}
