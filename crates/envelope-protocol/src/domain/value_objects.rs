//! # Domain Value Objects
//!
//! Immutable value types for the envelope protocol.

use serde::{Deserialize, Serialize};

/// Envelope lifecycle state machine.
///
/// Created `Locked`; `Claimed` and `Reclaimed` are terminal. Status is
/// monotonic: no transition ever leaves a terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeStatus {
    /// Funds custodied, awaiting claim or expiry.
    #[default]
    Locked,
    /// Secret revealed, funds released to beneficiary.
    Claimed,
    /// Expired unclaimed, funds returned to owner.
    Reclaimed,
}

impl EnvelopeStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: EnvelopeStatus) -> bool {
        matches!(
            (self, next),
            (Self::Locked, Self::Claimed) | (Self::Locked, Self::Reclaimed)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Claimed | Self::Reclaimed)
    }
}

/// Protocol configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Fee charged at envelope creation, in base units.
    ///
    /// Charged in addition to the locked amount, never deducted from it,
    /// and not refunded on claim or reclaim. Defaults to 0.
    pub protocol_fee: u128,
}
