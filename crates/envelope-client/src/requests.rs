//! # Operation Requests
//!
//! Unsigned operation requests, client-side validation, and token unit
//! conversion.
//!
//! Validation here is a courtesy filter: the ledger re-validates
//! everything against its own clock and balances. The client only
//! rejects requests that could never succeed (zero amounts, malformed
//! hashes, inverted windows) before they cost a signature.

use crate::errors::ClientError;
use envelope_protocol::{Address, EnvelopeId, Hash, SecretPhrase};
use serde::{Deserialize, Serialize};

/// Base units per whole token.
pub const BASE_UNITS_PER_TOKEN: u128 = 10_000_000;

/// Decimal places representable in base units.
pub const TOKEN_DECIMALS: usize = 7;

/// Parse a decimal token amount into integer base units.
///
/// No floating point: the string is split at the decimal point and both
/// parts parsed as integers, so `"1.25"` becomes exactly `12_500_000`.
/// More than [`TOKEN_DECIMALS`] fractional digits is an error.
pub fn tokens_to_base_units(amount: &str) -> Result<u128, ClientError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(ClientError::InvalidAmount(amount.to_string()));
    }

    let (whole, frac) = match amount.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount, ""),
    };

    if frac.len() > TOKEN_DECIMALS {
        return Err(ClientError::InvalidAmount(amount.to_string()));
    }

    let whole_units: u128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| ClientError::InvalidAmount(amount.to_string()))?
    };

    let frac_units: u128 = if frac.is_empty() {
        0
    } else {
        // Right-pad to TOKEN_DECIMALS digits: "25" -> "2500000"
        let padded = format!("{:0<width$}", frac, width = TOKEN_DECIMALS);
        padded
            .parse()
            .map_err(|_| ClientError::InvalidAmount(amount.to_string()))?
    };

    whole_units
        .checked_mul(BASE_UNITS_PER_TOKEN)
        .and_then(|units| units.checked_add(frac_units))
        .ok_or_else(|| ClientError::InvalidAmount(amount.to_string()))
}

/// Decode a hex-encoded secret hash, enforcing the 32-byte format.
pub fn parse_secret_hash(hex_str: &str) -> Result<Hash, ClientError> {
    let bytes = hex::decode(hex_str.trim())
        .map_err(|_| ClientError::MalformedSecretHash { got: 0 })?;
    if bytes.len() != 32 {
        return Err(ClientError::MalformedSecretHash { got: bytes.len() });
    }
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&bytes);
    Ok(hash)
}

/// An unsigned protocol operation.
///
/// The acting identity is never carried inside claim/reclaim requests;
/// it is established by whoever signs, and the ledger authorizes
/// against that authenticated caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum OperationRequest {
    /// Lock funds behind a secret commitment and a time window.
    CreateEnvelope {
        /// Creator, debited for amount plus fee.
        owner: Address,
        /// Party authorized to claim.
        beneficiary: Address,
        /// Amount to lock, in base units.
        amount: u128,
        /// SHA-256 commitment to the secret.
        secret_hash: Hash,
        /// Claim window opens.
        unlock_time: u64,
        /// Claim window closes, reclaim opens.
        expiry_time: u64,
    },
    /// Claim an envelope by revealing the secret.
    Claim {
        /// Envelope to claim.
        envelope_id: EnvelopeId,
        /// Plaintext pre-image of the commitment.
        secret: SecretPhrase,
    },
    /// Reclaim an expired envelope.
    Reclaim {
        /// Envelope to reclaim.
        envelope_id: EnvelopeId,
    },
}

impl OperationRequest {
    /// Build a validated create request.
    pub fn create(
        owner: Address,
        beneficiary: Address,
        amount: u128,
        secret_hash: Hash,
        unlock_time: u64,
        expiry_time: u64,
    ) -> Result<Self, ClientError> {
        if amount == 0 {
            return Err(ClientError::InvalidAmount(amount.to_string()));
        }
        if expiry_time <= unlock_time {
            return Err(ClientError::InvalidWindow {
                unlock_time,
                expiry_time,
            });
        }
        Ok(Self::CreateEnvelope {
            owner,
            beneficiary,
            amount,
            secret_hash,
            unlock_time,
            expiry_time,
        })
    }

    /// Build a claim request.
    pub fn claim(envelope_id: EnvelopeId, secret: SecretPhrase) -> Self {
        Self::Claim {
            envelope_id,
            secret,
        }
    }

    /// Build a reclaim request.
    pub fn reclaim(envelope_id: EnvelopeId) -> Self {
        Self::Reclaim { envelope_id }
    }
}

/// An operation request bound to an authenticated signer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignedRequest {
    /// The operation being authorized.
    pub request: OperationRequest,
    /// Authenticated caller identity.
    pub signer: Address,
    /// Custodian-produced authorization over (signer, request).
    pub signature: Vec<u8>,
}
