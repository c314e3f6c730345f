//! Dev Signer Adapter
//!
//! Deterministic in-process stand-in for the key custodian. Real
//! deployments hand requests to an external signing agent; this one
//! exists so tests and demos can exercise the full submit path.

use crate::errors::ClientError;
use crate::ports::RequestSigner;
use crate::requests::{OperationRequest, SignedRequest};
use async_trait::async_trait;
use envelope_protocol::Address;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Authorization bytes over (signer, request).
///
/// Not a real signature scheme: a digest binding the signer identity to
/// the serialized request, verifiable by the in-process gateway.
pub(crate) fn authorization_bytes(signer: &Address, request: &OperationRequest) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(signer);
    // Serialization is infallible for these derive-only types.
    if let Ok(payload) = serde_json::to_vec(request) {
        hasher.update(&payload);
    }
    hasher.finalize().to_vec()
}

/// In-process signer bound to a fixed identity.
pub struct DevSigner {
    address: Address,
}

impl DevSigner {
    /// Create a signer for the given identity.
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

#[async_trait]
impl RequestSigner for DevSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign(&self, request: OperationRequest) -> Result<SignedRequest, ClientError> {
        debug!(
            "[client] Signing request as {}",
            hex::encode(&self.address[..4])
        );
        let signature = authorization_bytes(&self.address, &request);
        Ok(SignedRequest {
            request,
            signer: self.address,
            signature,
        })
    }
}
