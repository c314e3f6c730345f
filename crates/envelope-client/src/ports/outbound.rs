//! # Outbound Ports
//!
//! Traits for the client's external collaborators. Both are consumed as
//! black boxes; the in-process adapters exist to exercise the stack in
//! tests and demos.

use crate::errors::ClientError;
use crate::requests::{OperationRequest, SignedRequest};
use async_trait::async_trait;
use envelope_protocol::{Envelope, EnvelopeError, EnvelopeId};

/// Opaque identifier for one submission, used to poll its outcome.
pub type SubmitHandle = [u8; 32];

/// Outcome of polling a submission.
#[derive(Clone, Debug)]
pub enum SubmissionStatus {
    /// Not yet terminal; poll again.
    Pending,
    /// Accepted and applied. Carries the assigned id for creations.
    Success {
        /// Id assigned by the ledger (creations only).
        envelope_id: Option<EnvelopeId>,
    },
    /// Accepted and rejected by the ledger with a distinct failure kind.
    Failure(EnvelopeError),
}

impl SubmissionStatus {
    /// Check if terminal (success or failure).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Key custodian - outbound port.
///
/// Produces authenticated, signed operation requests. The custodian's
/// internals (hardware wallet, browser extension, KMS) are not this
/// crate's concern.
#[async_trait]
pub trait RequestSigner: Send + Sync {
    /// Identity this custodian signs for.
    fn address(&self) -> envelope_protocol::Address;

    /// Authorize an operation as this custodian's identity.
    async fn sign(&self, request: OperationRequest) -> Result<SignedRequest, ClientError>;
}

/// Submission/confirmation service - outbound port.
///
/// Accepts a signed request, returns a handle, and exposes polling.
/// Once accepted, an operation always reaches a terminal outcome;
/// callers may stop waiting but cannot revoke it.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Submit a signed request for execution.
    async fn submit(&self, signed: SignedRequest) -> Result<SubmitHandle, ClientError>;

    /// Poll the outcome of a prior submission.
    async fn poll(&self, handle: &SubmitHandle) -> Result<SubmissionStatus, ClientError>;

    /// Read an envelope snapshot.
    async fn get_envelope(&self, envelope_id: EnvelopeId) -> Result<Envelope, ClientError>;

    /// Read the count of envelopes ever created.
    async fn next_id(&self) -> Result<EnvelopeId, ClientError>;
}
