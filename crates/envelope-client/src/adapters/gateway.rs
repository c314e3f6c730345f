//! In-Process Gateway Adapter
//!
//! Implements `LedgerGateway` against a local `EnvelopeService`.
//!
//! The real gateway is a remote submission/confirmation service; this
//! adapter executes each accepted request directly on the sequential
//! ledger, records the outcome under a fresh handle, and can be
//! configured to report `Pending` for a number of polls to exercise the
//! client's confirmation loop.

use crate::adapters::authorization_bytes;
use crate::errors::ClientError;
use crate::ports::{LedgerGateway, SubmissionStatus, SubmitHandle};
use crate::requests::{OperationRequest, SignedRequest};
use async_trait::async_trait;
use envelope_protocol::{Envelope, EnvelopeApi, EnvelopeError, EnvelopeId, EnvelopeService};
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Gateway executing submissions against a local envelope service.
pub struct InProcessGateway {
    service: Arc<EnvelopeService>,
    outcomes: RwLock<HashMap<SubmitHandle, SubmissionStatus>>,
    /// Remaining polls per handle that still report `Pending`.
    pending_polls: RwLock<HashMap<SubmitHandle, u32>>,
    /// Polls that report `Pending` before the outcome is visible.
    confirmation_delay_polls: u32,
    submission_counter: RwLock<u64>,
}

impl InProcessGateway {
    /// Create a gateway with immediately visible outcomes.
    pub fn new(service: Arc<EnvelopeService>) -> Self {
        Self::with_confirmation_delay(service, 0)
    }

    /// Create a gateway whose outcomes stay `Pending` for the first
    /// `delay_polls` polls of each submission.
    pub fn with_confirmation_delay(service: Arc<EnvelopeService>, delay_polls: u32) -> Self {
        Self {
            service,
            outcomes: RwLock::new(HashMap::new()),
            pending_polls: RwLock::new(HashMap::new()),
            confirmation_delay_polls: delay_polls,
            submission_counter: RwLock::new(0),
        }
    }

    fn allocate_handle(&self, signed: &SignedRequest) -> SubmitHandle {
        let mut counter = self.submission_counter.write();
        *counter += 1;

        let mut hasher = Sha256::new();
        hasher.update(counter.to_le_bytes());
        hasher.update(signed.signer);
        hasher.update(&signed.signature);

        let result = hasher.finalize();
        let mut handle = [0u8; 32];
        handle.copy_from_slice(&result);
        handle
    }

    /// Execute one accepted request on the sequential ledger.
    async fn execute(&self, signed: SignedRequest) -> SubmissionStatus {
        match signed.request {
            OperationRequest::CreateEnvelope {
                owner,
                beneficiary,
                amount,
                secret_hash,
                unlock_time,
                expiry_time,
            } => {
                // Only the debited owner can authorize a creation.
                if signed.signer != owner {
                    return SubmissionStatus::Failure(EnvelopeError::Unauthorized);
                }
                let params = envelope_protocol::EnvelopeParams {
                    owner,
                    beneficiary,
                    amount,
                    secret_hash,
                    unlock_time,
                    expiry_time,
                };
                match self.service.create_envelope(params).await {
                    Ok(id) => SubmissionStatus::Success {
                        envelope_id: Some(id),
                    },
                    Err(err) => SubmissionStatus::Failure(err),
                }
            }
            OperationRequest::Claim {
                envelope_id,
                secret,
            } => {
                match self
                    .service
                    .claim(envelope_id, secret.as_bytes(), signed.signer)
                    .await
                {
                    Ok(()) => SubmissionStatus::Success { envelope_id: None },
                    Err(err) => SubmissionStatus::Failure(err),
                }
            }
            OperationRequest::Reclaim { envelope_id } => {
                match self.service.reclaim(envelope_id, signed.signer).await {
                    Ok(()) => SubmissionStatus::Success { envelope_id: None },
                    Err(err) => SubmissionStatus::Failure(err),
                }
            }
        }
    }
}

#[async_trait]
impl LedgerGateway for InProcessGateway {
    async fn submit(&self, signed: SignedRequest) -> Result<SubmitHandle, ClientError> {
        if signed.signature != authorization_bytes(&signed.signer, &signed.request) {
            return Err(ClientError::Signing("authorization mismatch".to_string()));
        }

        let handle = self.allocate_handle(&signed);
        info!(
            "[client] Accepted submission {}...",
            hex::encode(&handle[..4])
        );

        let outcome = self.execute(signed).await;
        self.outcomes.write().insert(handle, outcome);
        if self.confirmation_delay_polls > 0 {
            self.pending_polls
                .write()
                .insert(handle, self.confirmation_delay_polls);
        }

        Ok(handle)
    }

    async fn poll(&self, handle: &SubmitHandle) -> Result<SubmissionStatus, ClientError> {
        debug!("[client] Polling submission {}...", hex::encode(&handle[..4]));

        {
            let mut pending = self.pending_polls.write();
            if let Some(remaining) = pending.get_mut(handle) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Ok(SubmissionStatus::Pending);
                }
            }
        }

        self.outcomes
            .read()
            .get(handle)
            .cloned()
            .ok_or(ClientError::UnknownHandle)
    }

    async fn get_envelope(&self, envelope_id: EnvelopeId) -> Result<Envelope, ClientError> {
        self.service
            .get_envelope(envelope_id)
            .await
            .map_err(ClientError::Rejected)
    }

    async fn next_id(&self) -> Result<EnvelopeId, ClientError> {
        Ok(self.service.next_id().await)
    }
}
