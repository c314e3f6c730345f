//! # Envelope Client
//!
//! Submits operations through the signer and gateway boundaries and
//! awaits confirmation under a bounded timeout.

use crate::errors::ClientError;
use crate::ports::{LedgerGateway, RequestSigner, SubmissionStatus, SubmitHandle};
use crate::requests::OperationRequest;
use envelope_protocol::{Address, Envelope, EnvelopeId, Hash, SecretPhrase};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// How long to await a terminal outcome before surfacing the
    /// submission as unknown.
    pub confirmation_timeout: Duration,
    /// Delay between outcome polls.
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            confirmation_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Client for the envelope protocol.
///
/// Builds requests, has them signed by the key custodian, submits them
/// through the gateway, and polls until a terminal outcome or the
/// confirmation window closes. Success is only ever reported from the
/// gateway's authoritative answer.
pub struct EnvelopeClient {
    signer: Arc<dyn RequestSigner>,
    gateway: Arc<dyn LedgerGateway>,
    config: ClientConfig,
}

impl EnvelopeClient {
    /// Create a client over a signer and gateway.
    pub fn new(
        signer: Arc<dyn RequestSigner>,
        gateway: Arc<dyn LedgerGateway>,
        config: ClientConfig,
    ) -> Self {
        Self {
            signer,
            gateway,
            config,
        }
    }

    /// Identity this client acts as.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Lock funds behind a secret commitment and a time window.
    ///
    /// Returns the id assigned by the ledger. Not idempotent: retrying
    /// after an unknown outcome would lock funds twice, so callers must
    /// resolve [`ClientError::ConfirmationTimeout`] via [`Self::check`]
    /// first.
    pub async fn create_envelope(
        &self,
        beneficiary: Address,
        amount: u128,
        secret_hash: Hash,
        unlock_time: u64,
        expiry_time: u64,
    ) -> Result<EnvelopeId, ClientError> {
        let request = OperationRequest::create(
            self.signer.address(),
            beneficiary,
            amount,
            secret_hash,
            unlock_time,
            expiry_time,
        )?;

        match self.submit_and_confirm(request).await? {
            SubmissionStatus::Success {
                envelope_id: Some(id),
            } => Ok(id),
            SubmissionStatus::Success { envelope_id: None } => Err(ClientError::MalformedResponse(
                "creation confirmed without an envelope id".to_string(),
            )),
            SubmissionStatus::Failure(err) => Err(ClientError::Rejected(err)),
            SubmissionStatus::Pending => Err(ClientError::MalformedResponse(
                "non-terminal status after confirmation".to_string(),
            )),
        }
    }

    /// Claim an envelope by revealing its secret.
    ///
    /// Safe to retry: a replay against an already claimed envelope is
    /// rejected by the ledger without moving funds.
    pub async fn claim(
        &self,
        envelope_id: EnvelopeId,
        secret: SecretPhrase,
    ) -> Result<(), ClientError> {
        let request = OperationRequest::claim(envelope_id, secret);
        self.expect_applied(self.submit_and_confirm(request).await?)
    }

    /// Reclaim an expired envelope. Safe to retry, like [`Self::claim`].
    pub async fn reclaim(&self, envelope_id: EnvelopeId) -> Result<(), ClientError> {
        let request = OperationRequest::reclaim(envelope_id);
        self.expect_applied(self.submit_and_confirm(request).await?)
    }

    /// Read an envelope snapshot.
    pub async fn get_envelope(&self, envelope_id: EnvelopeId) -> Result<Envelope, ClientError> {
        self.gateway.get_envelope(envelope_id).await
    }

    /// Count of envelopes ever created.
    pub async fn envelope_count(&self) -> Result<EnvelopeId, ClientError> {
        self.gateway.next_id().await
    }

    /// Re-query a submission whose outcome was unknown at timeout.
    pub async fn check(&self, handle: &SubmitHandle) -> Result<SubmissionStatus, ClientError> {
        self.gateway.poll(handle).await
    }

    fn expect_applied(&self, status: SubmissionStatus) -> Result<(), ClientError> {
        match status {
            SubmissionStatus::Success { .. } => Ok(()),
            SubmissionStatus::Failure(err) => Err(ClientError::Rejected(err)),
            SubmissionStatus::Pending => Err(ClientError::MalformedResponse(
                "non-terminal status after confirmation".to_string(),
            )),
        }
    }

    /// Sign, submit, then poll until terminal or the window closes.
    async fn submit_and_confirm(
        &self,
        request: OperationRequest,
    ) -> Result<SubmissionStatus, ClientError> {
        let signed = self.signer.sign(request).await?;
        let handle = self.gateway.submit(signed).await?;
        debug!(
            "[client] Submitted, awaiting confirmation of {}...",
            hex::encode(&handle[..4])
        );

        let deadline = Instant::now() + self.config.confirmation_timeout;
        loop {
            let status = self.gateway.poll(&handle).await?;
            if status.is_terminal() {
                info!(
                    "[client] Submission {}... confirmed",
                    hex::encode(&handle[..4])
                );
                return Ok(status);
            }

            if Instant::now() >= deadline {
                warn!(
                    "[client] Submission {}... still pending at timeout; outcome unknown",
                    hex::encode(&handle[..4])
                );
                return Err(ClientError::ConfirmationTimeout {
                    handle,
                    timeout_secs: self.config.confirmation_timeout.as_secs(),
                });
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}
