//! # End-to-End Lifecycle Tests
//!
//! Drives the complete stack:
//!
//! ```text
//! [EnvelopeClient] ──sign──→ [DevSigner]
//!         │
//!         └──submit/poll──→ [InProcessGateway] ──→ [EnvelopeService]
//!                                                    (sequential ledger)
//! ```
//!
//! ## Test Categories
//!
//! 1. **Claim lifecycle**: lock, early/wrong/correct claim, replay
//! 2. **Reclaim lifecycle**: expiry wait, reclaim, late claim
//! 3. **Ledger accounting**: custody conservation, dense ids
//! 4. **Confirmation flow**: pending polls before the outcome lands

// =============================================================================
// TEST FIXTURES (only compiled during tests)
// =============================================================================

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use envelope_client::{ClientConfig, DevSigner, EnvelopeClient, InProcessGateway};

#[cfg(test)]
use envelope_protocol::{
    hash_secret, Address, EnvelopeApi, EnvelopeService, EnvelopeStatus, ManualClock,
    ProtocolConfig, SecretPhrase,
};

#[cfg(test)]
const OWNER: Address = [0xA1; 20];
#[cfg(test)]
const BENEFICIARY: Address = [0xB2; 20];
#[cfg(test)]
const GENESIS_TIME: u64 = 1_700_000_000;
#[cfg(test)]
const SECRET: &str = "correct horse battery staple";

/// Full-stack harness: one ledger, one clock, a client per party.
#[cfg(test)]
struct LifecycleHarness {
    clock: Arc<ManualClock>,
    service: Arc<EnvelopeService>,
    owner: EnvelopeClient,
    beneficiary: EnvelopeClient,
}

#[cfg(test)]
impl LifecycleHarness {
    fn new() -> Self {
        Self::with_confirmation_delay(0)
    }

    fn with_confirmation_delay(delay_polls: u32) -> Self {
        let clock = Arc::new(ManualClock::new(GENESIS_TIME));
        let service = Arc::new(EnvelopeService::new(
            clock.clone(),
            ProtocolConfig::default(),
        ));
        service.fund_account(OWNER, 1_000_000);

        let gateway = Arc::new(InProcessGateway::with_confirmation_delay(
            service.clone(),
            delay_polls,
        ));
        let config = ClientConfig {
            confirmation_timeout: std::time::Duration::from_secs(5),
            poll_interval: std::time::Duration::from_millis(5),
        };

        let owner = EnvelopeClient::new(
            Arc::new(DevSigner::new(OWNER)),
            gateway.clone(),
            config.clone(),
        );
        let beneficiary =
            EnvelopeClient::new(Arc::new(DevSigner::new(BENEFICIARY)), gateway, config);

        Self {
            clock,
            service,
            owner,
            beneficiary,
        }
    }

    /// Lock 100 base units with unlock T+60 and expiry T+3600.
    async fn lock_standard_envelope(&self) -> u64 {
        self.owner
            .create_envelope(
                BENEFICIARY,
                100,
                hash_secret(SECRET.as_bytes()),
                GENESIS_TIME + 60,
                GENESIS_TIME + 3600,
            )
            .await
            .expect("creation should succeed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envelope_client::ClientError;
    use envelope_protocol::EnvelopeError;

    #[tokio::test]
    async fn test_claim_lifecycle_scenario() {
        let harness = LifecycleHarness::new();
        let id = harness.lock_standard_envelope().await;

        // T+30: correct secret, before unlock.
        harness.clock.set_time(GENESIS_TIME + 30);
        let result = harness
            .beneficiary
            .claim(id, SecretPhrase::from_phrase(SECRET))
            .await;
        assert!(matches!(
            result,
            Err(ClientError::Rejected(EnvelopeError::NotYetUnlocked { .. }))
        ));

        // T+90: wrong secret, inside the window.
        harness.clock.set_time(GENESIS_TIME + 90);
        let result = harness
            .beneficiary
            .claim(id, SecretPhrase::from_phrase("wrong phrase"))
            .await;
        assert!(matches!(
            result,
            Err(ClientError::Rejected(EnvelopeError::InvalidSecret))
        ));

        // T+90: correct secret pays the beneficiary.
        harness
            .beneficiary
            .claim(id, SecretPhrase::from_phrase(SECRET))
            .await
            .unwrap();
        assert_eq!(harness.service.balance_of(BENEFICIARY).await, 100);
        let envelope = harness.owner.get_envelope(id).await.unwrap();
        assert_eq!(envelope.status, EnvelopeStatus::Claimed);

        // T+4000: the owner's reclaim hits the terminal state.
        harness.clock.set_time(GENESIS_TIME + 4000);
        let result = harness.owner.reclaim(id).await;
        assert!(matches!(
            result,
            Err(ClientError::Rejected(EnvelopeError::AlreadyFinalized(_)))
        ));
    }

    #[tokio::test]
    async fn test_reclaim_lifecycle_scenario() {
        let harness = LifecycleHarness::new();
        let id = harness.lock_standard_envelope().await;
        let funded_balance = 1_000_000;

        // Before expiry: owner reclaim is too early.
        harness.clock.set_time(GENESIS_TIME + 3000);
        let result = harness.owner.reclaim(id).await;
        assert!(matches!(
            result,
            Err(ClientError::Rejected(EnvelopeError::NotYetExpired { .. }))
        ));

        // After expiry: funds come home.
        harness.clock.set_time(GENESIS_TIME + 3600);
        harness.owner.reclaim(id).await.unwrap();
        assert_eq!(harness.service.balance_of(OWNER).await, funded_balance);
        let envelope = harness.owner.get_envelope(id).await.unwrap();
        assert_eq!(envelope.status, EnvelopeStatus::Reclaimed);

        // Beneficiary claim thereafter.
        let result = harness
            .beneficiary
            .claim(id, SecretPhrase::from_phrase(SECRET))
            .await;
        assert!(matches!(
            result,
            Err(ClientError::Rejected(EnvelopeError::AlreadyFinalized(_)))
        ));
    }

    #[tokio::test]
    async fn test_reclaim_by_stranger_rejected_after_expiry() {
        let harness = LifecycleHarness::new();
        let id = harness.lock_standard_envelope().await;

        harness.clock.set_time(GENESIS_TIME + 4000);
        let result = harness.beneficiary.reclaim(id).await;
        assert!(matches!(
            result,
            Err(ClientError::Rejected(EnvelopeError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn test_custody_conserved_across_many_envelopes() {
        let harness = LifecycleHarness::new();
        let total = harness.service.total_value();

        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(harness.lock_standard_envelope().await);
        }
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(harness.service.custody_total(), 500);
        assert_eq!(harness.service.total_value(), total);

        // Claim two, reclaim one, leave two locked.
        harness.clock.set_time(GENESIS_TIME + 90);
        for id in &ids[..2] {
            harness
                .beneficiary
                .claim(*id, SecretPhrase::from_phrase(SECRET))
                .await
                .unwrap();
        }
        harness.clock.set_time(GENESIS_TIME + 3600);
        harness.owner.reclaim(ids[2]).await.unwrap();

        assert_eq!(harness.service.custody_total(), 200);
        assert_eq!(harness.service.total_value(), total);
        assert_eq!(harness.owner.envelope_count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_confirmation_flow_with_pending_polls() {
        let harness = LifecycleHarness::with_confirmation_delay(3);
        let id = harness.lock_standard_envelope().await;

        harness.clock.set_time(GENESIS_TIME + 90);
        harness
            .beneficiary
            .claim(id, SecretPhrase::from_phrase(SECRET))
            .await
            .unwrap();

        let envelope = harness.owner.get_envelope(id).await.unwrap();
        assert_eq!(envelope.status, EnvelopeStatus::Claimed);
    }

    #[tokio::test]
    async fn test_get_envelope_missing_is_distinct() {
        let harness = LifecycleHarness::new();
        let result = harness.owner.get_envelope(42).await;
        assert!(matches!(
            result,
            Err(ClientError::Rejected(EnvelopeError::NotFound(42)))
        ));
    }
}
