//! # Envelope Service
//!
//! The lock, claim, and reclaim engines over one sequential ledger.
//!
//! All three engines share a single write lock covering the envelope
//! store and the account ledger, so each operation executes to
//! completion with exclusive access before the next begins. A failed
//! validation leaves every piece of state untouched; a successful
//! operation moves funds and transitions status as one unit.

use crate::algorithms::{verify_claim, verify_reclaim};
use crate::domain::{
    invariant_creation_timing, invariant_positive_amount, AccountLedger, Address, Envelope,
    EnvelopeError, EnvelopeId, EnvelopeParams, EnvelopeStatus, EnvelopeStore, ProtocolConfig,
};
use crate::ports::{Clock, EnvelopeApi};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// Combined mutable state guarded by the service's single lock.
struct LedgerState {
    store: EnvelopeStore,
    accounts: AccountLedger,
}

/// Envelope protocol service implementing [`EnvelopeApi`].
pub struct EnvelopeService {
    state: RwLock<LedgerState>,
    clock: Arc<dyn Clock>,
    config: ProtocolConfig,
}

impl EnvelopeService {
    /// Create a service with the given clock and configuration.
    pub fn new(clock: Arc<dyn Clock>, config: ProtocolConfig) -> Self {
        Self {
            state: RwLock::new(LedgerState {
                store: EnvelopeStore::new(),
                accounts: AccountLedger::new(),
            }),
            clock,
            config,
        }
    }

    /// Credit an account's spendable balance (genesis/funding path).
    pub fn fund_account(&self, address: Address, amount: u128) {
        info!(
            "[envelope] Funding account {} with {}",
            hex::encode(&address[..4]),
            amount
        );
        self.state.write().accounts.credit(address, amount);
    }

    /// Total value currently held in custody.
    pub fn custody_total(&self) -> u128 {
        self.state.read().accounts.custody_total()
    }

    /// Total fees collected since genesis.
    pub fn fees_collected(&self) -> u128 {
        self.state.read().accounts.fees_collected()
    }

    /// Total value tracked by the ledger (balances + custody + fees).
    pub fn total_value(&self) -> u128 {
        self.state.read().accounts.total_value()
    }
}

#[async_trait]
impl EnvelopeApi for EnvelopeService {
    async fn create_envelope(&self, params: EnvelopeParams) -> Result<EnvelopeId, EnvelopeError> {
        let now = self.clock.now();

        invariant_positive_amount(params.amount)?;
        invariant_creation_timing(params.unlock_time, params.expiry_time, now)?;

        let required = params
            .amount
            .checked_add(self.config.protocol_fee)
            .ok_or(EnvelopeError::InvalidAmount(params.amount))?;

        let mut state = self.state.write();

        // Validate everything before the first mutation so a failure
        // leaves balances and store untouched.
        let available = state.accounts.balance_of(&params.owner);
        if available < required {
            return Err(EnvelopeError::InsufficientFunds {
                required,
                available,
            });
        }

        let owner = params.owner;
        let amount = params.amount;
        let unlock_time = params.unlock_time;
        let expiry_time = params.expiry_time;

        let envelope_id = state.store.insert(params)?;
        state.accounts.debit_to_custody(&owner, amount)?;
        state.accounts.collect_fee(&owner, self.config.protocol_fee)?;

        info!(
            "[envelope] Created envelope {} for {} base units, window [{}, {})",
            envelope_id, amount, unlock_time, expiry_time
        );

        Ok(envelope_id)
    }

    async fn claim(
        &self,
        envelope_id: EnvelopeId,
        secret: &[u8],
        claimant: Address,
    ) -> Result<(), EnvelopeError> {
        let now = self.clock.now();
        debug!("[envelope] Claim attempt on envelope {}", envelope_id);

        let mut state = self.state.write();

        // Validation order: existence, status, authorization, timing,
        // secret. Each failure is distinct and mutually exclusive.
        let envelope = state
            .store
            .get(envelope_id)
            .ok_or(EnvelopeError::NotFound(envelope_id))?;

        if envelope.status != EnvelopeStatus::Locked {
            return Err(EnvelopeError::AlreadyFinalized(envelope_id));
        }

        verify_claim(
            secret,
            &envelope.secret_hash,
            &claimant,
            &envelope.beneficiary,
            now,
            envelope.unlock_time,
            envelope.expiry_time,
        )?;

        let beneficiary = envelope.beneficiary;
        let amount = envelope.amount;

        state.accounts.release_custody(beneficiary, amount)?;
        state
            .store
            .update_status(envelope_id, EnvelopeStatus::Claimed)?;

        info!(
            "[envelope] Envelope {} claimed, released {} base units",
            envelope_id, amount
        );
        Ok(())
    }

    async fn reclaim(
        &self,
        envelope_id: EnvelopeId,
        caller: Address,
    ) -> Result<(), EnvelopeError> {
        let now = self.clock.now();
        debug!("[envelope] Reclaim attempt on envelope {}", envelope_id);

        let mut state = self.state.write();

        let envelope = state
            .store
            .get(envelope_id)
            .ok_or(EnvelopeError::NotFound(envelope_id))?;

        if envelope.status != EnvelopeStatus::Locked {
            return Err(EnvelopeError::AlreadyFinalized(envelope_id));
        }

        verify_reclaim(&caller, &envelope.owner, now, envelope.expiry_time)?;

        let owner = envelope.owner;
        let amount = envelope.amount;

        state.accounts.release_custody(owner, amount)?;
        state
            .store
            .update_status(envelope_id, EnvelopeStatus::Reclaimed)?;

        info!(
            "[envelope] Envelope {} reclaimed, returned {} base units",
            envelope_id, amount
        );
        Ok(())
    }

    async fn get_envelope(&self, envelope_id: EnvelopeId) -> Result<Envelope, EnvelopeError> {
        self.state
            .read()
            .store
            .get(envelope_id)
            .cloned()
            .ok_or(EnvelopeError::NotFound(envelope_id))
    }

    async fn next_id(&self) -> EnvelopeId {
        self.state.read().store.next_id()
    }

    async fn balance_of(&self, address: Address) -> u128 {
        self.state.read().accounts.balance_of(&address)
    }
}
