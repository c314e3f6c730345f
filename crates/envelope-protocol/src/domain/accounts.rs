//! # Account Ledger
//!
//! Spendable balances plus the custody pool holding locked amounts.
//!
//! ## Type Decisions
//!
//! - `u128` balances: sufficient for 340 undecillion base units, covers
//!   all practical token supplies without big-integer arithmetic.
//!
//! ## Conservation
//!
//! Every operation preserves `sum(balances) + custody + fees`. Locking
//! moves value from a balance into custody; claim/reclaim move it back
//! out; fees accumulate in their own pool.

use super::errors::{Address, EnvelopeError};
use std::collections::HashMap;

/// Balance ledger with an explicit custody pool.
#[derive(Debug, Default)]
pub struct AccountLedger {
    balances: HashMap<Address, u128>,
    custody_total: u128,
    fees_collected: u128,
}

impl AccountLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spendable balance of an account (0 for unknown accounts).
    pub fn balance_of(&self, address: &Address) -> u128 {
        self.balances.get(address).copied().unwrap_or(0)
    }

    /// Credit an account's spendable balance.
    pub fn credit(&mut self, address: Address, amount: u128) {
        *self.balances.entry(address).or_insert(0) += amount;
    }

    /// Move `amount` from an account's spendable balance into custody.
    pub fn debit_to_custody(
        &mut self,
        address: &Address,
        amount: u128,
    ) -> Result<(), EnvelopeError> {
        let balance = self.balances.entry(*address).or_insert(0);
        if *balance < amount {
            return Err(EnvelopeError::InsufficientFunds {
                required: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        self.custody_total += amount;
        Ok(())
    }

    /// Release `amount` from custody to an account's spendable balance.
    pub fn release_custody(
        &mut self,
        address: Address,
        amount: u128,
    ) -> Result<(), EnvelopeError> {
        self.custody_total = self.custody_total.checked_sub(amount).ok_or(
            EnvelopeError::InsufficientFunds {
                required: amount,
                available: self.custody_total,
            },
        )?;
        self.credit(address, amount);
        Ok(())
    }

    /// Move a fee from an account's spendable balance into the fee pool.
    pub fn collect_fee(&mut self, address: &Address, fee: u128) -> Result<(), EnvelopeError> {
        if fee == 0 {
            return Ok(());
        }
        let balance = self.balances.entry(*address).or_insert(0);
        if *balance < fee {
            return Err(EnvelopeError::InsufficientFunds {
                required: fee,
                available: *balance,
            });
        }
        *balance -= fee;
        self.fees_collected += fee;
        Ok(())
    }

    /// Total value currently held in custody.
    pub fn custody_total(&self) -> u128 {
        self.custody_total
    }

    /// Total fees collected since genesis.
    pub fn fees_collected(&self) -> u128 {
        self.fees_collected
    }

    /// Total value tracked by the ledger: balances + custody + fees.
    pub fn total_value(&self) -> u128 {
        self.balances.values().sum::<u128>() + self.custody_total + self.fees_collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: Address = [1u8; 20];
    const BOB: Address = [2u8; 20];

    #[test]
    fn test_unknown_account_has_zero_balance() {
        let ledger = AccountLedger::new();
        assert_eq!(ledger.balance_of(&ALICE), 0);
    }

    #[test]
    fn test_credit_and_balance() {
        let mut ledger = AccountLedger::new();
        ledger.credit(ALICE, 500);
        ledger.credit(ALICE, 250);
        assert_eq!(ledger.balance_of(&ALICE), 750);
    }

    #[test]
    fn test_debit_to_custody() {
        let mut ledger = AccountLedger::new();
        ledger.credit(ALICE, 1000);

        ledger.debit_to_custody(&ALICE, 400).unwrap();
        assert_eq!(ledger.balance_of(&ALICE), 600);
        assert_eq!(ledger.custody_total(), 400);
    }

    #[test]
    fn test_debit_insufficient_fails_untouched() {
        let mut ledger = AccountLedger::new();
        ledger.credit(ALICE, 100);

        let result = ledger.debit_to_custody(&ALICE, 400);
        assert!(matches!(
            result,
            Err(EnvelopeError::InsufficientFunds {
                required: 400,
                available: 100
            })
        ));
        assert_eq!(ledger.balance_of(&ALICE), 100);
        assert_eq!(ledger.custody_total(), 0);
    }

    #[test]
    fn test_release_custody() {
        let mut ledger = AccountLedger::new();
        ledger.credit(ALICE, 1000);
        ledger.debit_to_custody(&ALICE, 400).unwrap();

        ledger.release_custody(BOB, 400).unwrap();
        assert_eq!(ledger.balance_of(&BOB), 400);
        assert_eq!(ledger.custody_total(), 0);
    }

    #[test]
    fn test_release_more_than_custody_fails() {
        let mut ledger = AccountLedger::new();
        assert!(ledger.release_custody(BOB, 1).is_err());
    }

    #[test]
    fn test_collect_fee() {
        let mut ledger = AccountLedger::new();
        ledger.credit(ALICE, 1000);

        ledger.collect_fee(&ALICE, 10).unwrap();
        assert_eq!(ledger.balance_of(&ALICE), 990);
        assert_eq!(ledger.fees_collected(), 10);
    }

    #[test]
    fn test_zero_fee_is_noop() {
        let mut ledger = AccountLedger::new();
        ledger.collect_fee(&ALICE, 0).unwrap();
        assert_eq!(ledger.fees_collected(), 0);
    }

    #[test]
    fn test_conservation_across_operations() {
        let mut ledger = AccountLedger::new();
        ledger.credit(ALICE, 1000);
        ledger.credit(BOB, 200);
        let total = ledger.total_value();

        ledger.debit_to_custody(&ALICE, 300).unwrap();
        assert_eq!(ledger.total_value(), total);

        ledger.collect_fee(&ALICE, 5).unwrap();
        assert_eq!(ledger.total_value(), total);

        ledger.release_custody(BOB, 300).unwrap();
        assert_eq!(ledger.total_value(), total);
    }
}
