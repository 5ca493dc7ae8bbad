//! In-Memory Bank
//!
//! Implements `BankKeeper` with account and module balances held behind a
//! single lock, so a transfer's debit and credit are applied together or
//! not at all.

use crate::domain::NameServiceError;
use crate::ports::outbound::BankKeeper;
use parking_lot::RwLock;
use shared_types::{address_to_hex, Address, Coin};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Default)]
struct Ledger {
    /// address -> denom -> amount
    accounts: BTreeMap<Address, BTreeMap<String, u128>>,
    /// module name -> denom -> amount
    modules: BTreeMap<String, BTreeMap<String, u128>>,
}

/// In-memory balances for accounts and module accounts.
#[derive(Default)]
pub struct InMemoryBank {
    ledger: RwLock<Ledger>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an account balance directly.
    pub fn set_balance(&self, address: Address, coin: Coin) {
        self.ledger
            .write()
            .accounts
            .entry(address)
            .or_default()
            .insert(coin.denom, coin.amount);
    }

    /// Balance of an account in `denom`.
    pub fn balance(&self, address: &Address, denom: &str) -> Coin {
        let amount = self
            .ledger
            .read()
            .accounts
            .get(address)
            .and_then(|balances| balances.get(denom))
            .copied()
            .unwrap_or(0);
        Coin::new(denom, amount)
    }

    /// Balance of a module account in `denom`.
    pub fn module_balance(&self, module: &str, denom: &str) -> Coin {
        let amount = self
            .ledger
            .read()
            .modules
            .get(module)
            .and_then(|balances| balances.get(denom))
            .copied()
            .unwrap_or(0);
        Coin::new(denom, amount)
    }
}

impl BankKeeper for InMemoryBank {
    fn send_coins_from_account_to_module(
        &self,
        payer: &Address,
        module: &str,
        amount: &Coin,
    ) -> Result<(), NameServiceError> {
        let mut ledger = self.ledger.write();

        let available = ledger
            .accounts
            .get(payer)
            .and_then(|balances| balances.get(&amount.denom))
            .copied()
            .unwrap_or(0);
        let collected = ledger
            .modules
            .get(module)
            .and_then(|balances| balances.get(&amount.denom))
            .copied()
            .unwrap_or(0);

        // Both sides are computed before either is written.
        let debited = Coin::new(amount.denom.clone(), available)
            .checked_sub(amount)
            .map_err(|_| {
                warn!(
                    "[qc-18] Insufficient funds for {}: {} < {}",
                    address_to_hex(payer),
                    available,
                    amount
                );
                NameServiceError::InsufficientFunds {
                    required: amount.to_string(),
                    available: Coin::new(amount.denom.clone(), available).to_string(),
                }
            })?;
        let credited = Coin::new(amount.denom.clone(), collected).checked_add(amount)?;

        ledger
            .accounts
            .entry(*payer)
            .or_default()
            .insert(amount.denom.clone(), debited.amount);
        ledger
            .modules
            .entry(module.to_string())
            .or_default()
            .insert(amount.denom.clone(), credited.amount);

        debug!(
            "[qc-18] Moved {} from {} to module {}",
            amount,
            address_to_hex(payer),
            module
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYER: Address = [7u8; 20];

    #[test]
    fn test_transfer_moves_full_amount() {
        let bank = InMemoryBank::new();
        bank.set_balance(PAYER, Coin::new("tiov", 100));

        bank.send_coins_from_account_to_module(&PAYER, "fee_collector", &Coin::new("tiov", 30))
            .unwrap();

        assert_eq!(bank.balance(&PAYER, "tiov").amount, 70);
        assert_eq!(bank.module_balance("fee_collector", "tiov").amount, 30);
    }

    #[test]
    fn test_insufficient_funds_changes_nothing() {
        let bank = InMemoryBank::new();
        bank.set_balance(PAYER, Coin::new("tiov", 10));

        let result =
            bank.send_coins_from_account_to_module(&PAYER, "fee_collector", &Coin::new("tiov", 11));

        assert!(matches!(
            result,
            Err(NameServiceError::InsufficientFunds { .. })
        ));
        assert_eq!(bank.balance(&PAYER, "tiov").amount, 10);
        assert_eq!(bank.module_balance("fee_collector", "tiov").amount, 0);
    }

    #[test]
    fn test_zero_balance_payer_fails() {
        let bank = InMemoryBank::new();
        let result =
            bank.send_coins_from_account_to_module(&PAYER, "fee_collector", &Coin::new("tiov", 1));
        assert!(result.is_err());
    }

    #[test]
    fn test_module_overflow_changes_nothing() {
        let bank = InMemoryBank::new();
        bank.set_balance(PAYER, Coin::new("tiov", 10));
        bank.ledger
            .write()
            .modules
            .entry("fee_collector".to_string())
            .or_default()
            .insert("tiov".to_string(), u128::MAX);

        let result =
            bank.send_coins_from_account_to_module(&PAYER, "fee_collector", &Coin::new("tiov", 5));

        assert!(matches!(result, Err(NameServiceError::Coin(_))));
        assert_eq!(bank.balance(&PAYER, "tiov").amount, 10);
        assert_eq!(bank.module_balance("fee_collector", "tiov").amount, u128::MAX);
    }

    #[test]
    fn test_other_denoms_untouched() {
        let bank = InMemoryBank::new();
        bank.set_balance(PAYER, Coin::new("tiov", 50));
        bank.set_balance(PAYER, Coin::new("uatom", 5));

        bank.send_coins_from_account_to_module(&PAYER, "fee_collector", &Coin::new("tiov", 50))
            .unwrap();

        assert_eq!(bank.balance(&PAYER, "tiov").amount, 0);
        assert_eq!(bank.balance(&PAYER, "uatom").amount, 5);
    }
}
