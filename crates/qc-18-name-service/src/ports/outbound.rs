//! # Outbound Ports (Driven Ports)
//!
//! Collaborators the Name Service reads from and writes through. All calls
//! operate on the state snapshot of the current transaction-processing step.

use crate::domain::{Account, Domain, FeeSchedule, NameServiceError};
use shared_types::{Address, Coin};

/// Read access to domain and account records.
pub trait DomainStore: Send + Sync {
    /// Get a domain by name.
    fn get_domain(&self, name: &str) -> Result<Option<Domain>, NameServiceError>;

    /// Get an account by `(domain, name)`.
    fn get_account(&self, domain: &str, name: &str) -> Result<Option<Account>, NameServiceError>;

    /// All account keys of a domain.
    ///
    /// ## Ordering
    ///
    /// Keys MUST be returned in a stable order fixed by the data (insertion
    /// order or a canonical sort). Pages are sliced from this sequence, so any
    /// other order makes nodes disagree.
    fn get_account_keys_in_domain(&self, domain: &str) -> Result<Vec<String>, NameServiceError>;
}

/// Balance transfers.
pub trait BankKeeper: Send + Sync {
    /// Move `amount` from `payer` to the module account `module`.
    ///
    /// Atomic: either the full amount moves or no balance changes. A payer
    /// that cannot cover `amount` fails with `InsufficientFunds`.
    fn send_coins_from_account_to_module(
        &self,
        payer: &Address,
        module: &str,
        amount: &Coin,
    ) -> Result<(), NameServiceError>;
}

/// Access to the process-wide fee schedule owned by the configuration module.
pub trait FeeScheduleProvider: Send + Sync {
    /// Current schedule. Fetched per call, never cached by the Name Service.
    fn get_fee_schedule(&self) -> Result<FeeSchedule, NameServiceError>;
}
