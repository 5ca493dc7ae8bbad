//! # Inbound Ports (Driving Ports)
//!
//! Public API exposed by the Name Service to transaction handlers and the
//! query router.

use crate::domain::{
    Account, Domain, FeeSchedule, NameServiceError, NameServiceMsg, QueryAccountsInDomain,
};
use shared_types::Coin;

/// Primary API for the Name Service subsystem.
pub trait NameServiceApi: Send + Sync {
    /// Get a domain by name.
    ///
    /// ## Returns
    ///
    /// - `Ok(Domain)`: the stored record
    /// - `Err(DomainNotFound)`: no such domain
    fn get_domain(&self, name: &str) -> Result<Domain, NameServiceError>;

    /// Get one page of the accounts registered in a domain.
    ///
    /// ## Returns
    ///
    /// - `Ok(accounts)`: possibly empty when the domain has no accounts
    /// - `Err(InvalidRequest)`: empty domain name
    /// - `Err(OutOfRange)`: page starts beyond the available accounts
    /// - `Err(InternalConsistency)`: an indexed key has no record
    fn get_accounts_in_domain(
        &self,
        query: &QueryAccountsInDomain,
    ) -> Result<Vec<Account>, NameServiceError>;

    /// Current fee schedule.
    fn get_fee_schedule(&self) -> Result<FeeSchedule, NameServiceError>;

    /// Charge the fee for `msg` against its fee payer.
    ///
    /// `domain` is the resolved domain the message targets (for
    /// `RegisterDomain`, the domain about to be created). Any error must abort
    /// the enclosing transaction.
    fn collect_fees(&self, msg: &NameServiceMsg, domain: &Domain) -> Result<Coin, NameServiceError>;
}
