//! # Name Service
//!
//! The keeper of Subsystem 18. Wires the outbound ports to the pure
//! algorithms and exposes the result as [`NameServiceApi`].
//!
//! ## Fee Collection
//!
//! ```text
//! msg ──→ FeeScheduleProvider ──→ FeeCalculator ──→ BankKeeper
//!          (schedule snapshot)     (pure amount)     (payer → fee_collector)
//! ```
//!
//! ## Accounts In Domain
//!
//! ```text
//! query ──validate──→ DomainStore::keys ──paginate──→ DomainStore::account
//!                                                      (once per key)
//! ```

use crate::algorithms::{paginate, FeeCalculator};
use crate::config::{ConfigError, NameServiceConfig};
use crate::domain::{
    Account, Domain, FeeSchedule, NameServiceError, NameServiceMsg, QueryAccountsInDomain,
};
use crate::ports::inbound::NameServiceApi;
use crate::ports::outbound::{BankKeeper, DomainStore, FeeScheduleProvider};
use shared_types::{address_to_hex, Coin};
use tracing::{debug, info, instrument, warn};

/// The Name Service keeper.
pub struct NameService<S, F, B> {
    config: NameServiceConfig,
    store: S,
    fees: F,
    bank: B,
}

impl<S, F, B> NameService<S, F, B>
where
    S: DomainStore,
    F: FeeScheduleProvider,
    B: BankKeeper,
{
    /// Create a new Name Service. Fails on invalid configuration.
    pub fn new(config: NameServiceConfig, store: S, fees: F, bank: B) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            fees,
            bank,
        })
    }

    pub fn config(&self) -> &NameServiceConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn fees(&self) -> &F {
        &self.fees
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    fn resolve_account(&self, domain: &str, key: &str) -> Result<Account, NameServiceError> {
        self.store
            .get_account(domain, key)?
            .ok_or_else(|| NameServiceError::InternalConsistency {
                domain: domain.to_string(),
                key: key.to_string(),
            })
    }
}

impl<S, F, B> NameServiceApi for NameService<S, F, B>
where
    S: DomainStore,
    F: FeeScheduleProvider,
    B: BankKeeper,
{
    fn get_domain(&self, name: &str) -> Result<Domain, NameServiceError> {
        self.store
            .get_domain(name)?
            .ok_or_else(|| NameServiceError::DomainNotFound {
                name: name.to_string(),
            })
    }

    #[instrument(skip(self, query), fields(domain = %query.domain))]
    fn get_accounts_in_domain(
        &self,
        query: &QueryAccountsInDomain,
    ) -> Result<Vec<Account>, NameServiceError> {
        let request = query.validate_with(
            self.config.default_results_per_page,
            self.config.default_page,
        )?;

        // Distinguishes a missing domain from an empty one.
        self.get_domain(&request.domain)?;

        let keys = self.store.get_account_keys_in_domain(&request.domain)?;
        let page = paginate(&keys, &request)?;
        debug!(
            "[qc-18] Page {} of {} ({} per page): {} of {} accounts",
            request.page,
            request.domain,
            request.results_per_page,
            page.len(),
            keys.len()
        );

        page.iter()
            .map(|key| self.resolve_account(&request.domain, key))
            .collect()
    }

    fn get_fee_schedule(&self) -> Result<FeeSchedule, NameServiceError> {
        self.fees.get_fee_schedule()
    }

    #[instrument(skip(self, msg, domain), fields(kind = %msg.kind(), domain = %domain.name))]
    fn collect_fees(
        &self,
        msg: &NameServiceMsg,
        domain: &Domain,
    ) -> Result<Coin, NameServiceError> {
        if msg.domain_name() != domain.name {
            return Err(NameServiceError::InvalidRequest(format!(
                "message targets domain {} but {} was resolved",
                msg.domain_name(),
                domain.name
            )));
        }
        if let NameServiceMsg::RegisterDomain { domain_type, .. } = msg {
            if *domain_type != domain.domain_type {
                return Err(NameServiceError::InvalidRequest(format!(
                    "message registers a {:?} domain but {} is {:?}",
                    domain_type, domain.name, domain.domain_type
                )));
            }
        }

        let schedule = self.fees.get_fee_schedule()?;
        schedule.validate()?;

        let fee = FeeCalculator::new(&schedule, domain).get_fee(msg);
        let payer = msg.fee_payer();

        if let Err(err) =
            self.bank
                .send_coins_from_account_to_module(&payer, &self.config.fee_collector, &fee)
        {
            warn!(
                "[qc-18] Fee collection failed for {} paid by {}: {}",
                msg.kind(),
                address_to_hex(&payer),
                err
            );
            return Err(err);
        }

        info!(
            "[qc-18] Collected {} for {} from {} (schedule v{})",
            fee,
            msg.kind(),
            address_to_hex(&payer),
            schedule.version
        );
        Ok(fee)
    }
}
