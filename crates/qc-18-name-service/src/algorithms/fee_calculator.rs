//! # Fee Calculator
//!
//! Pure fee computation for Name Service messages.
//!
//! The result depends only on the fee schedule snapshot, the resolved target
//! domain and the message. No clock, randomness or I/O is consulted, so every
//! validating node derives the same amount from the same state.
//!
//! | Message | Fee |
//! |---------|-----|
//! | RegisterDomain | length tier, times open multiplier for open domains |
//! | RegisterAccount, Renew*, Transfer* | closed/open tier of the domain |
//! | Resources, certificates, metadata | fixed |
//! | DeleteDomain, DeleteAccount | default fee |
//!
//! Every result is floored at `default_fee`.

use crate::domain::{Domain, DomainType, FeeSchedule, NameServiceMsg};
use shared_types::Coin;

/// Fee calculator bound to one schedule snapshot and one target domain.
#[derive(Debug, Clone, Copy)]
pub struct FeeCalculator<'a> {
    schedule: &'a FeeSchedule,
    domain: &'a Domain,
}

impl<'a> FeeCalculator<'a> {
    /// The domain must already be resolved and validated by the caller.
    pub fn new(schedule: &'a FeeSchedule, domain: &'a Domain) -> Self {
        Self { schedule, domain }
    }

    /// Fee for `msg`, in the schedule's denomination.
    pub fn get_fee(&self, msg: &NameServiceMsg) -> Coin {
        let amount = self.base_amount(msg).max(self.schedule.default_fee);
        Coin::new(self.schedule.fee_denom.clone(), amount)
    }

    fn base_amount(&self, msg: &NameServiceMsg) -> u128 {
        let s = self.schedule;
        match msg {
            NameServiceMsg::RegisterDomain { .. } => self.register_domain(),
            NameServiceMsg::RegisterAccount { .. } => {
                self.by_tier(s.register_account_closed, s.register_account_open)
            }
            NameServiceMsg::RenewDomain { .. } => {
                self.by_tier(s.renew_domain_closed, s.renew_domain_open)
            }
            NameServiceMsg::RenewAccount { .. } => {
                self.by_tier(s.renew_account_closed, s.renew_account_open)
            }
            NameServiceMsg::TransferDomain { .. } => {
                self.by_tier(s.transfer_domain_closed, s.transfer_domain_open)
            }
            NameServiceMsg::TransferAccount { .. } => {
                self.by_tier(s.transfer_account_closed, s.transfer_account_open)
            }
            NameServiceMsg::ReplaceAccountResources { .. } => s.replace_account_resources,
            NameServiceMsg::AddAccountCertificate { .. } => s.add_account_certificate,
            NameServiceMsg::DeleteAccountCertificate { .. } => s.delete_account_certificate,
            NameServiceMsg::SetAccountMetadata { .. } => s.set_account_metadata,
            NameServiceMsg::DeleteDomain { .. } | NameServiceMsg::DeleteAccount { .. } => {
                s.default_fee
            }
        }
    }

    fn register_domain(&self) -> u128 {
        let fee = self.schedule.register_domain_fee(self.domain.name_length());
        if self.domain.domain_type.is_open() {
            fee.saturating_mul(self.schedule.register_open_domain_multiplier)
        } else {
            fee
        }
    }

    fn by_tier(&self, closed: u128, open: u128) -> u128 {
        match self.domain.domain_type {
            DomainType::Closed => closed,
            DomainType::Open => open,
        }
    }
}
