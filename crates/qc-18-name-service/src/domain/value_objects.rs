//! # Value Objects
//!
//! Immutable inputs to the Name Service algorithms: the fee schedule and the
//! paginated account query.

use super::errors::NameServiceError;
use serde::{Deserialize, Serialize};

/// Page size applied when a query leaves `results_per_page` unset or non-positive.
pub const DEFAULT_RESULTS_PER_PAGE: usize = 100;

/// Page applied when a query leaves `offset` unset or non-positive. Pages are 1-indexed.
pub const DEFAULT_PAGE: usize = 1;

/// Versioned fee table, read-only from the Name Service's point of view.
///
/// Amounts are in base units of `fee_denom`. Every computed fee is floored
/// at `default_fee`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Schedule version, bumped by the configuration module on every change.
    pub version: u64,
    /// Denomination fees are paid in.
    pub fee_denom: String,
    /// Minimum fee for any message.
    pub default_fee: u128,

    // Domain registration, by name length
    pub register_domain_1: u128,
    pub register_domain_2: u128,
    pub register_domain_3: u128,
    pub register_domain_4: u128,
    pub register_domain_5: u128,
    /// Names of six characters or more.
    pub register_domain_default: u128,
    /// Applied on top of the length fee for open domains.
    pub register_open_domain_multiplier: u128,

    pub register_account_closed: u128,
    pub register_account_open: u128,
    pub transfer_domain_closed: u128,
    pub transfer_domain_open: u128,
    pub transfer_account_closed: u128,
    pub transfer_account_open: u128,
    pub renew_domain_closed: u128,
    pub renew_domain_open: u128,
    pub renew_account_closed: u128,
    pub renew_account_open: u128,

    pub replace_account_resources: u128,
    pub add_account_certificate: u128,
    pub delete_account_certificate: u128,
    pub set_account_metadata: u128,
}

impl FeeSchedule {
    /// Check the schedule is usable for fee computation.
    pub fn validate(&self) -> Result<(), NameServiceError> {
        if self.fee_denom.is_empty() {
            return Err(NameServiceError::InvalidFeeSchedule(
                "empty fee denomination".to_string(),
            ));
        }
        if self.default_fee == 0 {
            return Err(NameServiceError::InvalidFeeSchedule(
                "default fee must be positive".to_string(),
            ));
        }
        if self.register_open_domain_multiplier == 0 {
            return Err(NameServiceError::InvalidFeeSchedule(
                "open domain multiplier must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Registration fee for a domain name of `length` characters.
    pub fn register_domain_fee(&self, length: usize) -> u128 {
        match length {
            1 => self.register_domain_1,
            2 => self.register_domain_2,
            3 => self.register_domain_3,
            4 => self.register_domain_4,
            5 => self.register_domain_5,
            _ => self.register_domain_default,
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            version: 1,
            fee_denom: "tiov".to_string(),
            default_fee: 10,
            register_domain_1: 10_000,
            register_domain_2: 5_000,
            register_domain_3: 2_000,
            register_domain_4: 1_000,
            register_domain_5: 500,
            register_domain_default: 250,
            register_open_domain_multiplier: 10,
            register_account_closed: 10,
            register_account_open: 20,
            transfer_domain_closed: 100,
            transfer_domain_open: 200,
            transfer_account_closed: 10,
            transfer_account_open: 20,
            renew_domain_closed: 250,
            renew_domain_open: 500,
            renew_account_closed: 10,
            renew_account_open: 20,
            replace_account_resources: 10,
            add_account_certificate: 50,
            delete_account_certificate: 10,
            set_account_metadata: 15,
        }
    }
}

/// Wire form of the accounts-in-domain query.
///
/// Integer fields are signed so that zero and negative values can be
/// defaulted rather than rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryAccountsInDomain {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub results_per_page: i64,
    /// 1-indexed page number.
    #[serde(default)]
    pub offset: i64,
}

impl QueryAccountsInDomain {
    pub fn new(domain: impl Into<String>, results_per_page: i64, offset: i64) -> Self {
        Self {
            domain: domain.into(),
            results_per_page,
            offset,
        }
    }

    /// Validate with the standard defaults.
    pub fn validate(&self) -> Result<PageRequest, NameServiceError> {
        self.validate_with(DEFAULT_RESULTS_PER_PAGE, DEFAULT_PAGE)
    }

    /// Reject an empty domain and replace non-positive fields with defaults.
    pub fn validate_with(
        &self,
        default_results_per_page: usize,
        default_page: usize,
    ) -> Result<PageRequest, NameServiceError> {
        if self.domain.is_empty() {
            return Err(NameServiceError::InvalidRequest(
                "empty domain name".to_string(),
            ));
        }
        Ok(PageRequest {
            domain: self.domain.clone(),
            results_per_page: positive_or(self.results_per_page, default_results_per_page),
            page: positive_or(self.offset, default_page),
        })
    }
}

fn positive_or(value: i64, default: usize) -> usize {
    if value <= 0 {
        return default;
    }
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// A validated page request. Both numeric fields are at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub domain: String,
    pub results_per_page: usize,
    pub page: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_schedule_default_is_valid() {
        assert!(FeeSchedule::default().validate().is_ok());
    }

    #[test]
    fn test_fee_schedule_rejects_empty_denom() {
        let schedule = FeeSchedule {
            fee_denom: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            schedule.validate(),
            Err(NameServiceError::InvalidFeeSchedule(_))
        ));
    }

    #[test]
    fn test_fee_schedule_rejects_zero_default_fee() {
        let schedule = FeeSchedule {
            default_fee: 0,
            ..Default::default()
        };
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_register_domain_fee_by_length() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.register_domain_fee(1), 10_000);
        assert_eq!(schedule.register_domain_fee(5), 500);
        assert_eq!(schedule.register_domain_fee(6), 250);
        assert_eq!(schedule.register_domain_fee(64), 250);
    }

    #[test]
    fn test_query_defaults_applied() {
        let request = QueryAccountsInDomain::new("bob", 0, 0).validate().unwrap();
        assert_eq!(request.results_per_page, DEFAULT_RESULTS_PER_PAGE);
        assert_eq!(request.page, DEFAULT_PAGE);
    }

    #[test]
    fn test_query_negative_values_defaulted() {
        let request = QueryAccountsInDomain::new("bob", -5, -1).validate().unwrap();
        assert_eq!(request.results_per_page, 100);
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_query_explicit_values_kept() {
        let request = QueryAccountsInDomain::new("alice", 2, 2).validate().unwrap();
        assert_eq!(request.results_per_page, 2);
        assert_eq!(request.page, 2);
        assert_eq!(request.domain, "alice");
    }

    #[test]
    fn test_query_empty_domain_rejected() {
        let result = QueryAccountsInDomain::new("", 10, 1).validate();
        assert!(matches!(result, Err(NameServiceError::InvalidRequest(_))));
    }

    #[test]
    fn test_query_missing_fields_deserialize_to_zero() {
        let query: QueryAccountsInDomain = serde_json::from_str(r#"{"domain":"bob"}"#).unwrap();
        assert_eq!(query.results_per_page, 0);
        assert_eq!(query.offset, 0);
    }
}
