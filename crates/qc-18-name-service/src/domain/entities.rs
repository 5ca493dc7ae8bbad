//! # Domain Entities
//!
//! Records owned by the Name Service: domains and the accounts registered
//! under them.
//!
//! An account is identified by the `(domain, name)` pair and never outlives
//! its domain. The empty account name denotes the domain's own account.

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Registration policy of a domain. Drives the closed/open fee tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DomainType {
    /// Only the domain admin may register accounts.
    #[default]
    Closed,
    /// Anyone may register accounts.
    Open,
}

impl DomainType {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// A named ownership scope under which accounts are registered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Unique domain name.
    pub name: String,
    /// Domain administrator.
    pub admin: Address,
    /// Expiration as unix seconds.
    pub valid_until: u64,
    /// Registration policy.
    #[serde(rename = "type")]
    pub domain_type: DomainType,
    /// Optional broker that registered the domain.
    pub broker: Option<Address>,
}

impl Domain {
    pub fn new(name: impl Into<String>, admin: Address, domain_type: DomainType) -> Self {
        Self {
            name: name.into(),
            admin,
            valid_until: 0,
            domain_type,
            broker: None,
        }
    }

    /// Length of the name in characters, as used for fee tiering.
    pub fn name_length(&self) -> usize {
        self.name.chars().count()
    }
}

/// A blockchain resource an account points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource identifier (e.g. a chain id).
    pub uri: String,
    /// The address on that resource.
    pub resource: String,
}

/// An identifier registered within a domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Parent domain name.
    pub domain: String,
    /// Account name, unique within the domain.
    pub name: String,
    /// Owner of the account.
    pub owner: Address,
    /// Expiration as unix seconds.
    pub valid_until: u64,
    /// Attached resources.
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Opaque certificates.
    #[serde(default)]
    pub certificates: Vec<Vec<u8>>,
    /// Optional broker that registered the account.
    pub broker: Option<Address>,
    /// Free-form metadata pointer.
    #[serde(default)]
    pub metadata_uri: String,
}

impl Account {
    pub fn new(domain: impl Into<String>, name: impl Into<String>, owner: Address) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            owner,
            valid_until: 0,
            resources: Vec::new(),
            certificates: Vec::new(),
            broker: None,
            metadata_uri: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_type_default_is_closed() {
        assert_eq!(DomainType::default(), DomainType::Closed);
        assert!(!DomainType::Closed.is_open());
        assert!(DomainType::Open.is_open());
    }

    #[test]
    fn test_name_length_counts_chars() {
        let domain = Domain::new("çà", [1u8; 20], DomainType::Closed);
        assert_eq!(domain.name_length(), 2);
    }

    #[test]
    fn test_domain_json_uses_type_field() {
        let domain = Domain::new("alice", [1u8; 20], DomainType::Open);
        let json = serde_json::to_value(&domain).unwrap();
        assert_eq!(json["type"], "open");
        assert_eq!(json["name"], "alice");
    }

    #[test]
    fn test_account_new_is_bare() {
        let account = Account::new("alice", "a1", [2u8; 20]);
        assert!(account.resources.is_empty());
        assert!(account.certificates.is_empty());
        assert!(account.metadata_uri.is_empty());
    }
}
