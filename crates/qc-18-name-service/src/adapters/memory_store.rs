//! In-Memory Domain Store
//!
//! Implements `DomainStore` over ordered maps plus a per-domain key index
//! that preserves account insertion order.

use crate::domain::{Account, Domain, NameServiceError};
use crate::ports::outbound::DomainStore;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Default)]
struct StoreState {
    domains: BTreeMap<String, Domain>,
    accounts: BTreeMap<(String, String), Account>,
    /// domain -> account names in insertion order
    index: BTreeMap<String, Vec<String>>,
}

/// In-memory domain and account storage.
///
/// Enforces that an account never outlives its domain: accounts can only be
/// inserted under an existing domain, and removing a domain removes its
/// accounts and index.
#[derive(Default)]
pub struct InMemoryDomainStore {
    state: RwLock<StoreState>,
}

impl InMemoryDomainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new domain.
    pub fn insert_domain(&self, domain: Domain) -> Result<(), NameServiceError> {
        let mut state = self.state.write();
        if state.domains.contains_key(&domain.name) {
            return Err(NameServiceError::InvalidRequest(format!(
                "domain {} already exists",
                domain.name
            )));
        }
        debug!("[qc-18] Inserting domain {}", domain.name);
        state.index.insert(domain.name.clone(), Vec::new());
        state.domains.insert(domain.name.clone(), domain);
        Ok(())
    }

    /// Insert a new account under an existing domain.
    pub fn insert_account(&self, account: Account) -> Result<(), NameServiceError> {
        let mut state = self.state.write();
        if !state.domains.contains_key(&account.domain) {
            return Err(NameServiceError::DomainNotFound {
                name: account.domain.clone(),
            });
        }
        let key = (account.domain.clone(), account.name.clone());
        if state.accounts.contains_key(&key) {
            return Err(NameServiceError::InvalidRequest(format!(
                "account {}*{} already exists",
                account.name, account.domain
            )));
        }

        debug!(
            "[qc-18] Inserting account {}*{}",
            account.name, account.domain
        );
        state
            .index
            .entry(account.domain.clone())
            .or_default()
            .push(account.name.clone());
        state.accounts.insert(key, account);
        Ok(())
    }

    /// Remove an account, keeping the order of the remaining keys.
    pub fn remove_account(&self, domain: &str, name: &str) -> Result<Account, NameServiceError> {
        let mut state = self.state.write();
        let account = state
            .accounts
            .remove(&(domain.to_string(), name.to_string()))
            .ok_or_else(|| NameServiceError::AccountNotFound {
                domain: domain.to_string(),
                name: name.to_string(),
            })?;
        if let Some(keys) = state.index.get_mut(domain) {
            keys.retain(|key| key != name);
        }
        Ok(account)
    }

    /// Remove a domain together with all of its accounts.
    pub fn remove_domain(&self, name: &str) -> Result<Domain, NameServiceError> {
        let mut state = self.state.write();
        let domain = state
            .domains
            .remove(name)
            .ok_or_else(|| NameServiceError::DomainNotFound {
                name: name.to_string(),
            })?;
        let keys = state.index.remove(name).unwrap_or_default();
        for key in &keys {
            state.accounts.remove(&(name.to_string(), key.clone()));
        }
        debug!(
            "[qc-18] Removed domain {} and {} accounts",
            name,
            keys.len()
        );
        Ok(domain)
    }

    /// Number of accounts across all domains.
    pub fn account_count(&self) -> usize {
        self.state.read().accounts.len()
    }
}

impl DomainStore for InMemoryDomainStore {
    fn get_domain(&self, name: &str) -> Result<Option<Domain>, NameServiceError> {
        Ok(self.state.read().domains.get(name).cloned())
    }

    fn get_account(&self, domain: &str, name: &str) -> Result<Option<Account>, NameServiceError> {
        Ok(self
            .state
            .read()
            .accounts
            .get(&(domain.to_string(), name.to_string()))
            .cloned())
    }

    fn get_account_keys_in_domain(&self, domain: &str) -> Result<Vec<String>, NameServiceError> {
        Ok(self
            .state
            .read()
            .index
            .get(domain)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainType;

    const OWNER: [u8; 20] = [1u8; 20];

    fn store_with_domain(name: &str) -> InMemoryDomainStore {
        let store = InMemoryDomainStore::new();
        store
            .insert_domain(Domain::new(name, OWNER, DomainType::Closed))
            .unwrap();
        store
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let store = store_with_domain("alice");
        for name in ["zeta", "alpha", "mid"] {
            store.insert_account(Account::new("alice", name, OWNER)).unwrap();
        }
        let keys = store.get_account_keys_in_domain("alice").unwrap();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_account_requires_domain() {
        let store = InMemoryDomainStore::new();
        let result = store.insert_account(Account::new("ghost", "a1", OWNER));
        assert!(matches!(result, Err(NameServiceError::DomainNotFound { .. })));
    }

    #[test]
    fn test_duplicate_account_rejected() {
        let store = store_with_domain("alice");
        store.insert_account(Account::new("alice", "a1", OWNER)).unwrap();
        let result = store.insert_account(Account::new("alice", "a1", OWNER));
        assert!(matches!(result, Err(NameServiceError::InvalidRequest(_))));
    }

    #[test]
    fn test_duplicate_domain_rejected() {
        let store = store_with_domain("alice");
        let result = store.insert_domain(Domain::new("alice", OWNER, DomainType::Open));
        assert!(result.is_err());
    }

    #[test]
    fn test_remove_account_keeps_order() {
        let store = store_with_domain("alice");
        for name in ["a1", "a2", "a3"] {
            store.insert_account(Account::new("alice", name, OWNER)).unwrap();
        }
        store.remove_account("alice", "a2").unwrap();
        assert_eq!(
            store.get_account_keys_in_domain("alice").unwrap(),
            vec!["a1", "a3"]
        );
        assert!(store.get_account("alice", "a2").unwrap().is_none());
    }

    #[test]
    fn test_remove_domain_cascades() {
        let store = store_with_domain("alice");
        store.insert_account(Account::new("alice", "a1", OWNER)).unwrap();
        store.insert_account(Account::new("alice", "a2", OWNER)).unwrap();

        store.remove_domain("alice").unwrap();

        assert!(store.get_domain("alice").unwrap().is_none());
        assert!(store.get_account("alice", "a1").unwrap().is_none());
        assert!(store.get_account_keys_in_domain("alice").unwrap().is_empty());
        assert_eq!(store.account_count(), 0);
    }

    #[test]
    fn test_unknown_domain_has_no_keys() {
        let store = InMemoryDomainStore::new();
        assert!(store.get_account_keys_in_domain("nobody").unwrap().is_empty());
    }
}
