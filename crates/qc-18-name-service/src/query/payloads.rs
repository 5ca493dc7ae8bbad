//! # Query Payloads
//!
//! Response bodies returned by the query router, serialized as indented JSON.

use crate::domain::{Account, Domain, FeeSchedule};
use serde::{Deserialize, Serialize};

/// Query name: look up one domain. Argument: the domain name as a path segment.
pub const QUERY_DOMAIN: &str = "domain";

/// Query name: page through a domain's accounts. Argument: JSON `QueryAccountsInDomain`.
pub const QUERY_ACCOUNTS_IN_DOMAIN: &str = "accountsInDomain";

/// Query name: current fee schedule. No argument.
pub const QUERY_FEES: &str = "fees";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDomainResponse {
    pub domain: Domain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryAccountsInDomainResponse {
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFeesResponse {
    pub fees: FeeSchedule,
}
