//! # Query Router
//!
//! Dispatches read-only queries addressed as `<module>/<query-name>[/<arg>]`
//! to the Name Service.
//!
//! ## Supported Queries
//!
//! - `domain/<name>`: one domain record, exactly one name segment
//! - `accountsInDomain`: one page of accounts, JSON `QueryAccountsInDomain` payload
//! - `fees`: the current fee schedule
//!
//! No handler mutates state; identical ledger state yields identical bytes.

use super::payloads::{
    QueryAccountsInDomainResponse, QueryDomainResponse, QueryFeesResponse,
    QUERY_ACCOUNTS_IN_DOMAIN, QUERY_DOMAIN, QUERY_FEES,
};
use crate::domain::{ErrorPayload, NameServiceError, QueryAccountsInDomain};
use crate::ports::inbound::NameServiceApi;
use serde::Serialize;
use tracing::{debug, error};

/// Query router bound to one Name Service instance.
pub struct QueryRouter<A> {
    api: A,
    module_name: String,
}

impl<A: NameServiceApi> QueryRouter<A> {
    pub fn new(api: A, module_name: impl Into<String>) -> Self {
        Self {
            api,
            module_name: module_name.into(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Route a query and return the serialized response.
    pub fn handle(&self, path: &str, data: &[u8]) -> Result<Vec<u8>, NameServiceError> {
        let mut segments = path.split('/');
        let module = segments.next().unwrap_or_default();
        if module != self.module_name {
            return Err(unknown(path));
        }
        let query = segments.next().unwrap_or_default();
        let args: Vec<&str> = segments.collect();

        debug!("[qc-18] Query {} with {} args", query, args.len());
        match query {
            QUERY_DOMAIN => self.query_domain(&args),
            QUERY_ACCOUNTS_IN_DOMAIN => self.query_accounts_in_domain(data),
            QUERY_FEES => self.query_fees(),
            _ => Err(unknown(path)),
        }
    }

    /// Like [`handle`](Self::handle), but with errors in their wire form.
    ///
    /// Internal errors are logged here, once, with the full error context.
    pub fn respond(&self, path: &str, data: &[u8]) -> Result<Vec<u8>, ErrorPayload> {
        self.handle(path, data).map_err(|err| {
            if err.is_internal() {
                error!("[qc-18] Query {} failed internally: {}", path, err);
            }
            ErrorPayload::from(&err)
        })
    }

    fn query_domain(&self, args: &[&str]) -> Result<Vec<u8>, NameServiceError> {
        let name = match args {
            [name] if !name.is_empty() => *name,
            [] | [_] => {
                return Err(NameServiceError::InvalidRequest(
                    "missing domain name".to_string(),
                ))
            }
            _ => {
                return Err(NameServiceError::InvalidRequest(format!(
                    "expected one domain name, got {} path segments",
                    args.len()
                )))
            }
        };
        let domain = self.api.get_domain(name)?;
        encode(&QueryDomainResponse { domain })
    }

    fn query_accounts_in_domain(&self, data: &[u8]) -> Result<Vec<u8>, NameServiceError> {
        let query: QueryAccountsInDomain = serde_json::from_slice(data)
            .map_err(|err| NameServiceError::InvalidRequest(format!("malformed query: {}", err)))?;
        let accounts = self.api.get_accounts_in_domain(&query)?;
        encode(&QueryAccountsInDomainResponse { accounts })
    }

    fn query_fees(&self) -> Result<Vec<u8>, NameServiceError> {
        let fees = self.api.get_fee_schedule()?;
        encode(&QueryFeesResponse { fees })
    }
}

fn unknown(path: &str) -> NameServiceError {
    NameServiceError::UnknownRequest(format!("unknown name service query: {:?}", path))
}

fn encode<T: Serialize>(response: &T) -> Result<Vec<u8>, NameServiceError> {
    Ok(serde_json::to_vec_pretty(response)?)
}
