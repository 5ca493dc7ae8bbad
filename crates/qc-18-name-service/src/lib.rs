//! # QC-18 Name Service
//!
//! Domain fees and paginated account queries.
//!
//! **Subsystem ID:** 18
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Compute and collect the fee of every name-service transaction
//!   deterministically, so every validating node charges the same amount
//! - Serve read-only queries over domains and the accounts registered in them,
//!   paginated over an insertion-ordered key index
//!
//! ## Determinism
//!
//! | Concern | Rule |
//! |---------|------|
//! | Fee amount | Pure function of (schedule snapshot, domain, message) |
//! | Fee transfer | Single all-or-nothing payer → `fee_collector` move |
//! | Page contents | Sliced from keys in insertion order, never hash order |
//! | Errors | Stable classification codes, never retried internally |
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-name-service/
//! ├── domain/          # Domain, Account, FeeSchedule, NameServiceMsg, errors
//! ├── algorithms/      # FeeCalculator, pagination
//! ├── ports/           # NameServiceApi + DomainStore, BankKeeper, FeeScheduleProvider
//! ├── adapters/        # In-memory store, bank and fee schedule
//! ├── query/           # Query router and response payloads
//! ├── config.rs        # NameServiceConfig
//! └── service.rs       # NameService keeper
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod query;
pub mod service;

// Re-exports
pub use adapters::{InMemoryBank, InMemoryDomainStore, StaticFeeSchedule};
pub use algorithms::{page_bounds, paginate, FeeCalculator, PageBounds};
pub use config::{ConfigError, NameServiceConfig, FEE_COLLECTOR_NAME, MODULE_NAME};
pub use domain::{
    Account, Domain, DomainType, ErrorPayload, FeeSchedule, MsgKind, NameServiceError,
    NameServiceMsg, PageRequest, QueryAccountsInDomain, Resource, DEFAULT_PAGE,
    DEFAULT_RESULTS_PER_PAGE,
};
pub use ports::{BankKeeper, DomainStore, FeeScheduleProvider, NameServiceApi};
pub use query::{
    QueryAccountsInDomainResponse, QueryDomainResponse, QueryFeesResponse, QueryRouter,
    QUERY_ACCOUNTS_IN_DOMAIN, QUERY_DOMAIN, QUERY_FEES,
};
pub use service::NameService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
