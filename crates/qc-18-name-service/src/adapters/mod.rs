//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports, used by tests and by
//! single-process deployments.

mod fee_schedule;
mod memory_bank;
mod memory_store;

pub use fee_schedule::StaticFeeSchedule;
pub use memory_bank::InMemoryBank;
pub use memory_store::InMemoryDomainStore;
