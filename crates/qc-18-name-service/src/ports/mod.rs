//! # Ports Layer
//!
//! Hexagonal architecture ports (interfaces) for the Name Service.
//!
//! - **Driving Ports (Inbound)**: `NameServiceApi`, consumed by the query
//!   router and transaction handlers
//! - **Driven Ports (Outbound)**: storage, bank and fee-schedule access

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
