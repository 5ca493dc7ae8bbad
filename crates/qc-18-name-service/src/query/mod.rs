//! # Query Layer
//!
//! Read-only entry point of the Name Service for the host runtime.

pub mod payloads;
pub mod router;

pub use payloads::*;
pub use router::QueryRouter;
