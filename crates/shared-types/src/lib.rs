//! # Shared Types Crate
//!
//! Primitives shared by every subsystem that moves value or names accounts.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address` and `Coin` are defined once here.
//! - **Checked Arithmetic**: coin math never wraps; overflow and denomination
//!   mismatches surface as [`CoinError`].

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
