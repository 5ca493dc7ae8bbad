//! # Algorithms Module
//!
//! Pure, deterministic computations: fee calculation and page slicing.

pub mod fee_calculator;
pub mod pagination;

pub use fee_calculator::FeeCalculator;
pub use pagination::{page_bounds, paginate, PageBounds};
