//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors raised by coin arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinError {
    /// Operands carry different denominations.
    #[error("Denomination mismatch: {left} != {right}")]
    DenomMismatch { left: String, right: String },

    /// Addition overflowed `u128`.
    #[error("Coin overflow: {amount}{denom} + {added}")]
    Overflow {
        denom: String,
        amount: u128,
        added: u128,
    },

    /// Subtraction would go below zero.
    #[error("Insufficient amount: {available}{denom} available, {required} required")]
    Underflow {
        denom: String,
        available: u128,
        required: u128,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_display() {
        let err = CoinError::Underflow {
            denom: "tiov".to_string(),
            available: 5,
            required: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("5tiov"));
        assert!(msg.contains("10"));
    }
}
