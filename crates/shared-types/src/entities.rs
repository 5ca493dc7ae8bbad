//! # Core Entities
//!
//! Value types every subsystem agrees on.
//!
//! - **Identity**: `Address`
//! - **Value**: `Coin`

use crate::errors::CoinError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte account address.
pub type Address = [u8; 20];

/// Render an address as `0x`-prefixed hex for logs and error messages.
pub fn address_to_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// A single-denomination amount of value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination (e.g. `tiov`).
    pub denom: String,
    /// Amount in base units.
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// A zero amount of `denom`.
    pub fn zero(denom: impl Into<String>) -> Self {
        Self::new(denom, 0)
    }

    /// Add two coins of the same denomination.
    pub fn checked_add(&self, other: &Coin) -> Result<Coin, CoinError> {
        self.ensure_same_denom(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| CoinError::Overflow {
                denom: self.denom.clone(),
                amount: self.amount,
                added: other.amount,
            })?;
        Ok(Coin::new(self.denom.clone(), amount))
    }

    /// Subtract `other` from `self`; fails rather than going negative.
    pub fn checked_sub(&self, other: &Coin) -> Result<Coin, CoinError> {
        self.ensure_same_denom(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| CoinError::Underflow {
                denom: self.denom.clone(),
                available: self.amount,
                required: other.amount,
            })?;
        Ok(Coin::new(self.denom.clone(), amount))
    }

    fn ensure_same_denom(&self, other: &Coin) -> Result<(), CoinError> {
        if self.denom != other.denom {
            return Err(CoinError::DenomMismatch {
                left: self.denom.clone(),
                right: other.denom.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add() {
        let a = Coin::new("tiov", 10);
        let b = Coin::new("tiov", 5);
        assert_eq!(a.checked_add(&b).unwrap(), Coin::new("tiov", 15));
    }

    #[test]
    fn test_checked_add_overflow() {
        let a = Coin::new("tiov", u128::MAX);
        let b = Coin::new("tiov", 1);
        assert!(matches!(a.checked_add(&b), Err(CoinError::Overflow { .. })));
    }

    #[test]
    fn test_checked_sub_underflow() {
        let a = Coin::new("tiov", 3);
        let b = Coin::new("tiov", 4);
        assert!(matches!(
            a.checked_sub(&b),
            Err(CoinError::Underflow {
                available: 3,
                required: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_denom_mismatch() {
        let a = Coin::new("tiov", 3);
        let b = Coin::new("uatom", 1);
        assert!(matches!(
            a.checked_sub(&b),
            Err(CoinError::DenomMismatch { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coin::new("tiov", 42).to_string(), "42tiov");
    }

    #[test]
    fn test_address_to_hex() {
        let addr = [0xABu8; 20];
        let rendered = address_to_hex(&addr);
        assert!(rendered.starts_with("0xabab"));
        assert_eq!(rendered.len(), 42);
    }

    #[test]
    fn test_coin_json_shape() {
        let json = serde_json::to_value(Coin::new("tiov", 7)).unwrap();
        assert_eq!(json["denom"], "tiov");
        assert_eq!(json["amount"], 7);
    }
}
