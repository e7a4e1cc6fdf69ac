//! Strongly-typed identifiers used across the catalog.
//!
//! Identifiers are the host's positive integer element ids. Text forms are
//! all-digit; anything else is rejected rather than coerced.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductTypeId(u64);

/// Identifier of any persisted host element (product, license, ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

/// Parse an all-digit string into a `u64`.
///
/// Signs, whitespace and empty input are rejected (unlike `u64::from_str`,
/// which accepts a leading `+`).
pub fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

macro_rules! impl_numeric_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_digits(s)
                    .map(Self)
                    .ok_or_else(|| DomainError::invalid_id(format!("{}: {:?}", $name, s)))
            }
        }
    };
}

impl_numeric_newtype!(ProductTypeId, "ProductTypeId");
impl_numeric_newtype!(ElementId, "ElementId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_digit_ids() {
        let id: ProductTypeId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_signed_or_non_digit_ids() {
        for raw in ["", "+4", "-4", "4a", " 4", "shirts"] {
            let err = raw.parse::<ElementId>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidId(_)), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn rejects_overflowing_ids() {
        assert!(parse_digits("99999999999999999999999").is_none());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ElementId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
