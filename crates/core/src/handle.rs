//! Handles: human-chosen, URL-safe slugs identifying product types and sites.
//!
//! Policy: the first character is an ASCII letter, every following character
//! is an ASCII letter, digit or `_`.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Returns `true` if `s` satisfies the handle character policy.
pub fn is_valid_handle(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Handle of a product type (or any other slug-addressed element group).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

/// Handle of a site (locale) the control panel is editing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteHandle(String);

macro_rules! impl_handle_newtype {
    ($t:ident) => {
        impl $t {
            pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
                let raw = raw.into();
                if is_valid_handle(&raw) {
                    Ok(Self(raw))
                } else {
                    Err(DomainError::invalid_handle(raw))
                }
            }

            /// Pure predicate used by route matching.
            pub fn is_valid(s: &str) -> bool {
                is_valid_handle(s)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ValueObject for $t {}

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl PartialEq<str> for $t {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $t {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

impl_handle_newtype!(Handle);
impl_handle_newtype!(SiteHandle);
