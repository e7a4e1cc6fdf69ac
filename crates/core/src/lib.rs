//! `digitalproducts-core` — shared building blocks for the digital products catalog.
//!
//! This crate contains **pure domain** primitives (no HTTP, no UI, no storage).

pub mod error;
pub mod handle;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use handle::{Handle, SiteHandle};
pub use id::{ElementId, ProductTypeId};
pub use value_object::ValueObject;
