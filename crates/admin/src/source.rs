//! Navigation sources and their product-type projection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use digitalproducts_core::id::parse_digits;
use digitalproducts_core::{Handle, ProductTypeId};

/// Prefix of navigation keys that denote a product type.
pub const PRODUCT_TYPE_KEY_PREFIX: &str = "productType:";

/// A selectable grouping shown by the host admin shell. Read-only to the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDescriptor {
    pub key: String,
    #[serde(default)]
    pub handle: Option<String>,
    pub label: String,
    #[serde(default)]
    pub editable: bool,
    /// Explicit product-type id, when the host exposes one.
    #[serde(default)]
    pub type_id: Option<ProductTypeId>,
}

impl SourceDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), handle: None, label: label.into(), editable: false, type_id: None }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn with_type_id(mut self, id: impl Into<ProductTypeId>) -> Self {
        self.type_id = Some(id.into());
        self
    }

    /// Product-type suffix of the key, if the key has the `productType:{x}` shape.
    pub fn product_type_suffix(&self) -> Option<&str> {
        let suffix = self.key.strip_prefix(PRODUCT_TYPE_KEY_PREFIX)?;
        let well_formed = !suffix.is_empty()
            && suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        well_formed.then_some(suffix)
    }
}

/// Why a source is not a product type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotAProductTypeSource {
    #[error("source key {0:?} is not a product-type key")]
    KeyMismatch(String),
    #[error("source {key:?} has no valid handle")]
    InvalidHandle { key: String },
}

/// UI-facing projection of a product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeSource {
    /// `None` when neither the host nor the key carries a numeric id.
    pub id: Option<ProductTypeId>,
    pub key: String,
    pub handle: Handle,
    pub name: String,
    pub editable: bool,
}

impl TryFrom<&SourceDescriptor> for ProductTypeSource {
    type Error = NotAProductTypeSource;

    fn try_from(source: &SourceDescriptor) -> Result<Self, Self::Error> {
        let suffix = source
            .product_type_suffix()
            .ok_or_else(|| NotAProductTypeSource::KeyMismatch(source.key.clone()))?;

        let raw_handle = source.handle.as_deref().unwrap_or(suffix);
        let handle = Handle::parse(raw_handle)
            .map_err(|_| NotAProductTypeSource::InvalidHandle { key: source.key.clone() })?;

        let id = source.type_id.or_else(|| parse_digits(suffix).map(ProductTypeId::new));

        Ok(Self {
            id,
            key: source.key.clone(),
            handle,
            name: source.label.clone(),
            editable: source.editable,
        })
    }
}

/// Parse every product-type source, dropping the rest.
pub fn product_types(sources: &[SourceDescriptor]) -> Vec<ProductTypeSource> {
    sources
        .iter()
        .filter_map(|s| match ProductTypeSource::try_from(s) {
            Ok(pt) => Some(pt),
            Err(reason) => {
                tracing::debug!(key = %s.key, %reason, "ignoring source");
                None
            }
        })
        .collect()
}
