//! Control-panel URL builder.

use serde::{Deserialize, Serialize};

use digitalproducts_core::Handle;

/// Builds absolute control-panel paths: `/{cp_trigger}/{plugin}/{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpUrls {
    cp_trigger: String,
    plugin_handle: String,
}

impl CpUrls {
    pub fn new(cp_trigger: impl Into<String>, plugin_handle: impl Into<String>) -> Self {
        Self {
            cp_trigger: cp_trigger.into().trim_matches('/').to_string(),
            plugin_handle: plugin_handle.into().trim_matches('/').to_string(),
        }
    }

    /// URL of a plugin-relative path.
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_matches('/');
        if path.is_empty() {
            format!("/{}/{}", self.cp_trigger, self.plugin_handle)
        } else {
            format!("/{}/{}/{}", self.cp_trigger, self.plugin_handle, path)
        }
    }

    /// Products index, optionally scoped to one product type.
    pub fn products(&self, handle: Option<&Handle>) -> String {
        match handle {
            Some(h) => self.url(&format!("products/{h}")),
            None => self.url("products"),
        }
    }

    /// Dedicated creation page for a product type.
    pub fn new_product(&self, handle: &Handle) -> String {
        self.url(&format!("products/{handle}/new"))
    }
}
