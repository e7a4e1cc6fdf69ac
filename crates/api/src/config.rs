//! Server configuration from environment variables.

use std::net::SocketAddr;

use anyhow::Context;

use digitalproducts_routes::CpUrls;

pub const BIND_VAR: &str = "DIGITALPRODUCTS_BIND";
pub const CP_TRIGGER_VAR: &str = "DIGITALPRODUCTS_CP_TRIGGER";
pub const PLUGIN_HANDLE_VAR: &str = "DIGITALPRODUCTS_PLUGIN_HANDLE";

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_CP_TRIGGER: &str = "admin";
pub const DEFAULT_PLUGIN_HANDLE: &str = "commerce-digitalproducts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub cp_trigger: String,
    pub plugin_handle: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_raw = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse()
            .with_context(|| format!("{BIND_VAR} is not a socket address: {bind_raw:?}"))?;

        let cp_trigger = lookup(CP_TRIGGER_VAR).unwrap_or_else(|| {
            tracing::debug!("{CP_TRIGGER_VAR} not set; using {DEFAULT_CP_TRIGGER:?}");
            DEFAULT_CP_TRIGGER.to_string()
        });
        let plugin_handle = lookup(PLUGIN_HANDLE_VAR).unwrap_or_else(|| DEFAULT_PLUGIN_HANDLE.to_string());

        let cp_trigger = cp_trigger.trim_matches('/').to_string();
        let plugin_handle = plugin_handle.trim_matches('/').to_string();
        anyhow::ensure!(!cp_trigger.is_empty(), "{CP_TRIGGER_VAR} must not be empty");
        anyhow::ensure!(!plugin_handle.is_empty(), "{PLUGIN_HANDLE_VAR} must not be empty");

        Ok(Self { bind, cp_trigger, plugin_handle })
    }

    pub fn urls(&self) -> CpUrls {
        CpUrls::new(&self.cp_trigger, &self.plugin_handle)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cp_trigger: DEFAULT_CP_TRIGGER.to_string(),
            plugin_handle: DEFAULT_PLUGIN_HANDLE.to_string(),
        }
    }
}
