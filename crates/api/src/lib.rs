//! Admin server: installs the control-panel route table and serves it.

pub mod app;
pub mod config;

pub use config::ServerConfig;
