//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP handlers (one file per area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get, routing::post};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use digitalproducts_routes::RouteTable;

use crate::config::ServerConfig;

pub mod dto;
pub mod errors;
pub mod routes;

/// Control-panel prefixes the handlers need.
#[derive(Debug, Clone)]
pub struct CpPrefix {
    pub cp_trigger: String,
    pub plugin_handle: String,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The route table is installed here, once, and shared read-only.
pub fn build_app(config: &ServerConfig) -> Router {
    let table = Arc::new(RouteTable::install(config.plugin_handle.clone()));
    let prefix = CpPrefix { cp_trigger: config.cp_trigger.clone(), plugin_handle: config.plugin_handle.clone() };

    let panel_path = format!("/{}/{}/panel/affordance", config.cp_trigger, config.plugin_handle);

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/routes", get(routes::system::list_routes))
        .route(&panel_path, post(routes::panel::create_affordance))
        .fallback(routes::cp::resolve)
        .layer(Extension(table))
        .layer(Extension(prefix))
        .layer(Extension(config.urls()))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
