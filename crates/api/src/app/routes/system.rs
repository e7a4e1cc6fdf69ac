use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use digitalproducts_routes::RouteTable;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Installed rules, in registration order.
pub async fn list_routes(Extension(table): Extension<Arc<RouteTable>>) -> impl IntoResponse {
    let rules: Vec<_> = table
        .rules()
        .into_iter()
        .map(|(pattern, handler)| serde_json::json!({ "pattern": pattern, "handler": handler }))
        .collect();
    Json(rules)
}
