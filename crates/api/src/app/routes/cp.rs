//! Control-panel path resolution against the installed route table.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::Method, http::StatusCode, http::Uri, response::IntoResponse};

use digitalproducts_routes::RouteTable;

use crate::app::CpPrefix;
use crate::app::errors;

pub async fn resolve(
    Extension(table): Extension<Arc<RouteTable>>,
    Extension(prefix): Extension<CpPrefix>,
    method: Method,
    uri: Uri,
) -> axum::response::Response {
    if method != Method::GET {
        return errors::json_error(StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed", "only GET is routed");
    }

    let path = uri.path();
    let resolved = path
        .strip_prefix('/')
        .and_then(|p| p.strip_prefix(prefix.cp_trigger.as_str()))
        .and_then(|p| p.strip_prefix('/'))
        .and_then(|cp_path| table.resolve_view(cp_path));

    match resolved {
        Some(view) => {
            tracing::debug!(path, handler = %view.handler, "resolved control-panel path");
            (StatusCode::OK, Json(view)).into_response()
        }
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("no route for {path} under /{}/{}", prefix.cp_trigger, prefix.plugin_handle),
        ),
    }
}
