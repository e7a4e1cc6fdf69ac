//! Stateless create-affordance computation for server-rendered listings.

use axum::{Json, extract::Extension, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};

use digitalproducts_admin::compute_affordance;
use digitalproducts_admin::source::product_types;
use digitalproducts_core::Handle;
use digitalproducts_routes::CpUrls;

use crate::app::{dto, errors};

pub async fn create_affordance(
    Extension(urls): Extension<CpUrls>,
    body: Result<Json<dto::AffordanceRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text());
        }
    };

    let selected = match body.selected_handle.map(Handle::parse).transpose() {
        Ok(h) => h,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let types = product_types(&body.sources);
    let affordance = compute_affordance(body.context, &types, selected.as_ref(), &urls);

    (StatusCode::OK, Json(affordance)).into_response()
}
