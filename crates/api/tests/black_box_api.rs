use std::net::SocketAddr;

use digitalproducts_api::ServerConfig;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let config = ServerConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 0)),
            ..ServerConfig::default()
        };
        let app = digitalproducts_api::app::build_app(&config);
        let listener = tokio::net::TcpListener::bind(config.bind)
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn lists_rules_in_registration_order() {
    let srv = TestServer::spawn().await;
    let rules: Vec<serde_json::Value> = reqwest::get(format!("{}/routes", srv.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(rules.len(), 9);
    assert_eq!(rules[0]["pattern"], "commerce-digitalproducts/producttypes/new");
    assert_eq!(rules[8]["handler"], "commerce-digitalproducts/licenses/edit");
}

#[tokio::test]
async fn resolves_product_edit_path_with_typed_params() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!(
        "{}/admin/commerce-digitalproducts/products/software/12/en_gb",
        srv.base_url
    ))
    .await
    .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["handler"], "commerce-digitalproducts/products/edit");
    assert_eq!(body["params"]["productTypeHandle"], "software");
    assert_eq!(body["params"]["productId"], 12);
    assert_eq!(body["params"]["siteHandle"], "en_gb");
}

#[tokio::test]
async fn resolves_license_routes() {
    let srv = TestServer::spawn().await;

    let body: serde_json::Value = reqwest::get(format!("{}/admin/commerce-digitalproducts/licenses/new", srv.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["handler"], "commerce-digitalproducts/licenses/edit");
    assert_eq!(body["params"], json!({}));

    let body: serde_json::Value = reqwest::get(format!("{}/admin/commerce-digitalproducts/licenses/9", srv.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["params"]["licenseId"], 9);
}

#[tokio::test]
async fn unknown_paths_are_json_404s() {
    let srv = TestServer::spawn().await;

    for path in [
        "/admin/commerce-digitalproducts/producttypes/abc",
        "/admin/commerce-digitalproducts/nothing",
        "/elsewhere/commerce-digitalproducts/licenses/new",
    ] {
        let res = reqwest::get(format!("{}{}", srv.base_url, path)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "not_found");
    }
}

#[tokio::test]
async fn computes_create_affordance_for_embedded_listing() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/admin/commerce-digitalproducts/panel/affordance", srv.base_url))
        .json(&json!({
            "context": "embedded",
            "selectedHandle": "software",
            "sources": [
                { "key": "*", "label": "All products" },
                { "key": "productType:1", "handle": "software", "label": "Software", "editable": true },
                { "key": "productType:2", "handle": "fonts", "label": "Fonts", "editable": true }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["primary"]["label"], "New Software product");
    assert_eq!(body["primary"]["trigger"], json!({ "kind": "dialog", "target": 1 }));
    assert_eq!(body["menu"].as_array().unwrap().len(), 1);
    assert_eq!(body["menu"][0]["label"], "New Fonts product");
}

#[tokio::test]
async fn affordance_is_null_without_editable_types() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/admin/commerce-digitalproducts/panel/affordance", srv.base_url))
        .json(&json!({
            "context": "index",
            "sources": [{ "key": "productType:1", "handle": "software", "label": "Software" }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn affordance_rejects_malformed_requests() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let url = format!("{}/admin/commerce-digitalproducts/panel/affordance", srv.base_url);

    let res = client.post(&url).json(&json!({ "context": "sideways" })).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .post(&url)
        .json(&json!({ "context": "index", "selectedHandle": "9lives" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}
