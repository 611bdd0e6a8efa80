//! Shared helpers for router integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use receiptkins_axum::{AxumContext, create_router};
use receiptkins_core::RecipeService;
use receiptkins_db::TestDb;

/// Router over an isolated in-memory store, plus handles to inspect it.
pub struct TestApp {
    pub router: Router,
    pub db: TestDb,
    pub static_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = TestDb::new().await.unwrap();
        let static_dir = tempfile::tempdir().unwrap();
        let ctx = AxumContext::new(Arc::new(db.recipe_service()));
        let router = create_router(ctx, static_dir.path());
        Self {
            router,
            db,
            static_dir,
        }
    }
}

/// Router over an arbitrary service (e.g. one backed by a failing repository).
pub fn router_with_service(service: RecipeService, static_dir: &TempDir) -> Router {
    create_router(AxumContext::new(Arc::new(service)), static_dir.path())
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// POST a recipe and return its assigned ID.
pub async fn create_recipe(router: &Router, name: &str, ingredients: &str) -> i64 {
    let body = serde_json::json!({
        "name": name,
        "ingredients": ingredients,
        "algorithm": "Cook it.",
        "author": "Tester",
    })
    .to_string();

    let response = post_json(router, "/api/receipts", &body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    created["id"].as_i64().unwrap()
}
