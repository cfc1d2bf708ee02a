//! Router-level checks that never reach the database.
//!
//! The pool is created lazily, so any request that fails validation before
//! touching Postgres can be exercised without a server.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use shop_backend::{app::build_app, db::create_orm_conn, state::AppState};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://postgres@127.0.0.1:1/unused")
        .expect("lazy pool");
    let orm = create_orm_conn(&pool);
    build_app(AppState { pool, orm })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn health_route_is_mounted_at_root() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(offline_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn unknown_path_returns_json_not_found() {
    let request = Request::get("/api/nowhere").body(Body::empty()).unwrap();
    let (status, body) = send(offline_app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    assert_eq!(body["data"]["path"], "/api/nowhere");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let response = offline_app().oneshot(request).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn incoming_request_id_is_echoed() {
    let request = Request::get("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = offline_app().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn checkout_with_no_items_is_rejected() {
    let request = post_json("/api/checkout", json!({ "user_id": 1, "items": [] }));
    let (status, body) = send(offline_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["error"], "Bad Request items must not be empty");
}

#[tokio::test]
async fn checkout_with_zero_quantity_is_rejected() {
    let request = post_json(
        "/api/checkout",
        json!({ "user_id": 1, "items": [{ "product_id": 7, "quantity": 0 }] }),
    );
    let (status, _) = send(offline_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cart_rejects_non_positive_quantity() {
    let request = post_json("/api/users/1/cart", json!({ "product_id": 3, "quantity": -2 }));
    let (status, _) = send(offline_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn feedback_without_rating_is_rejected() {
    let request = post_json(
        "/api/products/3/feedback",
        json!({ "user_id": 1, "comment": "great" }),
    );
    let (status, _) = send(offline_app(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_numeric_user_id_is_a_client_error() {
    let request = Request::get("/api/orders/abc").body(Body::empty()).unwrap();
    let response = offline_app().oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}
