//! Integration tests for the /orders surface, including the
//! foreign-key behavior the database enforces.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

/// Creates one user and one product, returning their ids.
async fn seed_refs(app: &helpers::TestApp) -> (i64, i64) {
    let user = app
        .post(
            "/users",
            json!({
                "first_name": "Ann",
                "last_name": "Lee",
                "email": "ann@example.com",
                "password": "x"
            }),
        )
        .await;
    assert_eq!(user.status, StatusCode::OK);
    let product = app
        .post(
            "/products",
            json!({"name": "lamp", "description": "A small desk lamp", "price": 120}),
        )
        .await;
    assert_eq!(product.status, StatusCode::OK);
    (
        user.body["id"].as_i64().expect("user id"),
        product.body["id"].as_i64().expect("product id"),
    )
}

#[tokio::test]
async fn create_and_fetch_order() {
    let app = helpers::TestApp::new().await;
    let (user_id, product_id) = seed_refs(&app).await;

    let created = app
        .post(
            "/orders",
            json!({
                "user_id": user_id,
                "product_id": product_id,
                "order_date": "2026-03-05",
                "status": "processed"
            }),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["user_id"], user_id);
    assert_eq!(created.body["product_id"], product_id);
    assert_eq!(created.body["order_date"], "2026-03-05");
    assert_eq!(created.body["status"], "processed");

    let fetched = app.get("/orders/1").await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

#[tokio::test]
async fn order_status_update_keeps_other_fields() {
    let app = helpers::TestApp::new().await;
    let (user_id, product_id) = seed_refs(&app).await;
    app.post(
        "/orders",
        json!({
            "user_id": user_id,
            "product_id": product_id,
            "order_date": "2026-03-05",
            "status": "processed"
        }),
    )
    .await;

    let updated = app.put("/orders/1", json!({"status": "delivered"})).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["status"], "delivered");
    assert_eq!(updated.body["order_date"], "2026-03-05");
    assert_eq!(updated.body["user_id"], user_id);
}

#[tokio::test]
async fn dangling_references_are_rejected() {
    let app = helpers::TestApp::new().await;

    let created = app
        .post(
            "/orders",
            json!({
                "user_id": 41,
                "product_id": 42,
                "order_date": "2026-03-05",
                "status": "processed"
            }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn deleting_a_referenced_user_is_blocked() {
    let app = helpers::TestApp::new().await;
    let (user_id, product_id) = seed_refs(&app).await;
    app.post(
        "/orders",
        json!({
            "user_id": user_id,
            "product_id": product_id,
            "order_date": "2026-03-05",
            "status": "processed"
        }),
    )
    .await;

    let blocked = app.delete(&format!("/users/{user_id}")).await;
    assert_eq!(blocked.status, StatusCode::CONFLICT);

    // The user is still there, as is the order.
    assert_eq!(app.get(&format!("/users/{user_id}")).await.status, StatusCode::OK);
    assert_eq!(app.get("/orders/1").await.status, StatusCode::OK);
}

#[tokio::test]
async fn delete_order_then_get_is_404() {
    let app = helpers::TestApp::new().await;
    let (user_id, product_id) = seed_refs(&app).await;
    app.post(
        "/orders",
        json!({
            "user_id": user_id,
            "product_id": product_id,
            "order_date": "2026-03-05",
            "status": "processed"
        }),
    )
    .await;

    let deleted = app.delete("/orders/1").await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["detail"], "Order deleted");

    let gone = app.get("/orders/1").await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["detail"], "Order not found");
}

#[tokio::test]
async fn malformed_order_date_is_rejected() {
    let app = helpers::TestApp::new().await;
    let (user_id, product_id) = seed_refs(&app).await;

    let response = app
        .post(
            "/orders",
            json!({
                "user_id": user_id,
                "product_id": product_id,
                "order_date": "tomorrow",
                "status": "processed"
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}
