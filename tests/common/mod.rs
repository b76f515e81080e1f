#![allow(dead_code)]

use axum::extract::Request;
use axum::{Router, ServiceExt, routing::get};
use axum_test::TestServer;
use credit_card_api::api::handlers::health_handler;
use credit_card_api::api::routes::api_routes;
use credit_card_api::routes::app_router;
use credit_card_api::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_customer(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO customer (first_name, last_name, email) VALUES ('John', 'Doe', $1) RETURNING customer_id",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_card(pool: &PgPool, customer_id: i64, card_number: &str) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO creditcard
            (customer_id, card_number, expiration_date, cvv, card_type, credit_limit, current_balance)
        VALUES ($1, $2, DATE '2025-12-31', '123', 'Credit', 5000.0, 1000.0)
        RETURNING card_id
        "#,
    )
    .bind(customer_id)
    .bind(card_number)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_cards(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM creditcard")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(create_test_state(pool));

    TestServer::new(app).unwrap()
}

/// Serves the full application router, middleware included.
pub fn make_app_server(pool: PgPool) -> TestServer {
    let app = app_router(create_test_state(pool));

    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}
