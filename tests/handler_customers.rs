mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

fn customer_body(email: &str) -> Value {
    json!({
        "customerId": null,
        "firstName": "John",
        "lastName": "Doe",
        "email": email
    })
}

fn card_body(number: &str) -> Value {
    json!({
        "cardNumber": number,
        "expirationDate": "2025-12-31",
        "cvv": "123",
        "cardType": "Credit",
        "creditLimit": 5000.0,
        "currentBalance": 1000.0
    })
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_customers_list_empty(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/customers").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[sqlx::test]
async fn test_customers_list_includes_cards(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let id = common::create_test_customer(&pool, "list@example.com").await;
    common::create_test_card(&pool, id, "1234567890123456").await;

    let response = server.get("/api/customers").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json.as_array().unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["customerId"], id);
    assert_eq!(items[0]["email"], "list@example.com");
    assert_eq!(items[0]["creditCards"][0]["cardNumber"], "1234567890123456");
    assert_eq!(items[0]["creditCards"][0]["customerId"], id);
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_customer_success(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let id = common::create_test_customer(&pool, "get@example.com").await;

    let response = server.get(&format!("/api/customers/{}", id)).await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["customerId"], id);
    assert_eq!(json["firstName"], "John");
    assert_eq!(json["lastName"], "Doe");
    assert_eq!(json["creditCards"], json!([]));
}

#[sqlx::test]
async fn test_get_customer_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/customers/999999").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_get_customer_invalid_id(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/customers/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid path parameter");
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_customer_success(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/customers")
        .json(&customer_body("john.doe@example.com"))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert!(json["customerId"].as_i64().unwrap() > 0);
    assert_eq!(json["email"], "john.doe@example.com");
    assert_eq!(json["creditCards"], json!([]));
}

#[sqlx::test]
async fn test_create_customer_with_cards(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let mut body = customer_body("nested@example.com");
    body["creditCards"] = json!([card_body("1111"), card_body("2222")]);

    let response = server.post("/api/customers").json(&body).await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let id = json["customerId"].as_i64().unwrap();
    let cards = json["creditCards"].as_array().unwrap();

    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|c| c["customerId"] == id));
    assert_eq!(common::count_cards(&pool).await, 2);

    let listed = server
        .get(&format!("/api/customers/{}/credit-cards", id))
        .await;
    listed.assert_status_ok();
    assert_eq!(listed.json::<Value>().as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_create_customer_ignores_body_id(pool: PgPool) {
    let server = common::make_server(pool);

    let mut body = customer_body("id@example.com");
    body["customerId"] = json!(777);

    let response = server.post("/api/customers").json(&body).await;

    response.assert_status_ok();
    assert_ne!(response.json::<Value>()["customerId"], 777);
}

#[sqlx::test]
async fn test_create_customer_duplicate_email(pool: PgPool) {
    let server = common::make_server(pool.clone());

    common::create_test_customer(&pool, "taken@example.com").await;

    let response = server
        .post("/api/customers")
        .json(&customer_body("taken@example.com"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_create_customer_missing_field(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/customers")
        .json(&json!({ "firstName": "John", "lastName": "Doe" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_customer_partial(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let id = common::create_test_customer(&pool, "before@example.com").await;
    common::create_test_card(&pool, id, "3333").await;

    let response = server
        .put(&format!("/api/customers/{}", id))
        .json(&json!({ "lastName": "Smith" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["firstName"], "John");
    assert_eq!(json["lastName"], "Smith");
    assert_eq!(json["email"], "before@example.com");
    assert_eq!(json["creditCards"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_update_customer_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .put("/api/customers/999999")
        .json(&json!({ "firstName": "Ghost" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_update_customer_duplicate_email(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let id = common::create_test_customer(&pool, "a@example.com").await;
    common::create_test_customer(&pool, "b@example.com").await;

    let response = server
        .put(&format!("/api/customers/{}", id))
        .json(&json!({ "email": "b@example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["details"]["constraint"], "customer_email_key");

    let unchanged = server.get(&format!("/api/customers/{}", id)).await;
    assert_eq!(unchanged.json::<Value>()["email"], "a@example.com");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_customer_cascades(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let id = common::create_test_customer(&pool, "delete@example.com").await;
    let card_id = common::create_test_card(&pool, id, "4444").await;

    let response = server.delete(&format!("/api/customers/{}", id)).await;

    response.assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/customers/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get(&format!("/api/credit-cards/{}", card_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(common::count_cards(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_customer_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.delete("/api/customers/999999").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

// ─── CARDS OF CUSTOMER ───────────────────────────────────────────────────────

#[sqlx::test]
async fn test_customer_cards_unknown_customer(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/customers/999999/credit-cards").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
