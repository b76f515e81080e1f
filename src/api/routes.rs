//! API route configuration.

use crate::api::handlers::{
    create_credit_card_handler, create_customer_handler, credit_card_list_handler,
    customer_cards_handler, customer_list_handler, delete_credit_card_handler,
    delete_customer_handler, get_credit_card_handler, get_customer_handler,
    update_credit_card_handler, update_customer_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes. None of them require authentication.
///
/// # Endpoints
///
/// - `GET    /customers`                    - List customers with their cards
/// - `POST   /customers`                    - Create a customer (optionally with cards)
/// - `GET    /customers/{id}`               - Get a customer
/// - `PUT    /customers/{id}`               - Update a customer
/// - `DELETE /customers/{id}`               - Delete a customer and its cards
/// - `GET    /customers/{id}/credit-cards`  - List a customer's cards
/// - `GET    /credit-cards`                 - List cards
/// - `POST   /credit-cards`                 - Create a card
/// - `GET    /credit-cards/{id}`            - Get a card
/// - `PUT    /credit-cards/{id}`            - Update a card
/// - `DELETE /credit-cards/{id}`            - Delete a card
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(customer_list_handler).post(create_customer_handler),
        )
        .route(
            "/customers/{id}",
            get(get_customer_handler)
                .put(update_customer_handler)
                .delete(delete_customer_handler),
        )
        .route("/customers/{id}/credit-cards", get(customer_cards_handler))
        .route(
            "/credit-cards",
            get(credit_card_list_handler).post(create_credit_card_handler),
        )
        .route(
            "/credit-cards/{id}",
            get(get_credit_card_handler)
                .put(update_credit_card_handler)
                .delete(delete_credit_card_handler),
        )
}
