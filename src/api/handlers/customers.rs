//! Handlers for customer endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::credit_card::CreditCardDto;
use crate::api::dto::customer::{CreateCustomerRequest, CustomerDto, UpdateCustomerRequest};
use crate::domain::entities::{NewCustomer, UpdateCustomer};
use crate::error::AppError;
use crate::state::AppState;

fn customer_not_found(id: i64) -> AppError {
    AppError::not_found("Customer not found", json!({ "id": id }))
}

/// Lists all customers with their cards.
///
/// # Endpoint
///
/// `GET /api/customers`
pub async fn customer_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerDto>>, AppError> {
    let customers = state.customer_service.list_customers().await?;

    Ok(Json(customers.into_iter().map(CustomerDto::from).collect()))
}

/// Returns one customer with its cards.
///
/// # Endpoint
///
/// `GET /api/customers/{id}`
///
/// # Errors
///
/// Returns 404 if the customer does not exist.
pub async fn get_customer_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<CustomerDto>, AppError> {
    let Path(id) = path?;
    let customer = state
        .customer_service
        .get_customer(id)
        .await?
        .ok_or_else(|| customer_not_found(id))?;

    Ok(Json(customer.into()))
}

/// Creates a customer, optionally with cards.
///
/// # Endpoint
///
/// `POST /api/customers`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "John",
///   "lastName": "Doe",
///   "email": "john.doe@example.com",
///   "creditCards": [
///     {
///       "cardNumber": "1234567890123456",
///       "expirationDate": "2025-12-31",
///       "cvv": "123",
///       "cardType": "Credit",
///       "creditLimit": 5000.0,
///       "currentBalance": 1000.0
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed.
/// Returns 409 if the email or a card number is already taken.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<Json<CustomerDto>, AppError> {
    let Json(payload) = payload?;

    let customer = state
        .customer_service
        .create_customer(NewCustomer::from(payload))
        .await?;

    Ok(Json(customer.into()))
}

/// Overwrites a customer's name and email. Omitted fields are kept.
///
/// # Endpoint
///
/// `PUT /api/customers/{id}`
///
/// # Errors
///
/// Returns 404 if the customer does not exist.
/// Returns 409 if the new email is already taken.
pub async fn update_customer_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateCustomerRequest>, JsonRejection>,
) -> Result<Json<CustomerDto>, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let customer = state
        .customer_service
        .update_customer(id, UpdateCustomer::from(payload))
        .await?
        .ok_or_else(|| customer_not_found(id))?;

    Ok(Json(customer.into()))
}

/// Deletes a customer and all of its cards.
///
/// # Endpoint
///
/// `DELETE /api/customers/{id}`
///
/// # Errors
///
/// Returns 404 if the customer does not exist.
pub async fn delete_customer_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    if !state.customer_service.delete_customer(id).await? {
        return Err(customer_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Lists the cards owned by a customer.
///
/// # Endpoint
///
/// `GET /api/customers/{id}/credit-cards`
///
/// # Errors
///
/// Returns 404 if the customer does not exist.
pub async fn customer_cards_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CreditCardDto>>, AppError> {
    let Path(id) = path?;
    let cards = state.credit_card_service.list_for_customer(id).await?;

    Ok(Json(cards.into_iter().map(CreditCardDto::from).collect()))
}
