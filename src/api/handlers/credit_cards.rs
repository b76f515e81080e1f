//! Handlers for credit card endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::credit_card::{
    CreateCreditCardRequest, CreditCardDto, UpdateCreditCardRequest,
};
use crate::domain::entities::UpdateCreditCard;
use crate::error::AppError;
use crate::state::AppState;

fn card_not_found(id: i64) -> AppError {
    AppError::not_found("Credit card not found", json!({ "id": id }))
}

/// Lists all cards.
///
/// # Endpoint
///
/// `GET /api/credit-cards`
pub async fn credit_card_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CreditCardDto>>, AppError> {
    let cards = state.credit_card_service.list_credit_cards().await?;

    Ok(Json(cards.into_iter().map(CreditCardDto::from).collect()))
}

/// Returns one card.
///
/// # Endpoint
///
/// `GET /api/credit-cards/{id}`
///
/// # Errors
///
/// Returns 404 if the card does not exist.
pub async fn get_credit_card_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<CreditCardDto>, AppError> {
    let Path(id) = path?;
    let card = state
        .credit_card_service
        .get_credit_card(id)
        .await?
        .ok_or_else(|| card_not_found(id))?;

    Ok(Json(card.into()))
}

/// Creates a card for an existing customer.
///
/// # Endpoint
///
/// `POST /api/credit-cards`
///
/// # Request Body
///
/// ```json
/// {
///   "customerId": 1,
///   "cardNumber": "1234567890123456",
///   "expirationDate": "2025-12-31",
///   "cvv": "123",
///   "cardType": "Credit",
///   "creditLimit": 5000.0,
///   "currentBalance": 1000.0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed or `customerId` is missing.
/// Returns 404 if the customer does not exist.
/// Returns 409 if the card number is already taken.
pub async fn create_credit_card_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCreditCardRequest>, JsonRejection>,
) -> Result<Json<CreditCardDto>, AppError> {
    let Json(payload) = payload?;

    let customer_id = payload.customer_id.ok_or_else(|| {
        AppError::bad_request("customerId is required", json!({ "field": "customerId" }))
    })?;

    let card = state
        .credit_card_service
        .create_credit_card(payload.into_new_card(customer_id))
        .await?;

    Ok(Json(card.into()))
}

/// Overwrites a card's fields. Omitted fields are kept.
///
/// # Endpoint
///
/// `PUT /api/credit-cards/{id}`
///
/// # Errors
///
/// Returns 404 if the card does not exist.
/// Returns 409 if the new card number is already taken.
pub async fn update_credit_card_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateCreditCardRequest>, JsonRejection>,
) -> Result<Json<CreditCardDto>, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let card = state
        .credit_card_service
        .update_credit_card(id, UpdateCreditCard::from(payload))
        .await?
        .ok_or_else(|| card_not_found(id))?;

    Ok(Json(card.into()))
}

/// Deletes a card.
///
/// # Endpoint
///
/// `DELETE /api/credit-cards/{id}`
///
/// # Errors
///
/// Returns 404 if the card does not exist.
pub async fn delete_credit_card_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    if !state.credit_card_service.delete_credit_card(id).await? {
        return Err(card_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}
