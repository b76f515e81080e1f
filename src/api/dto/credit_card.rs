//! DTOs for credit card endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A credit card as returned by the API.
///
/// The CVV is returned in plaintext, like every other stored field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardDto {
    pub card_id: i64,
    pub customer_id: i64,
    pub card_number: String,
    pub expiration_date: NaiveDate,
    pub cvv: String,
    pub card_type: String,
    pub credit_limit: f64,
    pub current_balance: f64,
}

/// Request body for `POST /api/credit-cards`, also used for the cards nested in
/// `POST /api/customers`.
///
/// `cardId` is accepted and ignored. `customerId` is required at the top level
/// and ignored when the card is nested under a new customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreditCardRequest {
    #[serde(default)]
    pub card_id: Option<i64>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub card_number: String,
    pub expiration_date: NaiveDate,
    pub cvv: String,
    pub card_type: String,
    pub credit_limit: f64,
    pub current_balance: f64,
}

/// Request body for `PUT /api/credit-cards/{id}`.
///
/// Omitted fields keep their stored value. `cardId` and `customerId` are
/// ignored; a card cannot change owner.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCreditCardRequest {
    pub card_number: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub cvv: Option<String>,
    pub card_type: Option<String>,
    pub credit_limit: Option<f64>,
    pub current_balance: Option<f64>,
}
