//! DTOs for customer endpoints.

use serde::{Deserialize, Serialize};

use super::credit_card::{CreateCreditCardRequest, CreditCardDto};

/// A customer with its cards as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credit_cards: Vec<CreditCardDto>,
}

/// Request body for `POST /api/customers`.
///
/// `customerId` is accepted and ignored. `creditCards` may be absent or `null`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub credit_cards: Option<Vec<CreateCreditCardRequest>>,
}

/// Request body for `PUT /api/customers/{id}`.
///
/// Omitted fields keep their stored value. Cards sent here are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}
