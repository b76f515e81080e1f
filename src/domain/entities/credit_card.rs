//! Credit card entity.

use chrono::NaiveDate;

/// A credit card owned by exactly one customer.
///
/// No relationship between `credit_limit` and `current_balance` is enforced, and
/// the card number and CVV are stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditCard {
    pub id: i64,
    pub customer_id: i64,
    pub card_number: String,
    pub expiration_date: NaiveDate,
    pub cvv: String,
    pub card_type: String,
    pub credit_limit: f64,
    pub current_balance: f64,
}

/// Input data for creating a credit card.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCreditCard {
    pub customer_id: i64,
    pub card_number: String,
    pub expiration_date: NaiveDate,
    pub cvv: String,
    pub card_type: String,
    pub credit_limit: f64,
    pub current_balance: f64,
}

/// Overwrite of an existing card's fields.
///
/// `None` fields keep their stored value. The owning customer cannot be changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCreditCard {
    pub card_number: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub cvv: Option<String>,
    pub card_type: Option<String>,
    pub credit_limit: Option<f64>,
    pub current_balance: Option<f64>,
}

