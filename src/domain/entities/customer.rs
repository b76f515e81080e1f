//! Customer entity.

use super::credit_card::{CreditCard, NewCreditCard};

/// A customer together with the credit cards it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credit_cards: Vec<CreditCard>,
}

impl Customer {
    /// Creates a customer without any cards attached.
    pub fn new(id: i64, first_name: String, last_name: String, email: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            credit_cards: Vec::new(),
        }
    }

    /// Attaches the given cards, replacing whatever was loaded before.
    pub fn with_credit_cards(mut self, credit_cards: Vec<CreditCard>) -> Self {
        self.credit_cards = credit_cards;
        self
    }

    /// Returns the customer's full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input data for creating a customer.
///
/// Cards listed here are created in the same transaction as the customer and
/// are owned by it, so their `customer_id` is ignored.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credit_cards: Vec<NewCreditCard>,
}

/// Overwrite of an existing customer's own fields.
///
/// `None` fields keep their stored value. Cards are never touched by an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}
