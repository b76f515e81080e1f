//! Conversions between API DTOs and domain entities.

use crate::api::dto::credit_card::{CreateCreditCardRequest, CreditCardDto, UpdateCreditCardRequest};
use crate::api::dto::customer::{CreateCustomerRequest, CustomerDto, UpdateCustomerRequest};
use crate::domain::entities::{
    CreditCard, Customer, NewCreditCard, NewCustomer, UpdateCreditCard, UpdateCustomer,
};

impl From<CreditCard> for CreditCardDto {
    fn from(card: CreditCard) -> Self {
        CreditCardDto {
            card_id: card.id,
            customer_id: card.customer_id,
            card_number: card.card_number,
            expiration_date: card.expiration_date,
            cvv: card.cvv,
            card_type: card.card_type,
            credit_limit: card.credit_limit,
            current_balance: card.current_balance,
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        CustomerDto {
            customer_id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            credit_cards: customer
                .credit_cards
                .into_iter()
                .map(CreditCardDto::from)
                .collect(),
        }
    }
}

impl CreateCreditCardRequest {
    /// Builds a new card owned by `customer_id`, ignoring any ids in the body.
    pub fn into_new_card(self, customer_id: i64) -> NewCreditCard {
        NewCreditCard {
            customer_id,
            card_number: self.card_number,
            expiration_date: self.expiration_date,
            cvv: self.cvv,
            card_type: self.card_type,
            credit_limit: self.credit_limit,
            current_balance: self.current_balance,
        }
    }
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        // Nested cards belong to the customer being created; the owner id is
        // assigned by the repository inside the insert transaction.
        let credit_cards = request
            .credit_cards
            .unwrap_or_default()
            .into_iter()
            .map(|card| card.into_new_card(0))
            .collect();

        NewCustomer {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            credit_cards,
        }
    }
}

impl From<UpdateCustomerRequest> for UpdateCustomer {
    fn from(request: UpdateCustomerRequest) -> Self {
        UpdateCustomer {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
        }
    }
}

impl From<UpdateCreditCardRequest> for UpdateCreditCard {
    fn from(request: UpdateCreditCardRequest) -> Self {
        UpdateCreditCard {
            card_number: request.card_number,
            expiration_date: request.expiration_date,
            cvv: request.cvv,
            card_type: request.card_type,
            credit_limit: request.credit_limit,
            current_balance: request.current_balance,
        }
    }
}
