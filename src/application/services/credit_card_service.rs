//! Credit card management service.

use crate::domain::entities::{CreditCard, NewCreditCard, UpdateCreditCard};
use crate::domain::repositories::{CreditCardRepository, CustomerRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing credit cards.
///
/// Holds the customer repository as well to resolve card owners.
pub struct CreditCardService<C: CreditCardRepository, U: CustomerRepository> {
    card_repository: Arc<C>,
    customer_repository: Arc<U>,
}

impl<C: CreditCardRepository, U: CustomerRepository> CreditCardService<C, U> {
    /// Creates a new credit card service.
    pub fn new(card_repository: Arc<C>, customer_repository: Arc<U>) -> Self {
        Self {
            card_repository,
            customer_repository,
        }
    }

    /// Lists all cards.
    pub async fn list_credit_cards(&self) -> Result<Vec<CreditCard>, AppError> {
        self.card_repository.find_all().await
    }

    /// Retrieves a card by id. `Ok(None)` if it does not exist.
    pub async fn get_credit_card(&self, id: i64) -> Result<Option<CreditCard>, AppError> {
        self.card_repository.find_by_id(id).await
    }

    /// Lists the cards of one customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    pub async fn list_for_customer(&self, customer_id: i64) -> Result<Vec<CreditCard>, AppError> {
        self.ensure_customer(customer_id).await?;
        self.card_repository.find_by_customer(customer_id).await
    }

    /// Creates a card for an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owning customer does not exist.
    /// Returns [`AppError::Conflict`] if the card number is already taken.
    pub async fn create_credit_card(&self, new_card: NewCreditCard) -> Result<CreditCard, AppError> {
        self.ensure_customer(new_card.customer_id).await?;

        let created = self.card_repository.save(new_card).await?;
        tracing::info!(
            card_id = created.id,
            customer_id = created.customer_id,
            "Credit card created"
        );

        Ok(created)
    }

    /// Overwrites a card's fields. The owning customer is left unchanged.
    ///
    /// Returns `Ok(None)` if the card does not exist.
    pub async fn update_credit_card(
        &self,
        id: i64,
        update: UpdateCreditCard,
    ) -> Result<Option<CreditCard>, AppError> {
        let updated = self.card_repository.update(id, update).await?;

        if updated.is_some() {
            tracing::debug!(card_id = id, "Credit card updated");
        }

        Ok(updated)
    }

    /// Deletes a card. Returns `Ok(false)` if it does not exist.
    pub async fn delete_credit_card(&self, id: i64) -> Result<bool, AppError> {
        if !self.card_repository.exists_by_id(id).await? {
            return Ok(false);
        }

        let deleted = self.card_repository.delete_by_id(id).await?;
        if deleted {
            tracing::info!(card_id = id, "Credit card deleted");
        }

        Ok(deleted)
    }

    /// Counts stored cards.
    pub async fn count_credit_cards(&self) -> Result<i64, AppError> {
        self.card_repository.count().await
    }

    async fn ensure_customer(&self, customer_id: i64) -> Result<(), AppError> {
        if self.customer_repository.exists_by_id(customer_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Customer not found",
                json!({"customer_id": customer_id}),
            ))
        }
    }
}
