//! Repository trait for credit card data access.

use crate::domain::entities::{CreditCard, NewCreditCard, UpdateCreditCard};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing credit cards.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCreditCardRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreditCardRepository: Send + Sync {
    /// Returns every card, ordered by id.
    async fn find_all(&self) -> Result<Vec<CreditCard>, AppError>;

    /// Finds a card by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<CreditCard>, AppError>;

    /// Returns the cards owned by a customer, ordered by id.
    async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<CreditCard>, AppError>;

    /// Inserts a new card.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the card number is already taken.
    /// Returns [`AppError::NotFound`] if the owning customer does not exist.
    async fn save(&self, new_card: NewCreditCard) -> Result<CreditCard, AppError>;

    /// Overwrites the stored fields of an existing card.
    ///
    /// Returns `Ok(None)` if no card has this id.
    async fn update(
        &self,
        id: i64,
        update: UpdateCreditCard,
    ) -> Result<Option<CreditCard>, AppError>;

    /// Deletes a card. Returns `Ok(true)` if a row was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Returns whether a card with this id exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored cards.
    async fn count(&self) -> Result<i64, AppError>;
}
