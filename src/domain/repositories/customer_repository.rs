//! Repository trait for customer data access.

use crate::domain::entities::{Customer, NewCustomer, UpdateCustomer};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing customers.
///
/// Every customer returned by this repository has its credit cards loaded.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns every customer, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Customer>, AppError>;

    /// Finds a customer by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Customer))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Inserts a customer and the cards it is created with.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email or one of the card numbers
    /// is already taken.
    async fn save(&self, new_customer: NewCustomer) -> Result<Customer, AppError>;

    /// Overwrites the stored fields of an existing customer.
    ///
    /// Returns `Ok(None)` if no customer has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new email is already taken.
    async fn update(&self, id: i64, update: UpdateCustomer) -> Result<Option<Customer>, AppError>;

    /// Deletes a customer and, through the foreign key, all of its cards.
    ///
    /// Returns `Ok(true)` if a row was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Returns whether a customer with this id exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored customers.
    async fn count(&self) -> Result<i64, AppError>;
}
