//! Customer management service.

use crate::domain::entities::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for managing customers and the cards they are created with.
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a new customer service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all customers with their cards.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a customer by id. `Ok(None)` if it does not exist.
    pub async fn get_customer(&self, id: i64) -> Result<Option<Customer>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Creates a customer together with any cards listed in `new_customer`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email or a card number is taken.
    pub async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let created = self.repository.save(new_customer).await?;

        tracing::info!(
            customer_id = created.id,
            cards = created.credit_cards.len(),
            "Customer created"
        );

        Ok(created)
    }

    /// Overwrites a customer's name and email. Cards are left unchanged.
    ///
    /// Returns `Ok(None)` if the customer does not exist.
    pub async fn update_customer(
        &self,
        id: i64,
        update: UpdateCustomer,
    ) -> Result<Option<Customer>, AppError> {
        let updated = self.repository.update(id, update).await?;

        if updated.is_some() {
            tracing::debug!(customer_id = id, "Customer updated");
        }

        Ok(updated)
    }

    /// Deletes a customer and all of its cards.
    ///
    /// Returns `Ok(false)` if the customer does not exist.
    pub async fn delete_customer(&self, id: i64) -> Result<bool, AppError> {
        if !self.repository.exists_by_id(id).await? {
            return Ok(false);
        }

        let deleted = self.repository.delete_by_id(id).await?;
        if deleted {
            tracing::info!(customer_id = id, "Customer deleted");
        }

        Ok(deleted)
    }

    /// Counts stored customers.
    pub async fn count_customers(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCustomerRepository;
    use serde_json::json;

    fn create_test_customer(id: i64, email: &str) -> Customer {
        Customer::new(id, "John".to_string(), "Doe".to_string(), email.to_string())
    }

    #[tokio::test]
    async fn test_create_customer_success() {
        let mut mock_repo = MockCustomerRepository::new();

        let created = create_test_customer(1, "john@example.com");
        mock_repo
            .expect_save()
            .withf(|c| c.email == "john@example.com" && c.credit_cards.is_empty())
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service
            .create_customer(NewCustomer {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john@example.com".to_string(),
                credit_cards: vec![],
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_create_customer_duplicate_email() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo.expect_save().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({"constraint": "customer_email_key"}),
            ))
        });

        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service
            .create_customer(NewCustomer {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "taken@example.com".to_string(),
                credit_cards: vec![],
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_get_customer_not_found() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service.get_customer(42).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_customer_not_found() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service
            .update_customer(
                99,
                UpdateCustomer {
                    first_name: Some("Jane".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_customer_passes_partial_fields() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_update()
            .withf(|id, u| {
                *id == 1
                    && u.first_name.as_deref() == Some("Jane")
                    && u.last_name.is_none()
                    && u.email.is_none()
            })
            .times(1)
            .returning(|id, _| {
                Ok(Some(Customer::new(
                    id,
                    "Jane".to_string(),
                    "Doe".to_string(),
                    "john@example.com".to_string(),
                )))
            });

        let service = CustomerService::new(Arc::new(mock_repo));

        let updated = service
            .update_customer(
                1,
                UpdateCustomer {
                    first_name: Some("Jane".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.first_name, "Jane");
        assert_eq!(updated.last_name, "Doe");
    }

    #[tokio::test]
    async fn test_delete_customer_not_found() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Ok(false));
        mock_repo.expect_delete_by_id().never();

        let service = CustomerService::new(Arc::new(mock_repo));

        assert!(!service.delete_customer(7).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_customer_success() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_delete_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(true));

        let service = CustomerService::new(Arc::new(mock_repo));

        assert!(service.delete_customer(7).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_customers() {
        let mut mock_repo = MockCustomerRepository::new();

        let customers = vec![
            create_test_customer(1, "a@example.com"),
            create_test_customer(2, "b@example.com"),
        ];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(customers.clone()));

        let service = CustomerService::new(Arc::new(mock_repo));

        let list = service.list_customers().await.unwrap();
        assert_eq!(list.len(), 2);
    }
}
