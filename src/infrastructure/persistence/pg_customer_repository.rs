//! PostgreSQL implementation of the customer repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use super::pg_credit_card_repository::{cards_for_customers, insert_card};
use super::rows::{CreditCardRow, CustomerRow};
use crate::domain::entities::{CreditCard, Customer, NewCustomer, UpdateCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `customer` table.
///
/// Customers are always returned with their cards. Deleting a customer relies on
/// `ON DELETE CASCADE` of `creditcard.customer_id` to remove the cards.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load_cards(&self, customer: Customer) -> Result<Customer, AppError> {
        let rows = cards_for_customers(self.pool.as_ref(), &[customer.id]).await?;
        let cards = rows.into_iter().map(CreditCard::from).collect();

        Ok(customer.with_credit_cards(cards))
    }
}

/// Attaches each card row to its owner, keeping the customers' order.
fn attach_cards(customers: Vec<CustomerRow>, cards: Vec<CreditCardRow>) -> Vec<Customer> {
    let mut by_owner: HashMap<i64, Vec<CreditCard>> = HashMap::new();
    for card in cards {
        by_owner
            .entry(card.customer_id)
            .or_default()
            .push(card.into());
    }

    customers
        .into_iter()
        .map(|row| {
            let cards = by_owner.remove(&row.customer_id).unwrap_or_default();
            Customer::from(row).with_credit_cards(cards)
        })
        .collect()
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT customer_id, first_name, last_name, email
            FROM customer
            ORDER BY customer_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        if customers.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = customers.iter().map(|c| c.customer_id).collect();
        let cards = cards_for_customers(self.pool.as_ref(), &ids).await?;

        Ok(attach_cards(customers, cards))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT customer_id, first_name, last_name, email
            FROM customer
            WHERE customer_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => Ok(Some(self.load_cards(row.into()).await?)),
            None => Ok(None),
        }
    }

    async fn save(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customer (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING customer_id, first_name, last_name, email
            "#,
        )
        .bind(&new_customer.first_name)
        .bind(&new_customer.last_name)
        .bind(&new_customer.email)
        .fetch_one(&mut *tx)
        .await?;

        let mut cards = Vec::with_capacity(new_customer.credit_cards.len());
        for card in &new_customer.credit_cards {
            let card_row = insert_card(&mut *tx, row.customer_id, card).await?;
            cards.push(CreditCard::from(card_row));
        }

        tx.commit().await?;

        Ok(Customer::from(row).with_credit_cards(cards))
    }

    async fn update(&self, id: i64, update: UpdateCustomer) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customer SET
                first_name = COALESCE($2, first_name),
                last_name  = COALESCE($3, last_name),
                email      = COALESCE($4, email)
            WHERE customer_id = $1
            RETURNING customer_id, first_name, last_name, email
            "#,
        )
        .bind(id)
        .bind(update.first_name)
        .bind(update.last_name)
        .bind(update.email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => Ok(Some(self.load_cards(row.into()).await?)),
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customer WHERE customer_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM customer WHERE customer_id = $1)",
        )
        .bind(id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customer")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
