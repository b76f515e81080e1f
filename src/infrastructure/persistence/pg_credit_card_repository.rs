//! PostgreSQL implementation of the credit card repository.

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use std::sync::Arc;

use super::rows::CreditCardRow;
use crate::domain::entities::{CreditCard, NewCreditCard, UpdateCreditCard};
use crate::domain::repositories::CreditCardRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `creditcard` table.
pub struct PgCreditCardRepository {
    pool: Arc<PgPool>,
}

impl PgCreditCardRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Inserts a card for `customer_id` on any executor.
///
/// Shared with the customer repository, which creates nested cards inside the
/// customer's transaction.
pub(crate) async fn insert_card<'e, E>(
    executor: E,
    customer_id: i64,
    card: &NewCreditCard,
) -> Result<CreditCardRow, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, CreditCardRow>(
        r#"
        INSERT INTO creditcard
            (customer_id, card_number, expiration_date, cvv, card_type, credit_limit, current_balance)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING card_id, customer_id, card_number, expiration_date, cvv, card_type,
                  credit_limit, current_balance
        "#,
    )
    .bind(customer_id)
    .bind(&card.card_number)
    .bind(card.expiration_date)
    .bind(&card.cvv)
    .bind(&card.card_type)
    .bind(card.credit_limit)
    .bind(card.current_balance)
    .fetch_one(executor)
    .await
}

/// Loads the cards of several customers at once, ordered by id.
pub(crate) async fn cards_for_customers<'e, E>(
    executor: E,
    customer_ids: &[i64],
) -> Result<Vec<CreditCardRow>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, CreditCardRow>(
        r#"
        SELECT card_id, customer_id, card_number, expiration_date, cvv, card_type,
               credit_limit, current_balance
        FROM creditcard
        WHERE customer_id = ANY($1)
        ORDER BY card_id
        "#,
    )
    .bind(customer_ids)
    .fetch_all(executor)
    .await
}

#[async_trait]
impl CreditCardRepository for PgCreditCardRepository {
    async fn find_all(&self) -> Result<Vec<CreditCard>, AppError> {
        let rows = sqlx::query_as::<_, CreditCardRow>(
            r#"
            SELECT card_id, customer_id, card_number, expiration_date, cvv, card_type,
                   credit_limit, current_balance
            FROM creditcard
            ORDER BY card_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CreditCard::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CreditCard>, AppError> {
        let row = sqlx::query_as::<_, CreditCardRow>(
            r#"
            SELECT card_id, customer_id, card_number, expiration_date, cvv, card_type,
                   credit_limit, current_balance
            FROM creditcard
            WHERE card_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CreditCard::from))
    }

    async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<CreditCard>, AppError> {
        let rows = cards_for_customers(self.pool.as_ref(), &[customer_id]).await?;

        Ok(rows.into_iter().map(CreditCard::from).collect())
    }

    async fn save(&self, new_card: NewCreditCard) -> Result<CreditCard, AppError> {
        let row = insert_card(self.pool.as_ref(), new_card.customer_id, &new_card).await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: i64,
        update: UpdateCreditCard,
    ) -> Result<Option<CreditCard>, AppError> {
        let row = sqlx::query_as::<_, CreditCardRow>(
            r#"
            UPDATE creditcard SET
                card_number     = COALESCE($2, card_number),
                expiration_date = COALESCE($3, expiration_date),
                cvv             = COALESCE($4, cvv),
                card_type       = COALESCE($5, card_type),
                credit_limit    = COALESCE($6, credit_limit),
                current_balance = COALESCE($7, current_balance)
            WHERE card_id = $1
            RETURNING card_id, customer_id, card_number, expiration_date, cvv, card_type,
                      credit_limit, current_balance
            "#,
        )
        .bind(id)
        .bind(update.card_number)
        .bind(update.expiration_date)
        .bind(update.cvv)
        .bind(update.card_type)
        .bind(update.credit_limit)
        .bind(update.current_balance)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CreditCard::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM creditcard WHERE card_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM creditcard WHERE card_id = $1)",
        )
        .bind(id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM creditcard")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
