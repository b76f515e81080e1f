//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx. Rows are
//! read into `FromRow` structs from [`rows`] and converted into domain entities.
//!
//! # Repositories
//!
//! - [`PgCustomerRepository`] - Customers with their cards
//! - [`PgCreditCardRepository`] - Credit cards

pub mod pg_credit_card_repository;
pub mod pg_customer_repository;
pub mod rows;

pub use pg_credit_card_repository::PgCreditCardRepository;
pub use pg_customer_repository::PgCustomerRepository;
