//! Repository trait definitions for the domain layer.
//!
//! These traits are the ports of the application: services depend on them and
//! `crate::infrastructure::persistence` implements them. Absence is reported as
//! `Ok(None)` or `Ok(false)`, never as an error.
//!
//! # Available Repositories
//!
//! - [`CustomerRepository`] - Customer CRUD operations
//! - [`CreditCardRepository`] - Credit card CRUD operations
//!
//! # Testing
//!
//! Mock implementations are generated with `mockall` under `cfg(test)`.
//! See `tests/repository_*.rs` for the PostgreSQL implementations in use.

pub mod credit_card_repository;
pub mod customer_repository;

pub use credit_card_repository::CreditCardRepository;
pub use customer_repository::CustomerRepository;

#[cfg(test)]
pub use credit_card_repository::MockCreditCardRepository;
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
