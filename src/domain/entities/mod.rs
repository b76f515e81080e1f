//! Core domain entities.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Customer`] - A customer and the cards it owns
//! - [`CreditCard`] - A card belonging to exactly one customer
//!
//! Each entity has a `New*` struct for creation and an `Update*` struct for
//! overwriting stored fields.

pub mod credit_card;
pub mod customer;

pub use credit_card::{CreditCard, NewCreditCard, UpdateCreditCard};
pub use customer::{Customer, NewCustomer, UpdateCustomer};
