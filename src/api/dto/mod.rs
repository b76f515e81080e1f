//! Data Transfer Objects for API requests and responses.
//!
//! Field names are camelCase on the wire (`customerId`, `cardNumber`, ...).

pub mod credit_card;
pub mod customer;
pub mod health;
