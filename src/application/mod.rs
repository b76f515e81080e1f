//! Application layer services.
//!
//! Services forward calls to the repository ports and decide how absence is
//! reported. HTTP handlers talk to services only.
//!
//! # Available Services
//!
//! - [`services::customer_service::CustomerService`] - Customer CRUD
//! - [`services::credit_card_service::CreditCardService`] - Credit card CRUD

pub mod services;
