//! Business logic services for the application layer.

pub mod credit_card_service;
pub mod customer_service;

pub use credit_card_service::CreditCardService;
pub use customer_service::CustomerService;
