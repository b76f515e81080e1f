//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod credit_cards;
pub mod customers;
pub mod health;

pub use credit_cards::{
    create_credit_card_handler, credit_card_list_handler, delete_credit_card_handler,
    get_credit_card_handler, update_credit_card_handler,
};
pub use customers::{
    create_customer_handler, customer_cards_handler, customer_list_handler,
    delete_customer_handler, get_customer_handler, update_customer_handler,
};
pub use health::health_handler;
