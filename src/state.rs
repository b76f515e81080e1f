//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{CreditCardService, CustomerService};
use crate::infrastructure::persistence::{PgCreditCardRepository, PgCustomerRepository};

pub type AppCustomerService = CustomerService<PgCustomerRepository>;
pub type AppCreditCardService = CreditCardService<PgCreditCardRepository, PgCustomerRepository>;

/// Services and resources shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<AppCustomerService>,
    pub credit_card_service: Arc<AppCreditCardService>,
}

impl AppState {
    /// Wires the PostgreSQL repositories and services onto one pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let customer_repository = Arc::new(PgCustomerRepository::new(pool.clone()));
        let card_repository = Arc::new(PgCreditCardRepository::new(pool.clone()));

        Self {
            customer_service: Arc::new(CustomerService::new(customer_repository.clone())),
            credit_card_service: Arc::new(CreditCardService::new(
                card_repository,
                customer_repository,
            )),
        }
    }
}
