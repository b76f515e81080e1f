//! Domain layer containing business entities and repository ports.
//!
//! - [`entities`] - Customer and credit card data structures
//! - [`repositories`] - Data access trait definitions, implemented by
//!   [`crate::infrastructure::persistence`]
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
