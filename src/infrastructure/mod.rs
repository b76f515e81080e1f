//! Infrastructure layer for external integrations.
//!
//! Implements the repository ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
