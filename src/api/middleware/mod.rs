//! HTTP middleware for request processing.
//!
//! Provides CORS and request tracing.

pub mod cors;
pub mod tracing;
