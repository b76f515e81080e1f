//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - JSON request/response bodies
//! - [`mapper`] - Conversions between DTOs and domain entities
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod mapper;
pub mod middleware;
pub mod routes;
