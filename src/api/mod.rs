//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
