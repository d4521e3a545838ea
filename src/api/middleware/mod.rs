//! HTTP middleware for request processing and protection.
//!
//! Provides API key authentication and access logging.

pub mod auth;
pub mod tracing;
