//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Record cache (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
