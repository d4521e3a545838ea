//! Domain layer containing business entities and logic.
//!
//! Independent of HTTP and storage concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`pagination`] - Page metadata calculation
//! - [`repositories`] - Data access trait definitions
//!
//! Repository traits are implemented in `crate::infrastructure::persistence`;
//! business rules live in [`crate::application::services`].

pub mod entities;
pub mod pagination;
pub mod repositories;
