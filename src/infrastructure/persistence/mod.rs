//! PostgreSQL repository implementations.
//!
//! - [`PgUrlRepository`] - Short URL record storage

pub mod pg_url_repository;

pub use pg_url_repository::PgUrlRepository;
