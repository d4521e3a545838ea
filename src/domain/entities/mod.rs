//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored short URL
//! - [`NewUrlRecord`] - Input for inserting a record
//! - [`UrlPatch`] - Partial update of a record

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlPatch, UrlRecord};
