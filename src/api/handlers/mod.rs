//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod url;

pub use health::health_handler;
pub use redirect::{ExistingUrl, redirect_handler};
pub use url::{
    create_url_handler, delete_url_handler, list_urls_handler, update_url_handler,
};
