//! Helper functions shared across layers.
//!
//! - [`identifier`] - Short identifier generation
//! - [`redirect_url`] - Redirect target validation

pub mod identifier;
pub mod redirect_url;
