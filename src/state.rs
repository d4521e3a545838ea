//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, UrlService};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::PgUrlRepository;
use crate::utils::identifier::NanoIdGenerator;

/// URL service as wired in production: Postgres store, nanoid identifiers.
pub type AppUrlService = UrlService<PgUrlRepository, NanoIdGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<AppUrlService>,
    pub auth_service: Arc<AuthService>,
    pub cache: Arc<dyn CacheService>,
}
