//! Application state shared across HTTP handlers.

use std::sync::Arc;

use crate::application::services::{AliasService, AliasStrategy, build_alias_service};
use crate::domain::repositories::EntryRepository;

/// Shared application state injected into all handlers.
///
/// Cheap to clone: services and the repository are behind [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<dyn AliasService>,
    pub entry_repository: Arc<dyn EntryRepository>,
    /// Prefix of returned short URLs, without trailing slash.
    pub base_url: String,
}

impl AppState {
    /// Creates application state with the alias service for `strategy`.
    pub fn new<R>(entry_repository: Arc<R>, strategy: AliasStrategy, base_url: &str) -> Self
    where
        R: EntryRepository + 'static,
    {
        let alias_service = build_alias_service(strategy, entry_repository.clone());

        Self {
            alias_service,
            entry_repository,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full short URL for `alias`.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url, alias)
    }
}
