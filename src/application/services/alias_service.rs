//! Common interface of the alias assignment strategies.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::application::services::{Base62AliasService, HashAliasService};
use crate::domain::entities::{Entry, NewEntry};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

/// Which alias scheme a service issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AliasStrategy {
    /// Leading SHA-1 hex characters of the URL, widened on collision.
    #[default]
    Hash,
    /// Base62 encoding of the store-assigned identifier.
    Base62,
}

impl AliasStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AliasStrategy::Hash => "hash",
            AliasStrategy::Base62 => "base62",
        }
    }
}

impl fmt::Display for AliasStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AliasStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash" => Ok(AliasStrategy::Hash),
            "base62" => Ok(AliasStrategy::Base62),
            other => Err(format!(
                "unknown alias strategy '{other}', expected 'hash' or 'base62'"
            )),
        }
    }
}

/// Shortens URLs into aliases and resolves aliases back to URLs.
///
/// Shortening is idempotent: the same URL always yields the same alias, and
/// distinct URLs never share one.
#[async_trait]
pub trait AliasService: Send + Sync {
    /// The scheme this service issues aliases with.
    fn strategy(&self) -> AliasStrategy;

    /// Returns the alias of `url_address`, creating its entry on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is blank, too long or malformed.
    /// Returns [`AppError::AliasSpaceExhausted`] if no unique alias can be found.
    /// Store failures are propagated unchanged.
    async fn shorten(&self, url_address: &str) -> Result<String, AppError>;

    /// Returns the URL address assigned to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    async fn resolve(&self, alias: &str) -> Result<String, AppError>;
}

/// Builds the service for `strategy` over a shared repository.
pub fn build_alias_service<R>(strategy: AliasStrategy, repository: Arc<R>) -> Arc<dyn AliasService>
where
    R: EntryRepository + 'static,
{
    match strategy {
        AliasStrategy::Hash => Arc::new(HashAliasService::new(repository)),
        AliasStrategy::Base62 => Arc::new(Base62AliasService::new(repository)),
    }
}

/// Rejects URL addresses that could never be stored.
pub(crate) fn validate_url_address(url_address: &str) -> Result<(), AppError> {
    let violations = NewEntry::new(url_address).violations();
    if violations.is_empty() {
        return Ok(());
    }

    Err(AppError::bad_request(
        "Invalid URL address",
        json!({ "url_address": url_address, "violations": violations }),
    ))
}

/// Bumps the view counter of a resolved entry. Failures are logged only.
pub(crate) async fn record_view<R>(repository: &R, entry: &Entry)
where
    R: EntryRepository + ?Sized,
{
    match repository.increment_views(entry.id).await {
        Ok(true) => {}
        Ok(false) => warn!("Entry {} vanished before its view was recorded", entry.id),
        Err(e) => warn!("Failed to record view for entry {}: {}", entry.id, e),
    }
}
