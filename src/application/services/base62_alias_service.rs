//! Base62 alias assignment over store-assigned identifiers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::application::services::alias_service::{
    AliasService, AliasStrategy, record_view, validate_url_address,
};
use crate::domain::entities::{Entry, NewEntry};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;
use crate::utils::base62;

/// Assigns aliases by base62-encoding the identifier of each entry.
///
/// Identifiers are unique by store allocation and the encoding is injective,
/// so aliases never collide and no alias is stored. Resolution decodes the
/// alias back into the identifier.
pub struct Base62AliasService<R: EntryRepository> {
    entry_repository: Arc<R>,
}

impl<R: EntryRepository> Base62AliasService<R> {
    /// Creates a new base62 alias service.
    pub fn new(entry_repository: Arc<R>) -> Self {
        Self { entry_repository }
    }

    /// Returns the entry for `url_address`, creating it when missing.
    async fn find_or_create(&self, url_address: &str) -> Result<Entry, AppError> {
        debug!("Looking up entries with URL address '{}'", url_address);

        if let Some(entry) = self
            .entry_repository
            .find_by_url_address(url_address)
            .await?
        {
            return Ok(entry);
        }

        info!("No alias found for URL '{}', creating a new entry", url_address);

        match self.entry_repository.save(NewEntry::new(url_address)).await {
            Ok(entry) => Ok(entry),
            Err(e) if e.is_conflict() => {
                debug!("Concurrent insert for URL '{}', re-reading", url_address);
                self.entry_repository
                    .find_by_url_address(url_address)
                    .await?
                    .ok_or(e)
            }
            Err(e) => Err(e),
        }
    }
}

/// Base62 alias of an entry identifier.
fn encode_id(entry: &Entry) -> Result<String, AppError> {
    u64::try_from(entry.id).map(base62::encode).map_err(|_| {
        AppError::internal(
            "Entry identifier cannot be encoded",
            json!({ "id": entry.id }),
        )
    })
}

#[async_trait]
impl<R: EntryRepository> AliasService for Base62AliasService<R> {
    fn strategy(&self) -> AliasStrategy {
        AliasStrategy::Base62
    }

    async fn shorten(&self, url_address: &str) -> Result<String, AppError> {
        info!("Shortening URL '{}'", url_address);
        validate_url_address(url_address)?;

        let entry = self.find_or_create(url_address).await?;
        encode_id(&entry)
    }

    async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        info!("Looking up URL assigned to alias '{}'", alias);

        let id = base62::decode(alias)
            .and_then(|id| i64::try_from(id).ok())
            .ok_or_else(|| AppError::alias_not_found(alias))?;

        let entry = self
            .entry_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::alias_not_found(alias))?;

        record_view(self.entry_repository.as_ref(), &entry).await;
        Ok(entry.url_address)
    }
}
