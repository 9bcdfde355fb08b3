//! Hash-prefix alias assignment with adaptive widening.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::application::services::alias_service::{
    AliasService, AliasStrategy, record_view, validate_url_address,
};
use crate::domain::entities::{Entry, NewEntry};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;
use crate::utils::hash_prefix::{self, MAX_ALIAS_WIDTH, MIN_ALIAS_WIDTH};

/// Outcome of checking one candidate width.
#[derive(Debug, PartialEq)]
enum Probe {
    /// The URL owns this alias, either just created or found from earlier.
    Assigned(String),
    /// Another URL already owns the candidate.
    Collided,
}

/// Assigns aliases taken from the SHA-1 digest of the URL.
///
/// Starts with a 6-character prefix and widens one character at a time while
/// the candidate belongs to a different URL, up to 10 characters. An entry
/// already created for the URL always wins over alias equality, so
/// re-submitting a URL returns the alias it already has, even if that alias
/// was widened earlier.
pub struct HashAliasService<R: EntryRepository> {
    entry_repository: Arc<R>,
}

impl<R: EntryRepository> HashAliasService<R> {
    /// Creates a new hash alias service.
    pub fn new(entry_repository: Arc<R>) -> Self {
        Self { entry_repository }
    }

    /// Checks the candidate of `url_address` at `width` and creates the entry
    /// when nothing matches.
    ///
    /// A uniqueness conflict on save means a concurrent request created a
    /// matching row after the lookup; the lookup is repeated once so the row
    /// is classified like any other match.
    async fn probe(&self, url_address: &str, width: usize) -> Result<Probe, AppError> {
        let candidate = hash_prefix::candidate(url_address, width);
        let mut retried = false;

        loop {
            debug!(
                "Looking up entries with URL address '{}' or URL alias '{}'",
                url_address, candidate
            );

            let existing = self
                .entry_repository
                .find_by_url_address_or_url_alias(url_address, &candidate)
                .await?;

            if let Some(entry) = existing {
                return classify(url_address, entry);
            }

            match self
                .entry_repository
                .save(NewEntry::with_alias(url_address, candidate.as_str()))
                .await
            {
                Ok(entry) => {
                    info!(
                        "Created entry {} for URL '{}' with alias '{}'",
                        entry.id, url_address, candidate
                    );
                    return Ok(Probe::Assigned(candidate));
                }
                Err(e) if e.is_conflict() && !retried => {
                    debug!("Concurrent insert for alias '{}', re-reading", candidate);
                    retried = true;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Decides whether an entry found for `url_address` or its candidate belongs
/// to the URL.
fn classify(url_address: &str, entry: Entry) -> Result<Probe, AppError> {
    if !entry.is_for(url_address) {
        debug!(
            "URL alias clash with entry {} ('{}')",
            entry.id, entry.url_address
        );
        return Ok(Probe::Collided);
    }

    match entry.url_alias {
        Some(alias) => {
            debug!("Existing alias '{}' found for URL '{}'", alias, url_address);
            Ok(Probe::Assigned(alias))
        }
        None => Err(AppError::internal(
            "Entry has no stored alias",
            json!({ "id": entry.id, "url_address": url_address }),
        )),
    }
}

#[async_trait]
impl<R: EntryRepository> AliasService for HashAliasService<R> {
    fn strategy(&self) -> AliasStrategy {
        AliasStrategy::Hash
    }

    async fn shorten(&self, url_address: &str) -> Result<String, AppError> {
        info!("Shortening URL '{}'", url_address);
        validate_url_address(url_address)?;

        for width in MIN_ALIAS_WIDTH..=MAX_ALIAS_WIDTH {
            match self.probe(url_address, width).await? {
                Probe::Assigned(alias) => return Ok(alias),
                Probe::Collided if width < MAX_ALIAS_WIDTH => {
                    info!(
                        "URL alias clash found, trying an alias with {} characters",
                        width + 1
                    );
                }
                Probe::Collided => {}
            }
        }

        warn!(
            "No unique URL alias available for '{}', permutations up to {} characters are exhausted",
            url_address, MAX_ALIAS_WIDTH
        );
        Err(AppError::alias_space_exhausted(url_address, MAX_ALIAS_WIDTH))
    }

    async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        info!("Looking up URL assigned to alias '{}'", alias);

        let entry = self
            .entry_repository
            .find_by_url_alias(alias)
            .await?
            .ok_or_else(|| AppError::alias_not_found(alias))?;

        record_view(self.entry_repository.as_ref(), &entry).await;
        Ok(entry.url_address)
    }
}
