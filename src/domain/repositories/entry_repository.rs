//! Repository trait for entry data access.

use crate::domain::entities::{Entry, NewEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL entries.
///
/// Implementations must enforce uniqueness of `url_address` and of non-null
/// `url_alias`, and report violations as [`AppError::Conflict`] so callers can
/// tell a lost creation race apart from a missing entry.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEntryRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryEntryRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Finds the entry created for `url_address`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_url_address(&self, url_address: &str) -> Result<Option<Entry>, AppError>;

    /// Finds an entry by its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, AppError>;

    /// Finds the entry holding the stored alias `url_alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_url_alias(&self, url_alias: &str) -> Result<Option<Entry>, AppError>;

    /// Finds an entry matching `url_address` OR `url_alias` in a single lookup.
    ///
    /// When one entry matches the address and another matches the alias, the
    /// address match is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_url_address_or_url_alias(
        &self,
        url_address: &str,
        url_alias: &str,
    ) -> Result<Option<Entry>, AppError>;

    /// Persists a new entry and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the address or alias is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, new_entry: NewEntry) -> Result<Entry, AppError>;

    /// Increments the view counter of an entry.
    ///
    /// Returns `Ok(false)` if no entry has this identifier.
    async fn increment_views(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored entries.
    async fn count(&self) -> Result<i64, AppError>;
}
