//! In-process implementation of entry repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Entry, NewEntry};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    entries: BTreeMap<i64, Entry>,
    by_address: HashMap<String, i64>,
    by_alias: HashMap<String, i64>,
}

impl Inner {
    fn get(&self, id: Option<&i64>) -> Option<Entry> {
        id.and_then(|id| self.entries.get(id)).cloned()
    }
}

/// Entry repository kept in memory behind a single mutex.
///
/// Check-and-insert happens under one lock, giving the same uniqueness
/// guarantees as the database indexes. Identifiers start at 1. Contents are
/// lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryEntryRepository {
    inner: Mutex<Inner>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("Entry store mutex poisoned", json!({})))
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn find_by_url_address(&self, url_address: &str) -> Result<Option<Entry>, AppError> {
        let inner = self.lock()?;
        Ok(inner.get(inner.by_address.get(url_address)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, AppError> {
        let inner = self.lock()?;
        Ok(inner.entries.get(&id).cloned())
    }

    async fn find_by_url_alias(&self, url_alias: &str) -> Result<Option<Entry>, AppError> {
        let inner = self.lock()?;
        Ok(inner.get(inner.by_alias.get(url_alias)))
    }

    async fn find_by_url_address_or_url_alias(
        &self,
        url_address: &str,
        url_alias: &str,
    ) -> Result<Option<Entry>, AppError> {
        let inner = self.lock()?;
        let id = inner
            .by_address
            .get(url_address)
            .or_else(|| inner.by_alias.get(url_alias));
        Ok(inner.get(id))
    }

    async fn save(&self, new_entry: NewEntry) -> Result<Entry, AppError> {
        let mut inner = self.lock()?;

        if inner.by_address.contains_key(&new_entry.url_address) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "url_entries_url_address_key" }),
            ));
        }
        if let Some(alias) = &new_entry.url_alias
            && inner.by_alias.contains_key(alias)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "url_entries_url_alias_key" }),
            ));
        }

        inner.last_id += 1;
        let entry = Entry::new(
            inner.last_id,
            new_entry.url_address,
            new_entry.url_alias,
            new_entry.created_at,
            0,
        );

        inner.by_address.insert(entry.url_address.clone(), entry.id);
        if let Some(alias) = &entry.url_alias {
            inner.by_alias.insert(alias.clone(), entry.id);
        }
        inner.entries.insert(entry.id, entry.clone());

        Ok(entry)
    }

    async fn increment_views(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.lock()?;
        match inner.entries.get_mut(&id) {
            Some(entry) => {
                entry.total_views += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<i64, AppError> {
        let inner = self.lock()?;
        Ok(inner.entries.len() as i64)
    }
}
