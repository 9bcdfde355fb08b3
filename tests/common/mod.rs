#![allow(dead_code)]

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use url_shrinker::application::services::AliasStrategy;
use url_shrinker::infrastructure::persistence::{InMemoryEntryRepository, PgEntryRepository};
use url_shrinker::routes::service_router;
use url_shrinker::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

/// SHA-1 digests of these two URLs share the prefix `81b419`.
pub const COLLIDING_URL_A: &str = "https://example.com/page/2253";
pub const COLLIDING_URL_B: &str = "https://example.com/page/3595";

pub fn create_test_state(strategy: AliasStrategy) -> (AppState, Arc<InMemoryEntryRepository>) {
    let repo = Arc::new(InMemoryEntryRepository::new());
    let state = AppState::new(repo.clone(), strategy, BASE_URL);
    (state, repo)
}

pub fn create_pg_state(pool: PgPool, strategy: AliasStrategy) -> AppState {
    let repo = Arc::new(PgEntryRepository::new(Arc::new(pool)));
    AppState::new(repo, strategy, BASE_URL)
}

/// Every route of the service, without path normalization.
pub fn test_router(state: AppState) -> Router {
    service_router(state)
}

pub async fn create_test_entry(pool: &PgPool, url: &str, alias: Option<&str>) -> i64 {
    sqlx::query_scalar("INSERT INTO url_entries (url_address, url_alias) VALUES ($1, $2) RETURNING id")
        .bind(url)
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}
