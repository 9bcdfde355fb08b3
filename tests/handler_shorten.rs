mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use url_shrinker::application::services::AliasStrategy;
use url_shrinker::domain::repositories::EntryRepository;
use url_shrinker::infrastructure::persistence::InMemoryEntryRepository;
use url_shrinker::utils::base62;

const SHORTEN_PATH: &str = "/api/v1/url_entry";

fn server(strategy: AliasStrategy) -> (TestServer, Arc<InMemoryEntryRepository>) {
    let (state, repo) = common::create_test_state(strategy);
    (TestServer::new(common::test_router(state)).unwrap(), repo)
}

#[tokio::test]
async fn test_shorten_returns_created_with_short_url() {
    let (server, _repo) = server(AliasStrategy::Hash);

    let response = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": "http://url.test.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["urlAlias"], "http://localhost:8080/928e4e");
}

#[tokio::test]
async fn test_shorten_same_url_twice_returns_same_alias() {
    let (server, repo) = server(AliasStrategy::Hash);

    let first = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": "https://example.com" }))
        .await
        .json::<Value>();
    let second = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": "https://example.com" }))
        .await
        .json::<Value>();

    assert_eq!(first["urlAlias"], "http://localhost:8080/327c3f");
    assert_eq!(first, second);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_widens_alias_on_prefix_collision() {
    let (server, _repo) = server(AliasStrategy::Hash);

    let first = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": common::COLLIDING_URL_A }))
        .await
        .json::<Value>();
    let second = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": common::COLLIDING_URL_B }))
        .await
        .json::<Value>();

    assert_eq!(first["urlAlias"], "http://localhost:8080/81b419");
    assert_eq!(second["urlAlias"], "http://localhost:8080/81b419c");
}

#[tokio::test]
async fn test_shorten_base62_encodes_identifier() {
    let (server, _repo) = server(AliasStrategy::Base62);

    let first = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": "https://a.example.com" }))
        .await;
    let second = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": "https://b.example.com" }))
        .await;

    first.assert_status(StatusCode::CREATED);
    assert_eq!(
        first.json::<Value>()["urlAlias"],
        format!("http://localhost:8080/{}", base62::encode(1))
    );
    assert_eq!(
        second.json::<Value>()["urlAlias"],
        format!("http://localhost:8080/{}", base62::encode(2))
    );
}

#[tokio::test]
async fn test_shorten_rejects_blank_url() {
    let (server, repo) = server(AliasStrategy::Hash);

    for body in [json!({ "urlAddress": "" }), json!({ "urlAddress": "   " }), json!({})] {
        let response = server.post(SHORTEN_PATH).json(&body).await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(json["error"]["details"][0]["code"], "not_blank");
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_rejects_malformed_url() {
    let (server, _repo) = server(AliasStrategy::Base62);

    let response = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": "not a url" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_whitespace_and_control_characters() {
    let (server, repo) = server(AliasStrategy::Hash);

    for url in [
        "https://example.com/a\nb",
        "https://example.com/a\tb",
        " https://example.com/x ",
    ] {
        let response = server
            .post(SHORTEN_PATH)
            .json(&json!({ "urlAddress": url }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(
            json["error"]["details"][0]["code"],
            "no_whitespace_or_control"
        );
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_rejects_unreadable_body() {
    let (server, _repo) = server(AliasStrategy::Hash);

    for body in [json!({ "urlAddress": 42 }), json!("http://url.test.com")] {
        let response = server.post(SHORTEN_PATH).json(&body).await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(json["error"]["message"], "Invalid request body.");
    }

    let response = server
        .post(SHORTEN_PATH)
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_too_long_url() {
    let (server, _repo) = server(AliasStrategy::Hash);
    let long_url = format!("https://example.com/{}", "a".repeat(2000));

    let response = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": long_url }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_accepts_url_at_length_limit() {
    let (server, _repo) = server(AliasStrategy::Hash);
    let prefix = "https://example.com/";
    let url = format!("{prefix}{}", "a".repeat(2000 - prefix.len()));

    let response = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": url }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_shorten_persists_entry(pool: PgPool) {
    let state = common::create_pg_state(pool.clone(), AliasStrategy::Hash);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server
        .post(SHORTEN_PATH)
        .json(&json!({ "urlAddress": "http://url.test.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let alias: Option<String> =
        sqlx::query_scalar("SELECT url_alias FROM url_entries WHERE url_address = $1")
            .bind("http://url.test.com")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(alias.as_deref(), Some("928e4e"));
}
