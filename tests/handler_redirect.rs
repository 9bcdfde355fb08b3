mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use url_shrinker::application::services::AliasStrategy;
use url_shrinker::domain::repositories::EntryRepository;
use url_shrinker::routes::app_router;
use url_shrinker::utils::base62;

#[tokio::test]
async fn test_redirect_success() {
    let (state, repo) = common::create_test_state(AliasStrategy::Hash);
    let server = TestServer::new(common::test_router(state)).unwrap();

    server
        .post("/api/v1/url_entry")
        .json(&json!({ "urlAddress": "http://url.test.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/928e4e").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "http://url.test.com");

    let entry = repo.find_by_url_alias("928e4e").await.unwrap().unwrap();
    assert_eq!(entry.total_views, 1);
}

#[tokio::test]
async fn test_redirect_after_prefix_collision() {
    let (state, _repo) = common::create_test_state(AliasStrategy::Hash);
    let server = TestServer::new(common::test_router(state)).unwrap();

    for url in [common::COLLIDING_URL_A, common::COLLIDING_URL_B] {
        server
            .post("/api/v1/url_entry")
            .json(&json!({ "urlAddress": url }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(
        server.get("/81b419").await.header("location"),
        common::COLLIDING_URL_A
    );
    assert_eq!(
        server.get("/81b419c").await.header("location"),
        common::COLLIDING_URL_B
    );
}

#[tokio::test]
async fn test_redirect_base62_alias() {
    let (state, _repo) = common::create_test_state(AliasStrategy::Base62);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let short_url = server
        .post("/api/v1/url_entry")
        .json(&json!({ "urlAddress": "https://www.rust-lang.org" }))
        .await
        .json::<Value>()["urlAlias"]
        .as_str()
        .unwrap()
        .to_string();

    let alias = short_url.trim_start_matches("http://localhost:8080/");
    assert_eq!(alias, base62::encode(1));

    let response = server.get(&format!("/{alias}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.rust-lang.org");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _repo) = common::create_test_state(AliasStrategy::Hash);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/abcdef").await;

    response.assert_status_not_found();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(
        json["error"]["message"],
        "No URL found for the short version 'abcdef'."
    );
}

#[tokio::test]
async fn test_redirect_undecodable_base62_alias_not_found() {
    let (state, _repo) = common::create_test_state(AliasStrategy::Base62);
    let server = TestServer::new(common::test_router(state)).unwrap();

    server.get("/not-an-alias").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_trims_trailing_slash() {
    let (state, _repo) = common::create_test_state(AliasStrategy::Hash);
    let service = state.alias_service.clone();
    service.shorten("https://example.com").await.unwrap();

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri("/327c3f/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_app_router_serves_the_shared_route_table() {
    let (state, repo) = common::create_test_state(AliasStrategy::Hash);

    let created = app_router(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/url_entry/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"urlAddress":"http://url.test.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(repo.count().await.unwrap(), 1);

    let health = app_router(state.clone())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);

    let server = TestServer::new(common::test_router(state)).unwrap();
    server.get("/928e4e").await.assert_status(StatusCode::FOUND);
    server.get("/health").await.assert_status_ok();
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_redirect_from_database(pool: PgPool) {
    common::create_test_entry(&pool, "https://example.com/target", Some("abc123")).await;

    let state = common::create_pg_state(pool.clone(), AliasStrategy::Hash);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");

    let views: i64 = sqlx::query_scalar("SELECT total_views FROM url_entries WHERE url_alias = $1")
        .bind("abc123")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(views, 1);
}
