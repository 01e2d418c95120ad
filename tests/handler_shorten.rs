mod common;

use axum_test::TestServer;
use hashlink::domain::repositories::LinkStore;
use hashlink::utils::identifier::short_id;

#[tokio::test]
async fn test_shorten_https_url() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    let response = server
        .post("/api")
        .add_header("Host", common::HOST)
        .form(&[("url", "https://example.com/")])
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(
        response.header("location"),
        "http://localhost:8080/api/83f94a17"
    );
    assert!(response.text().is_empty());

    assert_eq!(
        store.get("83f94a17").await.unwrap(),
        Some("https://example.com/".to_string())
    );
}

#[tokio::test]
async fn test_shorten_http_url() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    let response = server
        .post("/api")
        .add_header("Host", common::HOST)
        .form(&[("url", "http://example.com/")])
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(
        response.header("location"),
        "http://localhost:8080/api/f684a3c4"
    );
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_shorten_location_matches_hash() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    for url in [
        "https://www.rust-lang.org/learn",
        "http://192.168.1.1:8080/admin?x=1",
        "https://example.com/search?q=rust&lang=en",
    ] {
        let response = server
            .post("/api")
            .add_header("Host", common::HOST)
            .form(&[("url", url)])
            .await;

        assert_eq!(response.status_code(), 201);
        assert_eq!(
            response.header("location"),
            format!("http://localhost:8080/api/{}", short_id(url).unwrap()).as_str()
        );
    }
}

#[tokio::test]
async fn test_shorten_same_url_twice_is_idempotent() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    let first = server
        .post("/api")
        .add_header("Host", common::HOST)
        .form(&[("url", "https://example.com/")])
        .await;
    let second = server
        .post("/api")
        .add_header("Host", common::HOST)
        .form(&[("url", "https://example.com/")])
        .await;

    assert_eq!(first.status_code(), 201);
    assert_eq!(second.status_code(), 201);
    assert_eq!(first.header("location"), second.header("location"));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_shorten_ftp_url_rejected() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    let response = server
        .post("/api")
        .add_header("Host", common::HOST)
        .form(&[("url", "ftp://example.com/")])
        .await;

    response.assert_status_bad_request();
    assert!(response.headers().get("location").is_none());
    assert!(response.text().is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_invalid_urls_rejected() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    for url in ["", "example.com", "not a url", "http:example.com", "http://"] {
        let response = server
            .post("/api")
            .add_header("Host", common::HOST)
            .form(&[("url", url)])
            .await;

        response.assert_status_bad_request();
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_rejects_local_hosts_and_unsafe_paths() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    for url in [
        "http://localhost/",
        "http://intranet/",
        "http://example.invalidtld/",
        "http://exa_mple.com/",
        "https://example.com/a|b",
        "http://example.com/<script>",
    ] {
        let response = server
            .post("/api")
            .add_header("Host", common::HOST)
            .form(&[("url", url)])
            .await;

        response.assert_status_bad_request();
        assert!(response.headers().get("location").is_none());
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    let response = server
        .post("/api")
        .add_header("Host", common::HOST)
        .form(&[("link", "https://example.com/")])
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_rejects_non_form_body() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    let response = server
        .post("/api")
        .add_header("Host", common::HOST)
        .json(&serde_json::json!({ "url": "https://example.com/" }))
        .await;

    response.assert_status(axum::http::StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_store_failure() {
    let state = common::create_failing_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    let response = server
        .post("/api")
        .add_header("Host", common::HOST)
        .form(&[("url", "https://example.com/")])
        .await;

    assert_eq!(response.status_code(), 500);
    assert!(response.headers().get("location").is_none());
}
