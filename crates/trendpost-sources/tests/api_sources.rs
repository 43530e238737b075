//! Integration tests for the Reddit and X sources using wiremock HTTP mocks.

use serde_json::json;
use wiremock::matchers::{basic_auth, bearer_token, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trendpost_core::Credentials;
use trendpost_sources::{fetch_or_empty, RedditSource, SourceError, TopicSource, XTrendsSource};

fn reddit_credentials() -> Credentials {
    Credentials {
        reddit_client_id: Some("client-id".to_string()),
        reddit_client_secret: Some("client-secret".to_string()),
        reddit_user_agent: Some("trendpost-test/0.1 by tester".to_string()),
        ..Credentials::default()
    }
}

fn x_credentials() -> Credentials {
    Credentials {
        x_bearer_token: Some("x-bearer".to_string()),
        ..Credentials::default()
    }
}

fn reddit_listing(titles: &[&str]) -> serde_json::Value {
    let children: Vec<serde_json::Value> = titles
        .iter()
        .map(|t| json!({ "kind": "t3", "data": { "title": t, "permalink": "/r/technology/x" } }))
        .collect();
    json!({ "kind": "Listing", "data": { "children": children, "after": null } })
}

async fn mount_reddit_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .and(basic_auth("client-id", "client-secret"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "tok-123", "token_type": "bearer" })),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn reddit_source(server: &MockServer) -> RedditSource {
    RedditSource::with_base_urls(
        &reddit_credentials(),
        5,
        "trendpost-test/0.1",
        &server.uri(),
        &server.uri(),
    )
    .expect("client construction should not fail")
}

fn x_source(server: &MockServer) -> XTrendsSource {
    XTrendsSource::with_base_url(&x_credentials(), 5, "trendpost-test/0.1", &server.uri())
        .expect("client construction should not fail")
}

// ---------------------------------------------------------------------------
// Reddit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reddit_returns_hot_titles_in_order() {
    let server = MockServer::start().await;
    mount_reddit_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/technology/hot"))
        .and(query_param("limit", "5"))
        .and(bearer_token("tok-123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(reddit_listing(&["A", "B", "C"])),
        )
        .mount(&server)
        .await;

    let topics = reddit_source(&server).fetch().await.expect("fetch should succeed");
    let titles: Vec<&str> = topics.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(titles, ["A", "B", "C"]);
    assert!(topics.iter().all(|t| t.source == "reddit"));
}

#[tokio::test]
async fn reddit_caps_at_five_even_when_listing_has_more() {
    let server = MockServer::start().await;
    mount_reddit_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/technology/hot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reddit_listing(&[
            "1", "2", "3", "4", "5", "6", "7",
        ])))
        .mount(&server)
        .await;

    let topics = reddit_source(&server).fetch().await.unwrap();
    assert_eq!(topics.len(), 5);
    assert_eq!(topics[4].text, "5");
}

#[tokio::test]
async fn reddit_token_rejection_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = reddit_source(&server).fetch().await.unwrap_err();
    assert!(
        matches!(err, SourceError::Auth { service: "reddit", status: 401 }),
        "expected Auth error, got: {err:?}"
    );
}

#[tokio::test]
async fn reddit_malformed_listing_is_deserialize_error() {
    let server = MockServer::start().await;
    mount_reddit_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/technology/hot"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = reddit_source(&server).fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::Deserialize { .. }));
}

#[tokio::test]
async fn reddit_failure_is_isolated_to_empty_batch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = reddit_source(&server);
    assert!(fetch_or_empty(&source).await.is_empty());
}

// ---------------------------------------------------------------------------
// X trends
// ---------------------------------------------------------------------------

#[tokio::test]
async fn x_returns_first_five_trend_names() {
    let server = MockServer::start().await;

    let trends: Vec<serde_json::Value> = (1..=8)
        .map(|i| json!({ "name": format!("#Trend{i}"), "tweet_volume": null }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/1.1/trends/place.json"))
        .and(query_param("id", "1"))
        .and(bearer_token("x-bearer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "trends": trends, "locations": [{ "name": "Worldwide", "woeid": 1 }] }
        ])))
        .mount(&server)
        .await;

    let topics = x_source(&server).fetch().await.expect("fetch should succeed");
    let names: Vec<&str> = topics.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(names, ["#Trend1", "#Trend2", "#Trend3", "#Trend4", "#Trend5"]);
}

#[tokio::test]
async fn x_empty_response_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.1/trends/place.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let topics = x_source(&server).fetch().await.expect("empty data is not an error");
    assert!(topics.is_empty());
}

#[tokio::test]
async fn x_forbidden_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.1/trends/place.json"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = x_source(&server).fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::Auth { service: "x", status: 403 }));
}

#[tokio::test]
async fn x_server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.1/trends/place.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = x_source(&server).fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::UnexpectedStatus { status: 503, .. }));
}

#[tokio::test]
async fn x_missing_token_fails_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let source = XTrendsSource::with_base_url(
        &Credentials::default(),
        5,
        "trendpost-test/0.1",
        &server.uri(),
    )
    .unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::MissingCredential("X_BEARER_TOKEN")));
}
