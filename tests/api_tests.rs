mod common;

use axum::http::StatusCode;
use common::mocks::StubSource;
use common::{config_in, test_app, test_app_with};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials_body() -> Value {
    json!({
        "clientId": "86client",
        "clientSecret": "shh-secret",
        "accessToken": "AQV-access"
    })
}

// ============= Misc =============

#[tokio::test]
async fn test_health_check() {
    let app = test_app(Arc::new(StubSource::default()));

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_root_welcome() {
    let app = test_app(Arc::new(StubSource::default()));

    let response = app.server.get("/").await;
    response.assert_status_ok();
    response.assert_json(&json!({"message": "Welcome to Linkboard API"}));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = test_app(Arc::new(StubSource::default()));

    let response = app.server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let doc: Value = response.json();
    assert!(doc["paths"]["/api/linkedin/profile"].is_object());
}

// ============= Configuration =============

#[tokio::test]
async fn test_status_starts_unconfigured() {
    let app = test_app(Arc::new(StubSource::default()));

    let response = app.server.get("/api/config/status").await;
    response.assert_status_ok();
    let status: Value = response.json();
    assert_eq!(status["isConfigured"], false);
    assert!(status["lastUpdated"].is_null());

    app.server
        .get("/api/config/credentials")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_credentials_round_trip_and_clear() {
    let app = test_app(Arc::new(StubSource::default()));

    app.server
        .post("/api/config/credentials")
        .json(&credentials_body())
        .await
        .assert_status_ok();

    let status: Value = app.server.get("/api/config/status").await.json();
    assert_eq!(status["isConfigured"], true);
    assert!(status["lastUpdated"].is_string());

    let response = app.server.get("/api/config/credentials").await;
    response.assert_status_ok();
    response.assert_json(&credentials_body());

    let raw = std::fs::read_to_string(app.state.credentials.credentials_path()).unwrap();
    assert!(!raw.contains("shh-secret"), "secret must not be stored in plaintext");

    let response = app.server.delete("/api/config/credentials").await;
    response.assert_status_ok();
    response.assert_json(&json!({"message": "Credentials cleared successfully"}));

    let status: Value = app.server.get("/api/config/status").await.json();
    assert_eq!(status["isConfigured"], false);
    app.server
        .get("/api/config/credentials")
        .await
        .assert_status_not_found();

    // Clearing again is harmless
    app.server
        .delete("/api/config/credentials")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_save_accepts_snake_case() {
    let app = test_app(Arc::new(StubSource::default()));

    app.server
        .post("/api/config/credentials")
        .json(&json!({"client_id": "id", "client_secret": "secret", "access_token": "tok"}))
        .await
        .assert_status_ok();

    let creds: Value = app.server.get("/api/config/credentials").await.json();
    assert_eq!(creds["clientId"], "id");
    assert_eq!(creds["accessToken"], "tok");
}

#[tokio::test]
async fn test_save_rejects_blank_fields() {
    let app = test_app(Arc::new(StubSource::default()));

    let response = app
        .server
        .post("/api/config/credentials")
        .json(&json!({"clientId": "id", "clientSecret": "   ", "accessToken": ""}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn test_clear_overrides_environment_credentials() {
    std::env::set_var("LINKEDIN_CLIENT_ID", "env-id");
    std::env::set_var("LINKEDIN_CLIENT_SECRET", "env-secret");

    // Environment credentials are ignored unless enabled
    let app = test_app(Arc::new(StubSource::default()));
    let status: Value = app.server.get("/api/config/status").await.json();
    assert_eq!(status["isConfigured"], false);

    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);
    config.linkedin.env_credentials = true;
    let app = test_app_with(config, dir, Arc::new(StubSource::default()));

    let creds: Value = app.server.get("/api/config/credentials").await.json();
    assert_eq!(creds["clientId"], "env-id");

    app.server
        .post("/api/config/credentials")
        .json(&credentials_body())
        .await
        .assert_status_ok();
    app.server
        .delete("/api/config/credentials")
        .await
        .assert_status_ok();

    let status: Value = app.server.get("/api/config/status").await.json();
    assert_eq!(status["isConfigured"], false);
    app.server
        .get("/api/config/credentials")
        .await
        .assert_status_not_found();

    // Saving again lifts the clear
    app.server
        .post("/api/config/credentials")
        .json(&credentials_body())
        .await
        .assert_status_ok();
    let creds: Value = app.server.get("/api/config/credentials").await.json();
    assert_eq!(creds["clientId"], "86client");
}

// ============= LinkedIn data =============

#[tokio::test]
async fn test_linkedin_endpoints_require_credentials() {
    let app = test_app(Arc::new(StubSource::with_content()));

    for endpoint in [
        "/api/linkedin/profile",
        "/api/linkedin/posts",
        "/api/linkedin/articles",
        "/api/linkedin/analytics",
    ] {
        let response = app.server.get(endpoint).await;
        response.assert_status_unauthorized();
        response.assert_json(&json!({"error": "LinkedIn credentials not configured"}));
    }
}

#[tokio::test]
async fn test_posts_are_cached_between_requests() {
    let source = Arc::new(StubSource::with_content());
    let app = test_app(source.clone());
    app.state.credentials.save(&serde_json::from_value(credentials_body()).unwrap()).unwrap();

    let first: Value = app.server.get("/api/linkedin/posts").await.json();
    let second: Value = app.server.get("/api/linkedin/posts").await.json();

    assert_eq!(first, second);
    assert_eq!(first.as_array().unwrap().len(), 2);
    assert_eq!(first[0]["id"], "p1");
    assert_eq!(source.calls(), 1, "second read should come from the cache");
}

#[tokio::test]
async fn test_profile_and_articles() {
    let app = test_app(Arc::new(StubSource::with_content()));
    app.state.credentials.save(&serde_json::from_value(credentials_body()).unwrap()).unwrap();

    let profile: Value = app.server.get("/api/linkedin/profile").await.json();
    assert_eq!(profile["firstName"], "Grace");
    assert_eq!(profile["headline"], "Rear Admiral");

    let articles: Value = app.server.get("/api/linkedin/articles").await.json();
    assert_eq!(articles[0]["title"], "On debugging");
}

#[tokio::test]
async fn test_analytics_aggregates_posts_and_articles() {
    let app = test_app(Arc::new(StubSource::with_content()));
    app.state.credentials.save(&serde_json::from_value(credentials_body()).unwrap()).unwrap();

    let response = app.server.get("/api/linkedin/analytics").await;
    response.assert_status_ok();
    let analytics: Value = response.json();

    assert_eq!(analytics["totalPosts"], 3);
    assert_eq!(analytics["totalLikes"], 200);
    assert_eq!(analytics["totalComments"], 18);
    assert_eq!(analytics["totalShares"], 9);
    assert_eq!(analytics["engagementOverTime"].as_array().unwrap().len(), 2);
    assert_eq!(analytics["engagementOverTime"][1]["likes"], 160);
    assert_eq!(analytics["postPerformance"][0]["post"], "On debugging");
    assert_eq!(analytics["postPerformance"][1]["post"], "Nanoseconds explaine...");
    assert_eq!(analytics["engagementDistribution"][1]["name"], "Comments");
}

#[tokio::test]
async fn test_analytics_null_without_content() {
    let app = test_app(Arc::new(StubSource::default()));
    app.state.credentials.save(&serde_json::from_value(credentials_body()).unwrap()).unwrap();

    let response = app.server.get("/api/linkedin/analytics").await;
    response.assert_status_ok();
    response.assert_json(&Value::Null);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let app = test_app(Arc::new(StubSource::failing()));
    app.state.credentials.save(&serde_json::from_value(credentials_body()).unwrap()).unwrap();

    let response = app.server.get("/api/linkedin/profile").await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("boom"));
}

#[tokio::test]
async fn test_clearing_credentials_drops_cache() {
    let source = Arc::new(StubSource::with_content());
    let app = test_app(source.clone());
    app.state.credentials.save(&serde_json::from_value(credentials_body()).unwrap()).unwrap();

    app.server.get("/api/linkedin/posts").await.assert_status_ok();
    assert!(app.dir.path().join("data/posts.json").exists());

    app.server.delete("/api/config/credentials").await.assert_status_ok();
    assert!(!app.dir.path().join("data/posts.json").exists());
}

// ============= OAuth =============

#[tokio::test]
async fn test_login_requires_credentials() {
    let app = test_app(Arc::new(StubSource::default()));
    app.server.get("/api/auth/login").await.assert_status_unauthorized();
}

#[tokio::test]
async fn test_callback_rejects_unknown_state() {
    let app = test_app(Arc::new(StubSource::default()));
    app.state.credentials.save(&serde_json::from_value(credentials_body()).unwrap()).unwrap();

    let response = app
        .server
        .get("/api/auth/callback")
        .add_query_param("code", "abc")
        .add_query_param("state", "never-issued")
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({"error": "Invalid or expired OAuth state"}));
}

#[tokio::test]
async fn test_callback_reports_denied_consent() {
    let app = test_app(Arc::new(StubSource::default()));

    let response = app
        .server
        .get("/api/auth/callback")
        .add_query_param("error", "user_cancelled_login")
        .add_query_param("error_description", "The member declined")
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({"error": "The member declined"}));
}

#[tokio::test]
async fn test_oauth_flow_stores_access_token() {
    let linkedin = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accessToken"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=auth-code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-token",
            "expires_in": 5184000
        })))
        .expect(1)
        .mount(&linkedin)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);
    config.linkedin.oauth_base = linkedin.uri();
    let app = test_app_with(config, dir, Arc::new(StubSource::default()));
    app.state.credentials.save(&serde_json::from_value(credentials_body()).unwrap()).unwrap();

    let response = app.server.get("/api/auth/login").await;
    response.assert_status(StatusCode::SEE_OTHER);
    let location = response
        .header("location")
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with(&format!("{}/authorization?", linkedin.uri())));

    let url = reqwest::Url::parse(&location).unwrap();
    let state = url
        .query_pairs()
        .find(|(k, _)| k == "state")
        .map(|(_, v)| v.into_owned())
        .expect("state parameter");

    let response = app
        .server
        .get("/api/auth/callback")
        .add_query_param("code", "auth-code")
        .add_query_param("state", &state)
        .await;
    response.assert_status_ok();

    let stored = app.state.credentials.get().unwrap();
    assert_eq!(stored.access_token, "fresh-token");
    assert_eq!(stored.client_secret, "shh-secret");

    // A state is single use
    app.server
        .get("/api/auth/callback")
        .add_query_param("code", "auth-code")
        .add_query_param("state", &state)
        .await
        .assert_status_bad_request();
}
