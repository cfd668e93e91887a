use crate::api::handlers::{auth, config, linkedin};
use crate::types::{
    Analytics, Article, ConfigStatus, Credentials, DistributionSlice, EngagementPoint, Education,
    Experience, MessageResponse, Post, PostPerformance, Profile, Website,
};
use crate::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Linkboard API",
        description = "LinkedIn profile, content and engagement data with encrypted credential storage"
    ),
    paths(
        config::status,
        config::get_credentials,
        config::save_credentials,
        config::clear_credentials,
        linkedin::get_profile,
        linkedin::get_posts,
        linkedin::get_articles,
        linkedin::get_analytics,
        auth::login,
        auth::callback,
    ),
    components(schemas(
        Profile,
        Experience,
        Education,
        Website,
        Post,
        Article,
        Analytics,
        EngagementPoint,
        PostPerformance,
        DistributionSlice,
        Credentials,
        ConfigStatus,
        MessageResponse,
    )),
    tags(
        (name = "config", description = "LinkedIn credential storage"),
        (name = "linkedin", description = "Cached LinkedIn data"),
        (name = "auth", description = "LinkedIn OAuth flow"),
    )
)]
pub struct ApiDoc;

/// Routes mounted under `/api`
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/config/status", get(config::status))
        .route(
            "/config/credentials",
            get(config::get_credentials)
                .post(config::save_credentials)
                .delete(config::clear_credentials),
        )
        .route("/linkedin/profile", get(linkedin::get_profile))
        .route("/linkedin/posts", get(linkedin::get_posts))
        .route("/linkedin/articles", get(linkedin::get_articles))
        .route("/linkedin/analytics", get(linkedin::get_analytics))
        .route("/auth/login", get(auth::login))
        .route("/auth/callback", get(auth::callback))
}

/// The complete application: API, health, docs, CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origins);

    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", create_router());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    );

    #[cfg(feature = "ui")]
    let router = router.fallback(crate::api::ui::static_handler);

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to Linkboard API"))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinkboardConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app(dir: &tempfile::TempDir, origins: &[&str]) -> Router {
        let mut config = LinkboardConfig::default();
        config.storage.config_dir = dir.path().join("config");
        config.storage.data_dir = dir.path().join("data");
        config.server.cors_origins = origins.iter().map(|o| o.to_string()).collect();
        build_router(AppState::from_config(config).unwrap())
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/config/status")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin_only() {
        let dir = tempfile::tempdir().unwrap();
        let router = app(&dir, &["http://localhost:8080", "not a header\n"]);

        let allowed = router
            .clone()
            .oneshot(preflight("http://localhost:8080"))
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:8080"
        );

        let denied = router.oneshot(preflight("http://evil.test")).await.unwrap();
        assert!(!denied
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_wildcard_origin() {
        let dir = tempfile::tempdir().unwrap();

        let response = app(&dir, &["*"])
            .oneshot(preflight("http://anywhere.test"))
            .await
            .unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();

        let response = app(&dir, &["*"])
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/config/status",
            "/api/config/credentials",
            "/api/linkedin/profile",
            "/api/linkedin/posts",
            "/api/linkedin/articles",
            "/api/linkedin/analytics",
            "/api/auth/login",
            "/api/auth/callback",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
