//! Router assembly: operational routes at the root, resources under `/api`.

mod api;
mod common;

pub use api::api_routes;
pub use common::{common_routes, common_routes_with_ready};

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// The complete application with body limit, request tracing and CORS applied.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", api_routes(state))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}

/// Any origin when `origins` is empty; otherwise only the listed ones.
/// Unparsable entries are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;
    use tower::ServiceExt;

    /// Never connects unless a handler reaches the store, and then fails fast.
    fn lazy_pool() -> sqlx::PgPool {
        PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(300))
            .connect_lazy("postgres://127.0.0.1:1/mining_cms_unreachable")
            .unwrap()
    }

    fn test_app() -> Router {
        app(AppState::new(lazy_pool()), &ServerConfig::default())
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let resp = test_app().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_enveloped() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn version_reports_package() {
        let (status, body) = send(get("/version")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "mining-cms");
    }

    #[tokio::test]
    async fn contact_without_required_fields_is_rejected() {
        for payload in [
            r#"{"name":"Ana"}"#,
            r#"{"name":"Ana","email":"a@b.c","message":""}"#,
            "{}",
        ] {
            let (status, body) = send(post_json("/api/contact", payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["status"], "error");
            assert_eq!(body["error"], "Name, email, and message are required");
        }
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let (status, body) = send(get("/api/articles/not-a-uuid")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Article not found");

        let req = Request::delete("/api/team/42").body(Body::empty()).unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Team member not found");
    }

    #[tokio::test]
    async fn malformed_job_id_on_applications_is_not_found() {
        let (status, body) = send(get("/api/jobs/xyz/applications")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Job not found");
    }

    #[tokio::test]
    async fn bad_query_is_a_bad_request() {
        let (status, body) = send(get("/api/articles?limit=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");

        let (status, _) = send(get("/api/jobs?status=paused")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_query_values_pass_extraction() {
        // Reaching the (unreachable) store proves the query was accepted.
        let (status, body) = send(get("/api/articles?status=&limit=")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch articles");

        let (status, _) = send(get("/api/jobs/open?limit=&offset=")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_status_in_path_is_a_bad_request() {
        let (status, body) = send(get("/api/projects/status/paused")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown project status 'paused'");
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let (status, body) = send(post_json("/api/articles", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn newsletter_requires_email() {
        let (status, body) = send(post_json("/api/newsletter", r#"{"name":"Ana"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Email is required");

        let (status, _) = send(post_json("/api/newsletter/unsubscribe", "{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cors_allows_listed_origin() {
        let pool = lazy_pool();
        let config = ServerConfig {
            cors_origins: vec!["https://mining.example".into(), "bad\norigin".into()],
            ..ServerConfig::default()
        };
        let req = Request::get("/health")
            .header("origin", "https://mining.example")
            .body(Body::empty())
            .unwrap();
        let resp = app(AppState::new(pool), &config).oneshot(req).await.unwrap();
        assert_eq!(
            resp.headers().get("access-control-allow-origin").unwrap(),
            "https://mining.example"
        );
    }
}
