//! Operational routes: liveness, database readiness and build version.

use crate::error::AppError;
use crate::response::{self, Envelope, Reply};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
pub struct Version {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Reply<HealthStatus> {
    response::ok(HealthStatus {
        status: "ok",
        database: None,
    })
}

/// 503 while the database does not answer.
async fn ready(State(state): State<AppState>) -> Reply<HealthStatus> {
    if let Err(e) = sqlx::query("SELECT 1").execute(&state.pool).await {
        tracing::warn!(error = %AppError::from(e), "readiness check failed");
        let mut body = Envelope::error("Database unavailable");
        body.data = Some(HealthStatus {
            status: "degraded",
            database: Some("unavailable"),
        });
        return (StatusCode::SERVICE_UNAVAILABLE, Json(body));
    }
    response::ok(HealthStatus {
        status: "ok",
        database: Some("ok"),
    })
}

async fn version() -> Reply<Version> {
    response::ok(Version {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health and GET /version. Needs no state.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// [`common_routes`] plus GET /ready, which pings the pool.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(common_routes())
}
