//! Operational routes next to the item API: liveness, store readiness and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Body shared by `/health` and `/ready`; `store` is only reported by readiness.
#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(rename = "database", skip_serializing_if = "Option::is_none")]
    store: Option<&'static str>,
}

impl StatusBody {
    const LIVE: StatusBody = StatusBody { status: "ok", store: None };
    const READY: StatusBody = StatusBody { status: "ok", store: Some("ok") };
    const DEGRADED: StatusBody = StatusBody {
        status: "degraded",
        store: Some("unavailable"),
    };
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn live() -> Json<StatusBody> {
    Json(StatusBody::LIVE)
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    match state.items.store().ping().await {
        Ok(()) => (StatusCode::OK, Json(StatusBody::READY)),
        Err(e) => {
            tracing::warn!(error = %e, "store ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(StatusBody::DEGRADED))
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready (pings the injected store), GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
