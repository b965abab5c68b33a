//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the tip API endpoints under a single Axum router with CORS and
//! request tracing layers. The browser frontend calls these endpoints
//! cross-origin, so CORS defaults to allowing any origin.

pub mod tips;

use axum::Json;
use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// API router with the given CORS policy.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/daily-tip", get(tips::daily_tip))
        .route("/api/tip-by-keyword", post(tips::tip_by_keyword))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer from a comma-separated origin list.
///
/// `None`, blank, or `*` allows any origin. Invalid origins are skipped.
#[must_use]
pub fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origins.map(str::trim) {
        None | Some("" | "*") => base.allow_origin(Any),
        Some(list) => {
            let allowed: Vec<HeaderValue> = list
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(%origin, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            base.allow_origin(AllowOrigin::list(allowed))
        }
    }
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Cyber Tip API is running" }))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
