//! Tip routes.
//!
//! The two endpoints apply different failure policies: the daily tip
//! answers `200` with `success: false`, while the keyword tip answers `500`
//! with a `detail` message.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::services::cache::today_utc;
use crate::services::tip::TipError;
use crate::state::AppState;
use crate::tip::StructuredTip;

/// Message returned by the daily endpoint when generation fails.
pub const DAILY_FAILURE_MESSAGE: &str = "Failed to generate tip";

/// Response body shared by both tip endpoints.
#[derive(Debug, Serialize)]
pub struct TipEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StructuredTip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TipEnvelope {
    fn ok(tip: StructuredTip) -> Self {
        Self { success: true, data: Some(tip), error: None }
    }

    fn failed(message: &str) -> Self {
        Self { success: false, data: None, error: Some(message.to_string()) }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TipRequest {
    #[serde(default)]
    pub keyword: String,
}

/// `GET /api/daily-tip` — today's tip, served from the daily cache when warm.
pub async fn daily_tip(State(state): State<AppState>) -> Json<TipEnvelope> {
    match state.tips.daily_tip(today_utc()).await {
        Ok(tip) => Json(TipEnvelope::ok(tip)),
        Err(e) => {
            warn!(error = %e, "daily tip generation failed");
            Json(TipEnvelope::failed(DAILY_FAILURE_MESSAGE))
        }
    }
}

/// `POST /api/tip-by-keyword` — a fresh tip about the requested keyword.
pub async fn tip_by_keyword(
    State(state): State<AppState>,
    Json(request): Json<TipRequest>,
) -> Result<Json<TipEnvelope>, (StatusCode, Json<Value>)> {
    match state.tips.tip_by_keyword(&request.keyword).await {
        Ok(tip) => Ok(Json(TipEnvelope::ok(tip))),
        Err(e) => {
            error!(error = %e, keyword = %request.keyword, "keyword tip generation failed");
            Err(tip_error_response(&e))
        }
    }
}

pub(crate) fn tip_error_response(err: &TipError) -> (StatusCode, Json<Value>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": format!("Error: {err}") })))
}

#[cfg(test)]
#[path = "tips_test.rs"]
mod tests;
