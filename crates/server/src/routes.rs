//! API route handlers
//!
//! Bodies are taken as raw bytes and handed to the engine's document
//! parser, so a malformed body is forecast like an empty document.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use forecast_facade::Scenario;
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ScenarioQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Serialize `body` as a JSON response, or a 500 carrying the error.
fn json_response<T: Serialize>(body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "response serialization failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn forecast(State(state): State<AppState>, body: Bytes) -> Response {
    let document = state.engine.run_bytes(&body);
    json_response(&document)
}

pub async fn scenario(
    State(state): State<AppState>,
    Query(query): Query<ScenarioQuery>,
    body: Bytes,
) -> Response {
    let document = state.engine.run_scenario(&body, query.name.as_deref());
    json_response(&document)
}

pub async fn scenarios() -> Response {
    json_response(&Scenario::builtin())
}
