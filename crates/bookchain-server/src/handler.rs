use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json};
use bookchain::{parse_book, register_book, Block, SubmitOutcome};
use serde::Serialize;

use crate::error::{ServerError, ServerResult};
use crate::server::AppState;

/// GET /: every block, genesis first.
pub async fn list_blocks(State(state): State<AppState>) -> ServerResult<impl IntoResponse> {
    let body = state.ledger.snapshot_json(state.pretty_json)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// POST /: submit a checkout.
pub async fn submit_checkout(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<Block>)> {
    match state.ledger.submit_json(&body)? {
        SubmitOutcome::Committed(block) => Ok((StatusCode::CREATED, Json(block))),
        SubmitOutcome::Rejected(reason) => Err(ServerError::Rejected(reason)),
    }
}

/// POST /new: mint a catalog ID for a book.
pub async fn new_book(body: Bytes) -> ServerResult<impl IntoResponse> {
    let book = register_book(parse_book(&body)?)?;
    let body = serde_json::to_string_pretty(&book)
        .map_err(|e| ServerError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub ok: bool,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /validate: re-verify the whole chain.
pub async fn validate_chain(State(state): State<AppState>) -> ServerResult<Json<ValidateResponse>> {
    let report = state.ledger.verify()?;
    Ok(Json(ValidateResponse {
        ok: report.is_ok(),
        length: report.length,
        error: report.error.map(|e| e.to_string()),
    }))
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}
