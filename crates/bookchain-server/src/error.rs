use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookchain::{LedgerError, ValidationError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("checkout rejected: {0}")]
    Rejected(ValidationError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Ledger(LedgerError::MalformedInput(_)) => StatusCode::BAD_REQUEST,
            ServerError::Rejected(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request refused");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use bookchain::{BlockHash, ChainError};

    #[test]
    fn test_status_codes() {
        let malformed = ServerError::Ledger(LedgerError::MalformedInput("bad".into()));
        assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

        let rejected = ServerError::Rejected(ValidationError::PrevHashMismatch {
            expected: BlockHash::ZERO,
            got: BlockHash::from_bytes([1; 32]),
        });
        assert_eq!(rejected.status(), StatusCode::CONFLICT);

        for err in [
            ServerError::Ledger(LedgerError::Poisoned),
            ServerError::Ledger(LedgerError::Serialization("x".into())),
            ServerError::Ledger(LedgerError::ChainIntegrity(ChainError::Empty)),
            ServerError::Config("x".into()),
            ServerError::Internal("x".into()),
        ] {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR, "{err}");
        }
    }

    #[tokio::test]
    async fn test_rejected_response_body() {
        let response =
            ServerError::Rejected(ValidationError::UnexpectedGenesis(3)).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("checkout rejected"));
    }
}
