//! Error types for the Ledger.

use bookchain_core::{ChainError, CoreError};
use thiserror::Error;

/// Errors that can occur during Ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The submission could not be turned into a checkout record.
    /// The chain was not touched.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Chain-wide verification failed.
    #[error("chain integrity violation: {0}")]
    ChainIntegrity(#[from] ChainError),

    /// Encoding a block or snapshot failed. No partial output was produced.
    #[error("serialization failure: {0}")]
    Serialization(String),

    /// Core error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A writer panicked while holding the chain lock.
    #[error("ledger lock poisoned")]
    Poisoned,
}

impl From<serde_json::Error> for LedgerError {
    fn from(e: serde_json::Error) -> Self {
        LedgerError::Serialization(e.to_string())
    }
}

/// Result type for Ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
