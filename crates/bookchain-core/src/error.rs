//! Error types for Bookchain Core.

use thiserror::Error;

use crate::types::BlockHash;

/// Core errors that can occur while building blocks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("no position follows {0}")]
    PositionOverflow(u64),
}

/// Validation errors for a block checked against its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("prev_hash mismatch: expected {expected:?}, got {got:?}")]
    PrevHashMismatch { expected: BlockHash, got: BlockHash },

    #[error("hash mismatch: stored {stored:?}, recomputed {computed:?}")]
    HashMismatch {
        stored: BlockHash,
        computed: BlockHash,
    },

    #[error("invalid position: expected {expected}, got {got}")]
    PositionMismatch { expected: u64, got: u64 },

    #[error("not a genesis block: {0}")]
    NotGenesis(&'static str),

    #[error("genesis payload at position {0}")]
    UnexpectedGenesis(u64),

    #[error("no position follows {0}")]
    PositionOverflow(u64),

    #[error("block could not be encoded: {0}")]
    Encoding(String),
}

impl From<CoreError> for ValidationError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::EncodingError(msg) => ValidationError::Encoding(msg),
            CoreError::PositionOverflow(position) => ValidationError::PositionOverflow(position),
        }
    }
}

/// Errors from chain-wide verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("chain has no genesis block")]
    Empty,

    #[error("block at index {index} is invalid: {source}")]
    InvalidBlock {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

impl ChainError {
    /// Index of the offending block, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            ChainError::Empty => None,
            ChainError::InvalidBlock { index, .. } => Some(*index),
        }
    }
}
