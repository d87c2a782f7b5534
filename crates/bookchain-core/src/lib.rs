//! # Bookchain Core
//!
//! Pure primitives for Bookchain: checkout records, hash-linked blocks, and
//! chain validation.
//!
//! This crate contains no I/O, no locking, no networking. It is pure
//! computation over hash-linked data structures.
//!
//! ## Key Types
//!
//! - [`CheckoutRecord`] - The payload of a block
//! - [`Block`] - An immutable, hash-linked record
//! - [`BlockHash`] - SHA-256 digest of a block's canonical encoding
//! - [`Chain`] - Ordered, append-only sequence of blocks anchored by genesis
//! - [`BookId`] - Deterministic catalog identifier
//!
//! ## Canonicalization
//!
//! Every hashed field is encoded using deterministic CBOR. See [`canonical`] module.

pub mod block;
pub mod canonical;
pub mod catalog;
pub mod chain;
pub mod checkout;
pub mod error;
pub mod hasher;
pub mod types;
pub mod validation;

pub use block::{
    create_block, create_block_at, genesis_block, genesis_block_at, now_millis, Block,
    GENESIS_POSITION,
};
pub use canonical::{canonical_block_bytes, canonical_payload_bytes};
pub use catalog::{Book, BookId, NewBook};
pub use chain::{Chain, RejectedBlock};
pub use checkout::CheckoutRecord;
pub use error::{ChainError, CoreError, ValidationError};
pub use hasher::Hasher;
pub use types::BlockHash;
pub use validation::{is_valid, validate_block, validate_chain, validate_genesis};
