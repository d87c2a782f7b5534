//! # Bookchain
//!
//! The unified API for Bookchain - an append-only, hash-linked ledger of
//! book-checkout events.
//!
//! ## Overview
//!
//! - **Blocks**: Immutable records linked to their predecessor by SHA-256
//! - **Chain**: Ordered sequence of blocks, anchored by a genesis block
//! - **Ledger**: Shared handle that serializes appends and serves snapshots
//! - **Ingestion**: Turns client submissions into checkout records
//!
//! ## Usage
//!
//! ```rust
//! use bookchain::{CheckoutRecord, Ledger, LedgerConfig};
//!
//! let ledger = Ledger::new(LedgerConfig::default()).unwrap();
//!
//! let outcome = ledger
//!     .submit_checkout(CheckoutRecord::new("b1", "alice", "2024-01-01"))
//!     .unwrap();
//! assert!(outcome.is_committed());
//!
//! let blocks = ledger.list_blocks().unwrap();
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[1].prev_hash(), blocks[0].hash());
//! ```
//!
//! ## Re-exports
//!
//! - `bookchain::core` - Core primitives (Block, Chain, Hasher, etc.)

pub mod error;
pub mod ingest;
pub mod ledger;

// Re-export component crates
pub use bookchain_core as core;

// Re-export main types for convenience
pub use error::{LedgerError, Result};
pub use ingest::{check_record, parse_book, parse_checkout, register_book, CheckoutSubmission};
pub use ledger::{ChainReport, Ledger, LedgerConfig, SubmitOutcome};

// Re-export commonly used core types
pub use bookchain_core::{
    is_valid, validate_chain, Block, BlockHash, Book, BookId, Chain, ChainError, CheckoutRecord,
    NewBook, ValidationError,
};
