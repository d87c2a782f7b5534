//! HTTP server for Bookchain.
//!
//! Exposes the ledger over HTTP: list blocks, submit checkouts, mint book
//! IDs, and re-verify the chain.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{AppState, BookchainServer};
