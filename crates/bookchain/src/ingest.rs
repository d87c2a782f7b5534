//! Ingestion boundary: external submissions in, checkout records out.
//!
//! Anything that cannot become a well-formed [`CheckoutRecord`] is reported as
//! [`LedgerError::MalformedInput`] before the chain is touched.

use bookchain_core::{Book, CheckoutRecord, NewBook};
use serde::Deserialize;

use crate::error::{LedgerError, Result};

/// A checkout as submitted by a client.
///
/// Every field is optional on the wire so that missing fields surface through
/// [`check_record`] with a useful message rather than a parser error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutSubmission {
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub checkout_date: String,
    #[serde(default)]
    pub is_genesis: bool,
}

impl From<CheckoutSubmission> for CheckoutRecord {
    fn from(s: CheckoutSubmission) -> Self {
        CheckoutRecord {
            book_id: s.book_id,
            user: s.user,
            checkout_date: s.checkout_date,
            is_genesis: s.is_genesis,
        }
    }
}

/// Parse a JSON checkout submission.
pub fn parse_checkout(body: &[u8]) -> Result<CheckoutRecord> {
    let submission: CheckoutSubmission = serde_json::from_slice(body)
        .map_err(|e| LedgerError::MalformedInput(e.to_string()))?;
    Ok(submission.into())
}

/// Check that a record may be appended.
///
/// Only the chain mints a genesis payload, so a submitted record claiming to
/// be genesis is always refused. Blank identifiers are refused when
/// `require_fields` is set.
pub fn check_record(record: &CheckoutRecord, require_fields: bool) -> Result<()> {
    if record.is_genesis {
        return Err(LedgerError::MalformedInput(
            "submitted checkout cannot be a genesis record".into(),
        ));
    }

    if require_fields {
        if record.book_id.trim().is_empty() {
            return Err(LedgerError::MalformedInput("book_id is required".into()));
        }
        if record.user.trim().is_empty() {
            return Err(LedgerError::MalformedInput("user is required".into()));
        }
    }

    Ok(())
}

/// Parse a JSON book submission.
pub fn parse_book(body: &[u8]) -> Result<NewBook> {
    serde_json::from_slice(body).map_err(|e| LedgerError::MalformedInput(e.to_string()))
}

/// Mint a catalog entry for a new book.
///
/// The ID depends only on ISBN and publish date. Nothing is stored.
pub fn register_book(new: NewBook) -> Result<Book> {
    if new.isbn.trim().is_empty() {
        return Err(LedgerError::MalformedInput("isbn is required".into()));
    }
    Ok(Book::from(new))
}
