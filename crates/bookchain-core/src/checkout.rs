//! Checkout records: the payload carried by every block.

use serde::{Deserialize, Serialize};

/// A single book-checkout event.
///
/// Once embedded in a [`Block`](crate::Block) the record is never edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CheckoutRecord {
    /// Catalog identifier of the book.
    pub book_id: String,

    /// Who checked the book out.
    pub user: String,

    /// Caller-supplied checkout date. Opaque to the chain.
    pub checkout_date: String,

    /// Set only on the genesis payload.
    #[serde(default)]
    pub is_genesis: bool,
}

impl CheckoutRecord {
    /// Create a regular (non-genesis) checkout record.
    pub fn new(
        book_id: impl Into<String>,
        user: impl Into<String>,
        checkout_date: impl Into<String>,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            user: user.into(),
            checkout_date: checkout_date.into(),
            is_genesis: false,
        }
    }

    /// The payload of the genesis block.
    pub fn genesis() -> Self {
        Self {
            is_genesis: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_record() {
        let g = CheckoutRecord::genesis();
        assert!(g.is_genesis);
        assert!(g.book_id.is_empty());
        assert!(g.user.is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let record = CheckoutRecord::new("b1", "alice", "2024-01-01");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["book_id"], "b1");
        assert_eq!(json["user"], "alice");
        assert_eq!(json["checkout_date"], "2024-01-01");
        assert_eq!(json["is_genesis"], false);
    }

    #[test]
    fn test_is_genesis_defaults_to_false() {
        let record: CheckoutRecord =
            serde_json::from_str(r#"{"book_id":"b1","user":"bob","checkout_date":"x"}"#).unwrap();
        assert!(!record.is_genesis);
    }
}
