//! Catalog identifiers for books.
//!
//! Unrelated to the chain itself: a book's ID is minted from its ISBN and
//! publish date so the same edition always gets the same ID.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 32-byte catalog identifier.
///
/// Derived from Blake3(domain || len(isbn) || isbn || len(publish_date) || publish_date),
/// with lengths as big-endian u64.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub [u8; 32]);

impl BookId {
    /// Derive a book ID from its ISBN and publish date.
    pub fn derive(isbn: &str, publish_date: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"bookchain-book-v1:");
        for field in [isbn, publish_date] {
            hasher.update(&(field.len() as u64).to_be_bytes());
            hasher.update(field.as_bytes());
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for BookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// A book submitted to the catalog, before it has an ID.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default)]
    pub isbn: String,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub isbn: String,
}

impl From<NewBook> for Book {
    fn from(new: NewBook) -> Self {
        Self {
            id: BookId::derive(&new.isbn, &new.publish_date),
            title: new.title,
            author: new.author,
            publish_date: new.publish_date,
            isbn: new.isbn,
        }
    }
}
