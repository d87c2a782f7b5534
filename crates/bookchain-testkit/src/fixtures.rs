//! Test fixtures and helpers.
//!
//! Chains built here use fixed timestamps so their hashes are reproducible.

use bookchain::Ledger;
use bookchain_core::{create_block_at, genesis_block_at, Block, Chain, CheckoutRecord};

/// 2024-01-01T00:00:00Z in milliseconds.
pub const BASE_TIMESTAMP: i64 = 1_704_067_200_000;

/// A chain whose blocks are stamped one second apart from [`BASE_TIMESTAMP`].
pub struct TestFixture {
    pub chain: Chain,
    next_timestamp: i64,
}

impl TestFixture {
    /// Create a fixture holding only a genesis block.
    pub fn new() -> Self {
        Self::starting_at(BASE_TIMESTAMP)
    }

    /// Create a fixture whose genesis is stamped `timestamp`.
    pub fn starting_at(timestamp: i64) -> Self {
        let genesis = genesis_block_at(timestamp).expect("genesis encodes");
        Self {
            chain: Chain::with_genesis(genesis).expect("fresh genesis is valid"),
            next_timestamp: timestamp + 1_000,
        }
    }

    /// Build the next block without committing it.
    pub fn candidate(&self, record: CheckoutRecord) -> Block {
        create_block_at(self.chain.tip(), record, self.next_timestamp).expect("block encodes")
    }

    /// Append a checkout and return the committed block.
    pub fn checkout(&mut self, book_id: &str, user: &str) -> Block {
        let date = format!("day-{}", self.chain.len());
        let candidate = self.candidate(CheckoutRecord::new(book_id, user, date));
        self.next_timestamp += 1_000;
        self.chain
            .commit(candidate)
            .expect("fixture block is valid")
            .clone()
    }

    /// Append `count` checkouts by distinct users.
    pub fn with_checkouts(count: usize) -> Self {
        let mut fixture = Self::new();
        for i in 0..count {
            fixture.checkout(&format!("book-{}", i % 7), &format!("user-{i}"));
        }
        fixture
    }

    /// Move the chain into a [`Ledger`] with default configuration.
    pub fn into_ledger(self) -> Ledger {
        Ledger::with_chain(self.chain, Default::default())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize `block`, let `edit` change the JSON, and read it back.
///
/// This is how tests forge blocks the public API will not build.
pub fn tampered_json(block: &Block, edit: impl FnOnce(&mut serde_json::Value)) -> Block {
    let mut json = serde_json::to_value(block).expect("block serializes");
    edit(&mut json);
    serde_json::from_value(json).expect("edited block deserializes")
}
