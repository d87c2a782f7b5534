//! Proptest generators for property-based testing.

use proptest::prelude::*;

use bookchain_core::{create_block_at, genesis_block_at, Block, BlockHash, CheckoutRecord};

/// Generate a random BlockHash.
pub fn block_hash() -> impl Strategy<Value = BlockHash> {
    any::<[u8; 32]>().prop_map(BlockHash::from_bytes)
}

/// Generate a reasonable timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=4_102_444_800_000i64
}

/// Generate an identifier-like string.
pub fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}".prop_map(String::from)
}

/// Generate free text, including non-ASCII characters.
pub fn free_text() -> impl Strategy<Value = String> {
    ".{0,32}".prop_map(String::from)
}

/// Generate a non-genesis checkout record.
pub fn checkout_record() -> impl Strategy<Value = CheckoutRecord> {
    (identifier(), identifier(), free_text())
        .prop_map(|(book, user, date)| CheckoutRecord::new(book, user, date))
}

/// Generate a checkout submission as a JSON body.
pub fn submission_json() -> impl Strategy<Value = Vec<u8>> {
    checkout_record().prop_map(|record| {
        serde_json::to_vec(&serde_json::json!({
            "book_id": record.book_id,
            "user": record.user,
            "checkout_date": record.checkout_date,
        }))
        .unwrap_or_default()
    })
}

/// Parameters for generating a chain.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub genesis_timestamp: i64,
    pub records: Vec<CheckoutRecord>,
}

impl ChainParams {
    /// Build the blocks, one second apart.
    pub fn build(&self) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(self.records.len() + 1);
        let Ok(genesis) = genesis_block_at(self.genesis_timestamp) else {
            return blocks;
        };
        blocks.push(genesis);

        for (i, record) in self.records.iter().enumerate() {
            let ts = self.genesis_timestamp + 1_000 * (i as i64 + 1);
            let Some(prev) = blocks.last() else { break };
            match create_block_at(prev, record.clone(), ts) {
                Ok(block) => blocks.push(block),
                Err(_) => break,
            }
        }
        blocks
    }
}

impl Arbitrary for ChainParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            timestamp(),
            prop::collection::vec(checkout_record(), 0..12),
        )
            .prop_map(|(genesis_timestamp, records)| ChainParams {
                genesis_timestamp,
                records,
            })
            .boxed()
    }
}
