//! Block: one committed checkout event, linked to its predecessor by hash.
//!
//! A block is immutable once created. Its hash is a pure function of the
//! other four fields, so anyone holding the block can recompute and check it.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_payload_bytes;
use crate::checkout::CheckoutRecord;
use crate::error::CoreError;
use crate::hasher::Hasher;
use crate::types::BlockHash;

/// Position of the genesis block.
pub const GENESIS_POSITION: u64 = 0;

/// A hash-linked block.
///
/// The JSON form uses the field names `Position`, `Data`, `TimeStamp`,
/// `Hash` and `PrevHash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain (genesis = 0).
    #[serde(rename = "Position")]
    pub(crate) position: u64,

    /// The checkout event.
    #[serde(rename = "Data")]
    pub(crate) payload: CheckoutRecord,

    /// Creation time (Unix milliseconds).
    #[serde(rename = "TimeStamp")]
    pub(crate) timestamp: i64,

    /// Digest of this block's other fields.
    #[serde(rename = "Hash")]
    pub(crate) hash: BlockHash,

    /// Digest of the predecessor ([`BlockHash::ZERO`] for genesis).
    #[serde(rename = "PrevHash")]
    pub(crate) prev_hash: BlockHash,
}

impl Block {
    /// Build a block at `position` and seal it with its digest.
    pub(crate) fn seal(
        position: u64,
        payload: CheckoutRecord,
        timestamp: i64,
        prev_hash: BlockHash,
    ) -> Result<Self, CoreError> {
        let payload_bytes = canonical_payload_bytes(&payload)?;
        let hash = Hasher::digest(position, timestamp, &payload_bytes, &prev_hash)?;
        Ok(Self {
            position,
            payload,
            timestamp,
            hash,
            prev_hash,
        })
    }

    /// Reassemble a block from stored fields without recomputing its hash.
    ///
    /// The result is untrusted until checked with
    /// [`validate_block`](crate::validate_block).
    pub fn from_parts(
        position: u64,
        payload: CheckoutRecord,
        timestamp: i64,
        prev_hash: BlockHash,
        hash: BlockHash,
    ) -> Self {
        Self {
            position,
            payload,
            timestamp,
            hash,
            prev_hash,
        }
    }

    /// Get the position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Get the payload.
    pub fn payload(&self) -> &CheckoutRecord {
        &self.payload
    }

    /// Get the creation timestamp.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Get the block hash.
    pub fn hash(&self) -> &BlockHash {
        &self.hash
    }

    /// Get the predecessor hash.
    pub fn prev_hash(&self) -> &BlockHash {
        &self.prev_hash
    }

    /// Check if this block sits at the genesis position with a genesis payload.
    pub fn is_genesis(&self) -> bool {
        self.position == GENESIS_POSITION && self.payload.is_genesis
    }

    /// Recompute the digest from the stored fields.
    pub fn compute_hash(&self) -> Result<BlockHash, CoreError> {
        let payload_bytes = canonical_payload_bytes(&self.payload)?;
        Hasher::digest(self.position, self.timestamp, &payload_bytes, &self.prev_hash)
    }
}

/// Create the successor of `prev` carrying `payload`, stamped with the current time.
pub fn create_block(prev: &Block, payload: CheckoutRecord) -> Result<Block, CoreError> {
    create_block_at(prev, payload, now_millis())
}

/// Create the successor of `prev` with an explicit timestamp.
pub fn create_block_at(
    prev: &Block,
    payload: CheckoutRecord,
    timestamp: i64,
) -> Result<Block, CoreError> {
    let position = prev
        .position
        .checked_add(1)
        .ok_or(CoreError::PositionOverflow(prev.position))?;
    Block::seal(position, payload, timestamp, prev.hash)
}

/// Create a genesis block stamped with the current time.
pub fn genesis_block() -> Result<Block, CoreError> {
    genesis_block_at(now_millis())
}

/// Create a genesis block with an explicit timestamp.
pub fn genesis_block_at(timestamp: i64) -> Result<Block, CoreError> {
    Block::seal(
        GENESIS_POSITION,
        CheckoutRecord::genesis(),
        timestamp,
        BlockHash::ZERO,
    )
}

/// Get current time in milliseconds.
pub fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
