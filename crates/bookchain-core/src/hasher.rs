//! Block digests: SHA-256 over the canonical block encoding.

use sha2::{Digest, Sha256};

use crate::canonical::canonical_block_bytes;
use crate::error::CoreError;
use crate::types::BlockHash;

/// Domain separation prefix for block digests.
pub const BLOCK_DOMAIN: &[u8] = b"bookchain/block/v1";

/// Deterministic digest function for blocks.
pub struct Hasher;

impl Hasher {
    /// Digest the four hashed fields of a block.
    ///
    /// `payload` must already be in canonical form (see
    /// [`canonical_payload_bytes`](crate::canonical::canonical_payload_bytes)).
    pub fn digest(
        position: u64,
        timestamp: i64,
        payload: &[u8],
        prev_hash: &BlockHash,
    ) -> Result<BlockHash, CoreError> {
        let preimage = canonical_block_bytes(position, timestamp, payload, prev_hash)?;
        Ok(Self::hash(&preimage))
    }

    /// Domain-separated SHA-256 of raw bytes.
    pub fn hash(data: &[u8]) -> BlockHash {
        let mut hasher = Sha256::new();
        hasher.update(BLOCK_DOMAIN);
        hasher.update(data);
        BlockHash(hasher.finalize().into())
    }
}
