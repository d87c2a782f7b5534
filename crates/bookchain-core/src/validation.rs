//! Block validation: linkage and hash checks.

use crate::block::{Block, GENESIS_POSITION};
use crate::error::{ChainError, ValidationError};
use crate::types::BlockHash;

/// Validate `candidate` as the direct successor of `prev`.
///
/// This performs, in order:
/// - Linkage: `candidate.prev_hash == prev.hash`
/// - Hash: recomputing the digest over `candidate`'s fields reproduces `candidate.hash`
/// - Position: `candidate.position == prev.position + 1`
/// - Payload: only position 0 may carry the genesis payload
pub fn validate_block(candidate: &Block, prev: &Block) -> Result<(), ValidationError> {
    // 1. Linkage
    if candidate.prev_hash != prev.hash {
        return Err(ValidationError::PrevHashMismatch {
            expected: prev.hash,
            got: candidate.prev_hash,
        });
    }

    // 2. Hash
    check_hash(candidate)?;

    // 3. Position
    let expected = prev
        .position
        .checked_add(1)
        .ok_or(ValidationError::PositionOverflow(prev.position))?;
    if candidate.position != expected {
        return Err(ValidationError::PositionMismatch {
            expected,
            got: candidate.position,
        });
    }

    // 4. Payload
    if candidate.payload.is_genesis {
        return Err(ValidationError::UnexpectedGenesis(candidate.position));
    }

    Ok(())
}

/// Boolean form of [`validate_block`]. No partial success.
pub fn is_valid(candidate: &Block, prev: &Block) -> bool {
    validate_block(candidate, prev).is_ok()
}

/// Validate a genesis block on its own.
///
/// Genesis has no predecessor; it must sit at position 0, point at the zero
/// hash, carry the genesis payload, and hash correctly.
pub fn validate_genesis(block: &Block) -> Result<(), ValidationError> {
    if block.position != GENESIS_POSITION {
        return Err(ValidationError::PositionMismatch {
            expected: GENESIS_POSITION,
            got: block.position,
        });
    }
    if block.prev_hash != BlockHash::ZERO {
        return Err(ValidationError::PrevHashMismatch {
            expected: BlockHash::ZERO,
            got: block.prev_hash,
        });
    }
    if !block.payload.is_genesis {
        return Err(ValidationError::NotGenesis("payload is not marked as genesis"));
    }
    check_hash(block)
}

/// Validate an entire sequence of blocks, genesis first.
///
/// Returns the first failing index.
pub fn validate_chain(blocks: &[Block]) -> Result<(), ChainError> {
    let genesis = blocks.first().ok_or(ChainError::Empty)?;
    validate_genesis(genesis).map_err(|source| ChainError::InvalidBlock { index: 0, source })?;

    for (i, pair) in blocks.windows(2).enumerate() {
        validate_block(&pair[1], &pair[0]).map_err(|source| ChainError::InvalidBlock {
            index: i + 1,
            source,
        })?;
    }

    Ok(())
}

fn check_hash(block: &Block) -> Result<(), ValidationError> {
    let computed = block.compute_hash()?;
    if computed != block.hash {
        return Err(ValidationError::HashMismatch {
            stored: block.hash,
            computed,
        });
    }
    Ok(())
}
