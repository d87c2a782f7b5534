//! Chain: an ordered, append-only sequence of blocks anchored by genesis.
//!
//! The chain is never empty and never reordered. Blocks are only added at the
//! tail, and only after they validate against the current tip.

use thiserror::Error;

use crate::block::{create_block, genesis_block, Block};
use crate::checkout::CheckoutRecord;
use crate::error::{ChainError, CoreError, ValidationError};
use crate::validation::{validate_block, validate_chain, validate_genesis};

/// A candidate block that failed validation and was discarded.
///
/// The chain is unchanged when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("block rejected: {reason}")]
pub struct RejectedBlock {
    /// The discarded candidate, if one could be built.
    pub candidate: Option<Block>,
    /// Why it was rejected.
    pub reason: ValidationError,
}

impl RejectedBlock {
    fn new(candidate: Option<Block>, reason: ValidationError) -> Self {
        Self { candidate, reason }
    }
}

/// An in-memory hash chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain holding a freshly stamped genesis block.
    pub fn new() -> Result<Self, CoreError> {
        Ok(Self {
            blocks: vec![genesis_block()?],
        })
    }

    /// Create a chain from a given genesis block.
    ///
    /// The block must pass [`validate_genesis`].
    pub fn with_genesis(genesis: Block) -> Result<Self, ValidationError> {
        validate_genesis(&genesis)?;
        Ok(Self {
            blocks: vec![genesis],
        })
    }

    /// Build a candidate successor to the current tip. Does not commit it.
    pub fn candidate(&self, payload: CheckoutRecord) -> Result<Block, CoreError> {
        create_block(self.tip(), payload)
    }

    /// Create a block for `payload` against the tip and commit it if valid.
    pub fn append(&mut self, payload: CheckoutRecord) -> Result<&Block, RejectedBlock> {
        let candidate = self
            .candidate(payload)
            .map_err(|e| RejectedBlock::new(None, e.into()))?;
        self.commit(candidate)
    }

    /// Commit a candidate built elsewhere.
    ///
    /// The candidate must validate against the tip as it is now. A candidate
    /// built against a tip that has since moved is rejected.
    pub fn commit(&mut self, candidate: Block) -> Result<&Block, RejectedBlock> {
        if let Err(reason) = validate_block(&candidate, self.tip()) {
            return Err(RejectedBlock::new(Some(candidate), reason));
        }
        self.blocks.push(candidate);
        Ok(self.tip())
    }

    /// The last block.
    pub fn tip(&self) -> &Block {
        // The constructors guarantee at least the genesis block.
        &self.blocks[self.blocks.len() - 1]
    }

    /// The first block.
    pub fn genesis(&self) -> &Block {
        &self.blocks[0]
    }

    /// Get the block at `position`.
    pub fn get(&self, position: u64) -> Option<&Block> {
        usize::try_from(position)
            .ok()
            .and_then(|idx| self.blocks.get(idx))
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false: a chain holds at least its genesis block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate blocks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Borrow the blocks as a slice.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// An owned copy of every block, in order.
    pub fn snapshot(&self) -> Vec<Block> {
        self.blocks.clone()
    }

    /// Re-validate every block from genesis to tip.
    pub fn verify(&self) -> Result<(), ChainError> {
        validate_chain(&self.blocks)
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
