//! The Ledger: the shared handle the service layer holds.
//!
//! The Ledger owns the [`Chain`] behind a lock. Appends take the write lock
//! around read-tip, validate, and commit, so two appends can never both
//! succeed against the same tip. Reads take the read lock and copy.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bookchain_core::{Block, Chain, ChainError, CheckoutRecord, RejectedBlock, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{LedgerError, Result};
use crate::ingest::{check_record, parse_checkout};

/// Configuration for the Ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Whether to refuse submissions with a blank `book_id` or `user`.
    pub validate_on_ingest: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            validate_on_ingest: true,
        }
    }
}

/// Result of submitting a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The block was validated and is now the tip.
    Committed(Block),
    /// The candidate failed validation and was discarded. The chain is unchanged.
    Rejected(ValidationError),
}

impl SubmitOutcome {
    /// Check if the block was committed.
    pub fn is_committed(&self) -> bool {
        matches!(self, SubmitOutcome::Committed(_))
    }

    /// The committed block, if any.
    pub fn block(&self) -> Option<&Block> {
        match self {
            SubmitOutcome::Committed(block) => Some(block),
            SubmitOutcome::Rejected(_) => None,
        }
    }
}

/// Result of a chain-wide verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainReport {
    /// Number of blocks checked.
    pub length: usize,
    /// The first failure, if any.
    pub error: Option<ChainError>,
}

impl ChainReport {
    /// Check if every block validated.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// The main Ledger struct.
///
/// Provides:
/// - Submitting checkouts (validated, serialized appends)
/// - Listing blocks (consistent snapshots)
/// - Chain-wide verification
pub struct Ledger {
    /// The chain, exclusively owned.
    chain: RwLock<Chain>,
    /// Configuration.
    config: LedgerConfig,
}

impl Ledger {
    /// Create a ledger holding a fresh genesis block.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        let chain = Chain::new()?;
        info!(genesis = %chain.genesis().hash(), "ledger initialized");
        Ok(Self::with_chain(chain, config))
    }

    /// Create a ledger around an existing chain.
    pub fn with_chain(chain: Chain, config: LedgerConfig) -> Self {
        Self {
            chain: RwLock::new(chain),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Submit a checkout record.
    ///
    /// The record is checked at the ingestion boundary, turned into a
    /// candidate against the current tip, and committed if it validates.
    pub fn submit_checkout(&self, record: CheckoutRecord) -> Result<SubmitOutcome> {
        check_record(&record, self.config.validate_on_ingest)?;

        let mut chain = self.write()?;
        let outcome = chain.append(record).map(Block::clone);
        drop(chain);

        settle(outcome)
    }

    /// Parse a JSON checkout submission and submit it.
    pub fn submit_json(&self, body: &[u8]) -> Result<SubmitOutcome> {
        let record = parse_checkout(body)?;
        self.submit_checkout(record)
    }

    /// Build a candidate for `record` against the tip as it is now.
    ///
    /// Nothing is committed. Pass the result to [`Ledger::commit`]; it is
    /// rejected if another block lands first.
    pub fn candidate(&self, record: CheckoutRecord) -> Result<Block> {
        check_record(&record, self.config.validate_on_ingest)?;
        let chain = self.read()?;
        Ok(chain.candidate(record)?)
    }

    /// Commit a candidate built by [`Ledger::candidate`].
    ///
    /// The payload goes through the same ingestion checks as
    /// [`Ledger::submit_checkout`], whoever built the block.
    pub fn commit(&self, candidate: Block) -> Result<SubmitOutcome> {
        check_record(candidate.payload(), self.config.validate_on_ingest)?;

        let mut chain = self.write()?;
        let outcome = chain.commit(candidate).map(Block::clone);
        drop(chain);

        settle(outcome)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Every block, genesis first.
    pub fn list_blocks(&self) -> Result<Vec<Block>> {
        let chain = self.read()?;
        debug!(length = chain.len(), "snapshot");
        Ok(chain.snapshot())
    }

    /// Serialize the snapshot as a JSON array.
    pub fn snapshot_json(&self, pretty: bool) -> Result<String> {
        let blocks = self.list_blocks()?;
        let json = if pretty {
            serde_json::to_string_pretty(&blocks)?
        } else {
            serde_json::to_string(&blocks)?
        };
        Ok(json)
    }

    /// The current tip.
    pub fn tip(&self) -> Result<Block> {
        Ok(self.read()?.tip().clone())
    }

    /// Get a block by position.
    pub fn block_at(&self, position: u64) -> Result<Option<Block>> {
        Ok(self.read()?.get(position).cloned())
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Always false once constructed.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Re-validate the whole chain.
    pub fn verify(&self) -> Result<ChainReport> {
        let chain = self.read()?;
        let error = chain.verify().err();
        if let Some(e) = &error {
            warn!(error = %e, "chain verification failed");
        }
        Ok(ChainReport {
            length: chain.len(),
            error,
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Chain>> {
        self.chain.read().map_err(|_| LedgerError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Chain>> {
        self.chain.write().map_err(|_| LedgerError::Poisoned)
    }
}

/// Turn the chain's verdict into a submit outcome, logging either way.
fn settle(outcome: std::result::Result<Block, RejectedBlock>) -> Result<SubmitOutcome> {
    match outcome {
        Ok(block) => {
            info!(
                position = block.position(),
                hash = %block.hash(),
                book_id = %block.payload().book_id,
                "checkout committed"
            );
            Ok(SubmitOutcome::Committed(block))
        }
        // No candidate means the block could not even be encoded.
        Err(RejectedBlock {
            candidate: None,
            reason: ValidationError::Encoding(msg),
        }) => Err(LedgerError::Serialization(msg)),
        Err(rejected) => {
            warn!(reason = %rejected.reason, "checkout rejected");
            Ok(SubmitOutcome::Rejected(rejected.reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookchain_core::create_block_at;

    fn ledger() -> Ledger {
        Ledger::new(LedgerConfig::default()).unwrap()
    }

    #[test]
    fn test_submit_commits() {
        let ledger = ledger();
        let outcome = ledger
            .submit_checkout(CheckoutRecord::new("b1", "alice", "2024-01-01"))
            .unwrap();

        assert!(outcome.is_committed());
        assert_eq!(outcome.block().map(Block::position), Some(1));
        assert_eq!(ledger.len().unwrap(), 2);
    }

    #[test]
    fn test_malformed_leaves_chain_untouched() {
        let ledger = ledger();
        assert!(matches!(
            ledger.submit_json(b"{"),
            Err(LedgerError::MalformedInput(_))
        ));
        assert!(matches!(
            ledger.submit_checkout(CheckoutRecord::genesis()),
            Err(LedgerError::MalformedInput(_))
        ));
        assert_eq!(ledger.len().unwrap(), 1);
    }

    #[test]
    fn test_validate_on_ingest_off_allows_blank_fields() {
        let ledger = Ledger::new(LedgerConfig {
            validate_on_ingest: false,
        })
        .unwrap();
        let outcome = ledger.submit_json(b"{}").unwrap();
        assert!(outcome.is_committed());
    }

    #[test]
    fn test_stale_commit_is_rejected() {
        let ledger = ledger();
        let a = ledger.candidate(CheckoutRecord::new("b1", "a", "d")).unwrap();
        let b = ledger.candidate(CheckoutRecord::new("b2", "b", "d")).unwrap();

        assert!(ledger.commit(a).unwrap().is_committed());
        let second = ledger.commit(b).unwrap();
        assert!(matches!(
            second,
            SubmitOutcome::Rejected(ValidationError::PrevHashMismatch { .. })
        ));
        assert_eq!(ledger.len().unwrap(), 2);
    }

    #[test]
    fn test_commit_applies_ingestion_checks() {
        let ledger = ledger();
        let tip = ledger.tip().unwrap();

        let genesis_claim = create_block_at(&tip, CheckoutRecord::genesis(), 0).unwrap();
        assert!(matches!(
            ledger.commit(genesis_claim),
            Err(LedgerError::MalformedInput(_))
        ));

        let blank_user = create_block_at(&tip, CheckoutRecord::new("b1", " ", "d"), 0).unwrap();
        assert!(matches!(
            ledger.commit(blank_user),
            Err(LedgerError::MalformedInput(_))
        ));

        assert_eq!(ledger.len().unwrap(), 1);
        assert!(ledger.verify().unwrap().is_ok());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let ledger = ledger();
        ledger
            .submit_checkout(CheckoutRecord::new("b1", "alice", "2024-01-01"))
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&ledger.snapshot_json(false).unwrap()).unwrap();
        let blocks = json.as_array().unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1]["Position"], 1);
        assert_eq!(blocks[1]["Data"]["user"], "alice");
        assert_eq!(blocks[1]["PrevHash"], blocks[0]["Hash"]);
    }

    #[test]
    fn test_verify_report() {
        let ledger = ledger();
        ledger
            .submit_checkout(CheckoutRecord::new("b1", "alice", "d"))
            .unwrap();
        let report = ledger.verify().unwrap();
        assert!(report.is_ok());
        assert_eq!(report.length, 2);
    }

    #[test]
    fn test_block_at() {
        let ledger = ledger();
        assert!(ledger.block_at(0).unwrap().unwrap().is_genesis());
        assert!(ledger.block_at(1).unwrap().is_none());
    }
}
