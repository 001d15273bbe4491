//! Chain validation for the star ledger
//!
//! Two independent pure checks composed into a full-chain walk: each block
//! must hash to its stored digest, and each non-genesis block must point at
//! its parent's hash. All blocks are checked in ascending height order with
//! no short-circuit, so one call surfaces every inconsistency at once.

use crate::audit::AuditLogger;
use crate::block::Block;
use crate::hash::HashFunction;
use crate::ledger::StarLedger;

/// One inconsistency found in the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainFault {
    /// A block's stored hash no longer matches its recomputed digest
    SelfHashMismatch {
        /// Height of the inconsistent block
        height: u64,
    },
    /// A block's previous-hash does not match its parent's hash
    BrokenLink {
        /// Height of the block whose back-reference is wrong
        height: u64,
    },
}

impl ChainFault {
    /// Height of the block this fault refers to
    pub fn height(&self) -> u64 {
        match self {
            ChainFault::SelfHashMismatch { height } | ChainFault::BrokenLink { height } => *height,
        }
    }
}

impl core::fmt::Display for ChainFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChainFault::SelfHashMismatch { height } => {
                write!(f, "Block at height {height} is not valid")
            }
            ChainFault::BrokenLink { height } => {
                write!(
                    f,
                    "Block {height} previousBlockHash is not the same as the previous hash"
                )
            }
        }
    }
}

/// Check every inter-block link of `chain` and report each break.
///
/// Pure over the slice; does not recompute digests.
pub fn links_are_consistent<H: Clone + Eq>(chain: &[Block<H>]) -> Vec<ChainFault> {
    chain
        .windows(2)
        .filter(|pair| pair[1].previous_hash.as_ref() != Some(&pair[0].hash))
        .map(|pair| ChainFault::BrokenLink {
            height: pair[1].height,
        })
        .collect()
}

impl<H, Hasher, Logger> StarLedger<H, Hasher, Logger>
where
    H: AsRef<[u8]> + Clone + Eq + core::fmt::Debug + Send + Sync + serde::Serialize + serde::de::DeserializeOwned,
    Hasher: HashFunction<Output = H>,
    Logger: AuditLogger,
{
    /// Walk the stored chain and report every fault in ascending height
    /// order. An empty result means the chain is valid. Idempotent on an
    /// unmodified chain.
    ///
    /// A single block can contribute two faults: one for its own digest
    /// and one for its back-reference.
    pub fn validate(&self) -> Vec<ChainFault> {
        let mut faults = Vec::new();

        for block in &self.blocks {
            if !block.is_self_consistent(&self.hasher) {
                faults.push(ChainFault::SelfHashMismatch {
                    height: block.height,
                });
            }
        }

        faults.extend(links_are_consistent(&self.blocks));
        faults.sort_by_key(|fault| fault.height());
        faults
    }
}
