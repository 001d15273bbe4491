//! Read-only queries over the star ledger
//!
//! Misses are `None` or an empty vector, never errors.

use crate::audit::AuditLogger;
use crate::block::{Block, StarRecord};
use crate::hash::HashFunction;
use crate::ledger::StarLedger;

impl<H, Hasher, Logger> StarLedger<H, Hasher, Logger>
where
    H: AsRef<[u8]> + Clone + Eq + core::fmt::Debug + Send + Sync + serde::Serialize + serde::de::DeserializeOwned,
    Hasher: HashFunction<Output = H>,
    Logger: AuditLogger,
{
    /// Look up a block by its hash
    pub fn block_by_hash(&self, hash: &H) -> Option<&Block<H>> {
        self.blocks.iter().find(|block| &block.hash == hash)
    }

    /// Look up a block by its hex-encoded hash, the form API layers pass
    /// around
    pub fn block_by_hash_hex(&self, hash_hex: &str) -> Option<&Block<H>> {
        self.blocks.iter().find(|block| block.hash_hex() == hash_hex)
    }

    /// Look up a block by height. Out-of-range heights are a normal miss.
    pub fn block_by_height(&self, height: u64) -> Option<&Block<H>> {
        usize::try_from(height)
            .ok()
            .and_then(|index| self.blocks.get(index))
    }

    /// All star claims owned by `address`, in chain order.
    ///
    /// Every block's body is decoded; blocks that are not star records
    /// (the genesis block in particular) are silently skipped.
    pub fn stars_by_owner(&self, address: &str) -> Vec<StarRecord> {
        self.blocks
            .iter()
            .filter_map(|block| block.decode_body::<StarRecord>().ok())
            .filter(|record| record.owner == address)
            .collect()
    }
}
