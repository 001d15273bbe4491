//! Append engine for the star ledger
//!
//! The only way a block enters the chain. The primitive is crate-internal:
//! public mutation happens through genesis construction and
//! [`submit_star`](crate::StarLedger::submit_star), which run the ownership
//! checks first and then delegate here.

use crate::audit::{current_timestamp, events, AuditLogger};
use crate::block::Block;
use crate::error::{LedgerError, Result};
use crate::hash::HashFunction;
use crate::ledger::StarLedger;

impl<H, Hasher, Logger> StarLedger<H, Hasher, Logger>
where
    H: AsRef<[u8]> + Clone + Eq + core::fmt::Debug + Send + Sync + serde::Serialize + serde::de::DeserializeOwned,
    Hasher: HashFunction<Output = H>,
    Logger: AuditLogger,
{
    /// Seal a body into a block and append it to the chain.
    ///
    /// Stamps height, timestamp and previous-hash, computes the digest,
    /// then re-validates the entire stored chain before committing. The
    /// re-validation is a defensive check of the existing chain, not of
    /// the candidate: a corrupted chain refuses every further append. On
    /// any failure the candidate is discarded and the chain is unchanged;
    /// there is no partial-success state.
    pub(crate) fn commit(&mut self, body: String) -> Result<&Block<H>> {
        if body.len() > self.config.max_body_bytes {
            let _ = self.audit_logger.log_event(&events::input_validation_failure(
                "body",
                &format!(
                    "body size {} exceeds maximum allowed size {}",
                    body.len(),
                    self.config.max_body_bytes
                ),
            ));
            return Err(LedgerError::BodyTooLarge {
                size: body.len(),
                limit: self.config.max_body_bytes,
            });
        }

        let previous_hash = self.blocks.last().map(|tip| tip.hash.clone());
        let height = self.blocks.len() as u64;
        let timestamp = current_timestamp();

        let mut block = Block {
            height,
            timestamp,
            body,
            previous_hash,
            hash: self.hasher.hash(&[]),
        };
        block.hash = block.compute_hash(&self.hasher)?;

        let faults = self.validate();
        if !faults.is_empty() {
            let _ = self
                .audit_logger
                .log_event(&events::chain_validation_failure(faults.len()));
            return Err(LedgerError::ChainValidationFailed {
                faults: faults.iter().map(|f| f.to_string()).collect(),
            });
        }

        let sealed_hash = block.hash.clone();
        self.blocks.push(block);
        self.height = self.blocks.len() as u64 - 1;
        debug_assert_eq!(self.height, height);

        let _ = self
            .audit_logger
            .log_event(&events::block_committed(height, sealed_hash.as_ref()));

        Ok(&self.blocks[height as usize])
    }
}
