//! Core StarLedger type
//!
//! The ledger owns the only mutable state of the system: the ordered block
//! sequence plus a cached height counter. All mutation goes through `&mut
//! self`, so a single ledger value already serializes writers; concurrent
//! use wraps one ledger per `Mutex`/`RwLock` and treats each append as one
//! critical section. Readers never observe a partially sealed block because
//! blocks are pushed only after every field is finalized.

pub use crate::config::LedgerConfig;
use crate::audit::{events, AuditLogger};
use crate::block::{encode_body, Block, GenesisPayload};
use crate::error::Result;
use crate::hash::HashFunction;

/// StarLedger - an append-only hash chain of star claims
pub struct StarLedger<H = [u8; 32], Hasher = crate::hash::Sha256Hasher, Logger = crate::audit::NoOpLogger>
where
    H: AsRef<[u8]> + Clone + Eq + core::fmt::Debug + Send + Sync + serde::Serialize + serde::de::DeserializeOwned,
    Hasher: HashFunction<Output = H>,
    Logger: AuditLogger,
{
    /// Sealed blocks in height order; `blocks[0]` is always genesis
    pub(crate) blocks: Vec<Block<H>>,
    /// Cached height of the tip, re-asserted on every mutation
    /// (`height == blocks.len() - 1`)
    pub(crate) height: u64,
    /// Hash function sealing each block
    pub(crate) hasher: Hasher,
    /// Ledger configuration
    pub(crate) config: LedgerConfig,
    /// Audit event logger
    pub(crate) audit_logger: Logger,
}

impl<H, Hasher, Logger> StarLedger<H, Hasher, Logger>
where
    H: AsRef<[u8]> + Clone + Eq + core::fmt::Debug + Send + Sync + serde::Serialize + serde::de::DeserializeOwned,
    Hasher: HashFunction<Output = H>,
    Logger: AuditLogger + Default,
{
    /// Create a new ledger with the default configuration. The genesis
    /// block is committed before the ledger is returned, so the chain is
    /// never observably empty.
    pub fn new(hasher: Hasher) -> Result<Self> {
        Self::with_config(hasher, LedgerConfig::default())
    }

    /// Create a new ledger with a custom configuration
    pub fn with_config(hasher: Hasher, config: LedgerConfig) -> Result<Self> {
        Self::with_config_and_logger(hasher, config, Logger::default())
    }
}

impl<H, Hasher, Logger> StarLedger<H, Hasher, Logger>
where
    H: AsRef<[u8]> + Clone + Eq + core::fmt::Debug + Send + Sync + serde::Serialize + serde::de::DeserializeOwned,
    Hasher: HashFunction<Output = H>,
    Logger: AuditLogger,
{
    /// Create a new ledger with a custom configuration and audit logger
    pub fn with_config_and_logger(hasher: Hasher, config: LedgerConfig, logger: Logger) -> Result<Self> {
        config.validate()?;

        let mut ledger = Self {
            blocks: Vec::new(),
            height: 0,
            hasher,
            config,
            audit_logger: logger,
        };

        let genesis_body = encode_body(&GenesisPayload {
            data: ledger.config.genesis_data.clone(),
        })?;
        let genesis_hash = ledger.commit(genesis_body)?.hash.clone();
        let _ = ledger
            .audit_logger
            .log_event(&events::ledger_initialized(genesis_hash.as_ref()));

        Ok(ledger)
    }

    /// Current chain height (genesis is height 0)
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Number of blocks in the chain, always `height() + 1`
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// The chain is never empty after construction; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The most recently committed block
    pub fn tip(&self) -> Option<&Block<H>> {
        self.blocks.last()
    }

    /// The ledger configuration
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }
}
