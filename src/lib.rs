//! # Star Ledger
//!
//! A minimal append-only hash chain that records star claims tied to a
//! wallet address, with cryptographic linkage between consecutive entries
//! and proof-of-ownership via message-signature verification.
//!
//! ## Features
//!
//! - **Append-only**: blocks are sealed once and live forever in memory
//! - **Self-validating**: every append re-checks the whole stored chain
//! - **Stateless ownership challenges**: the issuance time rides inside the
//!   signed message, no server-side session table
//! - **Pluggable seams**: hash function, signature scheme and audit logger
//!   are all traits
//!
//! ## Example
//!
//! ```rust
//! use star_ledger::{DefaultStarLedger, Sha256Hasher};
//!
//! let ledger = DefaultStarLedger::new(Sha256Hasher).unwrap();
//! assert_eq!(ledger.height(), 0);
//! assert!(ledger.validate().is_empty());
//!
//! let challenge = ledger.request_challenge("aabbcc");
//! assert!(challenge.ends_with(":starRegistry"));
//! ```

pub mod append;
pub mod audit;
pub mod block;
pub mod challenge;
pub mod config;
pub mod error;
pub mod hash;
pub mod ledger;
pub mod query;
pub mod signature;
pub mod validation;

// Re-exports
pub use audit::{AuditEvent, AuditEventType, AuditLevel, AuditLogger, NoOpLogger, StdErrLogger};
pub use block::{Block, GenesisPayload, StarRecord};
pub use challenge::Challenge;
pub use config::LedgerConfig;
pub use error::LedgerError;
pub use hash::HashFunction;
#[cfg(feature = "blake3-hash")]
pub use hash::Blake3Hasher;
pub use hash::Sha256Hasher;
pub use ledger::StarLedger;
pub use signature::{Ed25519Scheme, SignatureScheme};
pub use validation::ChainFault;

/// Type alias for the most common StarLedger configuration.
///
/// SHA-256 sealing, 32-byte hashes and a no-op audit logger.
pub type DefaultStarLedger = StarLedger<[u8; 32], Sha256Hasher, NoOpLogger>;

#[cfg(test)]
mod tests;
