//! Block primitive for the star ledger
//!
//! A block is sealed exactly once by the append engine and is logically
//! immutable afterwards. Its hash commits to every other field through a
//! canonical JSON preimage, so any later mutation is detectable by the
//! chain validator.

use crate::error::{LedgerError, Result};
use crate::hash::HashFunction;
use serde::{Deserialize, Serialize};

/// One sealed entry in the chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block<H> {
    /// Zero-based sequential position in the chain
    pub height: u64,
    /// Seal time, Unix seconds
    pub timestamp: u64,
    /// Hex-encoded canonical JSON payload
    pub body: String,
    /// Hash of the preceding block; `None` only for genesis
    pub previous_hash: Option<H>,
    /// Digest over the canonical preimage of all other fields
    pub hash: H,
}

/// Canonical hashing preimage: every field of the block except the hash
/// itself, serialized with fixed field order.
///
/// This serialization is the cryptographic commitment mechanism. Changing
/// the field order or encoding invalidates every existing block hash.
#[derive(Serialize)]
struct BlockPreimage<'a, H> {
    height: u64,
    timestamp: u64,
    body: &'a str,
    previous_hash: Option<&'a H>,
}

/// Decoded payload of a star claim block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Wallet address that proved ownership for this claim
    pub owner: String,
    /// The claimed star, as submitted
    pub star: serde_json::Value,
}

/// Decoded payload of the genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisPayload {
    /// Genesis marker text
    pub data: String,
}

/// Hex-encode a serializable payload into a block body
pub(crate) fn encode_body<T: Serialize>(payload: &T) -> Result<String> {
    let bytes = serde_json::to_vec(payload)
        .map_err(|e| LedgerError::SerializationError(e.to_string()))?;
    Ok(hex::encode(bytes))
}

impl<H> Block<H>
where
    H: AsRef<[u8]> + Clone + Eq + core::fmt::Debug + Serialize + serde::de::DeserializeOwned,
{
    /// Compute the digest of this block's current field values, excluding
    /// the stored hash.
    pub fn compute_hash<Hasher>(&self, hasher: &Hasher) -> Result<H>
    where
        Hasher: HashFunction<Output = H>,
    {
        let preimage = BlockPreimage {
            height: self.height,
            timestamp: self.timestamp,
            body: &self.body,
            previous_hash: self.previous_hash.as_ref(),
        };
        let bytes = serde_json::to_vec(&preimage)
            .map_err(|e| LedgerError::SerializationError(e.to_string()))?;
        Ok(hasher.hash(&bytes))
    }

    /// Check that the stored hash still matches a fresh digest of the
    /// block's fields. A sealed block that fails this check has been
    /// tampered with.
    pub fn is_self_consistent<Hasher>(&self, hasher: &Hasher) -> bool
    where
        Hasher: HashFunction<Output = H>,
    {
        match self.compute_hash(hasher) {
            Ok(recomputed) => recomputed == self.hash,
            Err(_) => false,
        }
    }

    /// Decode the body into a payload type. Returns an error for bodies
    /// that are not valid hex or do not match `T`'s shape.
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        let bytes = hex::decode(&self.body)
            .map_err(|e| LedgerError::SerializationError(e.to_string()))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| LedgerError::SerializationError(e.to_string()))
    }

    /// Whether this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.height == 0 && self.previous_hash.is_none()
    }

    /// Hex-encoded hash, the form API layers expose
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash.as_ref())
    }

    /// Hex-encoded previous hash, if any
    pub fn previous_hash_hex(&self) -> Option<String> {
        self.previous_hash.as_ref().map(|h| hex::encode(h.as_ref()))
    }
}
