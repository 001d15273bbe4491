//! Error types for the star ledger

use thiserror::Error;

/// Errors that can occur when working with the star ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The ownership challenge was signed too long ago
    #[error("challenge expired: {elapsed_secs}s elapsed, window is {window_secs}s")]
    ExpiredChallenge {
        /// Seconds elapsed since the challenge was issued
        elapsed_secs: u64,
        /// Configured validity window in seconds
        window_secs: u64,
    },

    /// Signature verification failed or the key/signature could not be decoded
    #[error("invalid signature: {reason}")]
    InvalidSignature {
        /// Detailed reason for the verification failure
        reason: String,
    },

    /// The challenge message does not have the `address:issued:suffix` shape
    #[error("malformed challenge message: {message}")]
    MalformedChallenge {
        /// Description of what was wrong with the message
        message: String,
    },

    /// The stored chain failed validation before the append could commit
    #[error("chain validation failed with {} fault(s)", .faults.len())]
    ChainValidationFailed {
        /// Every inconsistency found, in ascending height order
        faults: Vec<String>,
    },

    /// Submitted payload exceeds the configured body limit
    #[error("body size {size} exceeds maximum allowed size {limit}")]
    BodyTooLarge {
        /// Size of the rejected body in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// Canonical serialization of a block preimage failed
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Invalid configuration parameter
    #[error("invalid configuration: {parameter} - {reason}")]
    InvalidConfiguration {
        /// Name of the invalid configuration parameter
        parameter: String,
        /// Detailed reason why the parameter is invalid
        reason: String,
    },
}

/// Result type alias for ledger operations
pub type Result<T> = core::result::Result<T, LedgerError>;
