//! Audit event logging for the star ledger
//!
//! Every security-relevant transition (challenge issuance, signature
//! rejection, block commit, validation failure) is reported through a
//! pluggable logger so host applications can build audit trails without
//! the ledger depending on any particular logging framework.

use crate::error::Result;

/// Audit event severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AuditLevel {
    /// Informational events (initialization, commits, challenges)
    Info,
    /// Warning events (rejected submissions)
    Warning,
    /// Critical events (chain corruption detected)
    Critical,
}

/// Audit event types
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AuditEventType {
    /// Ledger initialization (genesis committed)
    LedgerInitialized,
    /// Ownership challenge issued
    ChallengeIssued,
    /// Block sealed and committed to the chain
    BlockCommitted,
    /// Submission rejected because the challenge expired
    ChallengeExpired,
    /// Submission rejected because signature verification failed
    SignatureRejected,
    /// Chain validation found one or more faults
    ChainValidationFailure,
    /// Submission rejected during input validation
    InputValidationFailure,
}

/// Audit event data
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AuditEvent {
    /// Event timestamp (Unix seconds)
    pub timestamp: u64,
    /// Event type
    pub event_type: AuditEventType,
    /// Severity level
    pub level: AuditLevel,
    /// Human-readable description
    pub description: String,
}

/// Audit logger trait for pluggable logging backends
pub trait AuditLogger: Send + Sync {
    /// Log an audit event
    fn log_event(&self, event: &AuditEvent) -> Result<()>;
}

/// No-op logger for when audit logging is disabled
#[derive(Debug, Clone, Default)]
pub struct NoOpLogger;

impl AuditLogger for NoOpLogger {
    fn log_event(&self, _event: &AuditEvent) -> Result<()> {
        Ok(())
    }
}

/// Standard logger that writes to stderr
#[derive(Debug, Clone, Default)]
pub struct StdErrLogger;

impl AuditLogger for StdErrLogger {
    fn log_event(&self, event: &AuditEvent) -> Result<()> {
        eprintln!(
            "[AUDIT] {} - {}: {}",
            event.timestamp,
            format!("{:?}", event.level).to_uppercase(),
            event.description
        );
        Ok(())
    }
}

/// Helper functions for creating audit events
pub mod events {
    use super::*;

    /// Ledger initialization event
    pub fn ledger_initialized(genesis_hash: &[u8]) -> AuditEvent {
        AuditEvent {
            timestamp: current_timestamp(),
            event_type: AuditEventType::LedgerInitialized,
            level: AuditLevel::Info,
            description: format!("ledger initialized, genesis hash {}", hex::encode(genesis_hash)),
        }
    }

    /// Challenge issuance event
    pub fn challenge_issued(address: &str, issued_at: u64) -> AuditEvent {
        AuditEvent {
            timestamp: current_timestamp(),
            event_type: AuditEventType::ChallengeIssued,
            level: AuditLevel::Info,
            description: format!("challenge issued for {address} at {issued_at}"),
        }
    }

    /// Block commit event
    pub fn block_committed(height: u64, hash: &[u8]) -> AuditEvent {
        AuditEvent {
            timestamp: current_timestamp(),
            event_type: AuditEventType::BlockCommitted,
            level: AuditLevel::Info,
            description: format!("block committed at height {} with hash {}", height, hex::encode(hash)),
        }
    }

    /// Expired challenge rejection event
    pub fn challenge_expired(address: &str, elapsed_secs: u64, window_secs: u64) -> AuditEvent {
        AuditEvent {
            timestamp: current_timestamp(),
            event_type: AuditEventType::ChallengeExpired,
            level: AuditLevel::Warning,
            description: format!(
                "submission from {address} rejected: challenge {elapsed_secs}s old, window {window_secs}s"
            ),
        }
    }

    /// Signature rejection event
    pub fn signature_rejected(address: &str, reason: &str) -> AuditEvent {
        AuditEvent {
            timestamp: current_timestamp(),
            event_type: AuditEventType::SignatureRejected,
            level: AuditLevel::Warning,
            description: format!("submission from {address} rejected: {reason}"),
        }
    }

    /// Chain validation failure event
    pub fn chain_validation_failure(fault_count: usize) -> AuditEvent {
        AuditEvent {
            timestamp: current_timestamp(),
            event_type: AuditEventType::ChainValidationFailure,
            level: AuditLevel::Critical,
            description: format!("CHAIN VALIDATION FAILED with {fault_count} fault(s)"),
        }
    }

    /// Input validation failure event
    pub fn input_validation_failure(input_type: &str, reason: &str) -> AuditEvent {
        AuditEvent {
            timestamp: current_timestamp(),
            event_type: AuditEventType::InputValidationFailure,
            level: AuditLevel::Warning,
            description: format!("input validation failed for {input_type}: {reason}"),
        }
    }
}

/// Get current timestamp (Unix seconds)
pub fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
