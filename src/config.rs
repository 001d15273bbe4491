//! Configuration for the star ledger

use crate::error::{LedgerError, Result};

/// Configuration for a [`StarLedger`](crate::StarLedger)
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LedgerConfig {
    /// How long a signed challenge stays valid, in seconds
    pub challenge_window_secs: u64,
    /// Application tag appended to every challenge message
    pub challenge_suffix: String,
    /// Text carried by the genesis block's payload
    pub genesis_data: String,
    /// Maximum encoded body size for a submitted block, in bytes
    pub max_body_bytes: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            challenge_window_secs: 300, // 5 minutes, the canonical window
            challenge_suffix: "starRegistry".to_string(),
            genesis_data: "Genesis Block".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}

impl LedgerConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.challenge_window_secs == 0 {
            return Err(LedgerError::InvalidConfiguration {
                parameter: "challenge_window_secs".to_string(),
                reason: "challenge window must be greater than 0".to_string(),
            });
        }

        // The suffix is part of every signed message; an empty one would
        // make challenges indistinguishable from bare `address:time` pairs.
        if self.challenge_suffix.is_empty() {
            return Err(LedgerError::InvalidConfiguration {
                parameter: "challenge_suffix".to_string(),
                reason: "challenge suffix must not be empty".to_string(),
            });
        }

        if self.challenge_suffix.contains(':') {
            return Err(LedgerError::InvalidConfiguration {
                parameter: "challenge_suffix".to_string(),
                reason: "challenge suffix must not contain ':'".to_string(),
            });
        }

        if self.max_body_bytes == 0 {
            return Err(LedgerError::InvalidConfiguration {
                parameter: "max_body_bytes".to_string(),
                reason: "body limit must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
