//! Ownership verification protocol
//!
//! A caller proves control of a wallet address by signing a short-lived
//! challenge string. The issuance time is baked into the challenge itself,
//! so no server-side session state exists and any ledger replica can check
//! a submission. The time window is the only replay defense: a signed
//! message stays usable for the whole window, there is no nonce
//! consumption.

use crate::audit::{current_timestamp, events, AuditLogger};
use crate::block::{encode_body, Block, StarRecord};
use crate::error::{LedgerError, Result};
use crate::hash::HashFunction;
use crate::ledger::StarLedger;
use crate::signature::{Ed25519Scheme, SignatureScheme};

/// A parsed challenge message of the form `{address}:{issued_at}:{suffix}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// Wallet address the challenge was issued for
    pub address: String,
    /// Issuance time, Unix seconds
    pub issued_at: u64,
    /// Application tag, normally `starRegistry`
    pub suffix: String,
}

impl Challenge {
    /// Format a challenge message for `address` issued at `issued_at`
    pub fn format(address: &str, issued_at: u64, suffix: &str) -> String {
        format!("{address}:{issued_at}:{suffix}")
    }

    /// Parse a challenge message. The address portion may itself contain
    /// colons, so the timestamp and suffix are taken from the end.
    pub fn parse(message: &str) -> Result<Self> {
        let mut parts = message.rsplitn(3, ':');
        let suffix = parts.next().unwrap_or_default();
        let issued = parts.next().ok_or_else(|| LedgerError::MalformedChallenge {
            message: "expected address:issued:suffix".to_string(),
        })?;
        let address = parts.next().ok_or_else(|| LedgerError::MalformedChallenge {
            message: "expected address:issued:suffix".to_string(),
        })?;

        let issued_at = issued.parse::<u64>().map_err(|_| LedgerError::MalformedChallenge {
            message: format!("issuance time '{issued}' is not an integer"),
        })?;

        Ok(Self {
            address: address.to_string(),
            issued_at,
            suffix: suffix.to_string(),
        })
    }

    /// Seconds elapsed since issuance. A challenge from the future counts
    /// as zero elapsed rather than an error.
    pub fn elapsed_secs(&self, now: u64) -> u64 {
        now.saturating_sub(self.issued_at)
    }

    /// Check the validity window: elapsed time strictly beyond the window
    /// expires the challenge, so a submission at exactly the window
    /// boundary still passes.
    pub fn check_window(&self, now: u64, window_secs: u64) -> Result<()> {
        let elapsed_secs = self.elapsed_secs(now);
        if elapsed_secs > window_secs {
            return Err(LedgerError::ExpiredChallenge {
                elapsed_secs,
                window_secs,
            });
        }
        Ok(())
    }
}

impl<H, Hasher, Logger> StarLedger<H, Hasher, Logger>
where
    H: AsRef<[u8]> + Clone + Eq + core::fmt::Debug + Send + Sync + serde::Serialize + serde::de::DeserializeOwned,
    Hasher: HashFunction<Output = H>,
    Logger: AuditLogger,
{
    /// Issue an ownership challenge for `address`.
    ///
    /// Stateless: the returned string carries its own issuance time and
    /// nothing is recorded. The caller must sign the exact string and
    /// return it to [`submit_star`](Self::submit_star) within the window.
    pub fn request_challenge(&self, address: &str) -> String {
        let issued_at = current_timestamp();
        let _ = self
            .audit_logger
            .log_event(&events::challenge_issued(address, issued_at));
        Challenge::format(address, issued_at, &self.config.challenge_suffix)
    }

    /// Submit a signed star claim using the default Ed25519 scheme.
    ///
    /// See [`submit_star_with`](Self::submit_star_with).
    pub fn submit_star(
        &mut self,
        address: &str,
        message: &str,
        signature: &str,
        star: serde_json::Value,
    ) -> Result<&Block<H>> {
        self.submit_star_with(&Ed25519Scheme, address, message, signature, star)
    }

    /// Submit a signed star claim with an explicit signature scheme.
    ///
    /// The window check runs before signature verification: an expired
    /// challenge is rejected without touching the signature. On success
    /// the claim is sealed into a block with body `{owner, star}` and
    /// committed through the append engine, whose errors propagate
    /// verbatim. Nothing is mutated on any failure path.
    pub fn submit_star_with<S: SignatureScheme>(
        &mut self,
        scheme: &S,
        address: &str,
        message: &str,
        signature: &str,
        star: serde_json::Value,
    ) -> Result<&Block<H>> {
        self.submit_star_at(scheme, address, message, signature, star, current_timestamp())
    }

    /// Window evaluation with an explicit clock, the testable core of
    /// `submit_star`.
    pub(crate) fn submit_star_at<S: SignatureScheme>(
        &mut self,
        scheme: &S,
        address: &str,
        message: &str,
        signature: &str,
        star: serde_json::Value,
        now: u64,
    ) -> Result<&Block<H>> {
        let challenge = Challenge::parse(message)?;

        if let Err(err) = challenge.check_window(now, self.config.challenge_window_secs) {
            if let LedgerError::ExpiredChallenge { elapsed_secs, window_secs } = &err {
                let _ = self.audit_logger.log_event(&events::challenge_expired(
                    address,
                    *elapsed_secs,
                    *window_secs,
                ));
            }
            return Err(err);
        }

        if let Err(err) = scheme.verify(address, message.as_bytes(), signature) {
            let _ = self
                .audit_logger
                .log_event(&events::signature_rejected(address, &err.to_string()));
            return Err(err);
        }

        let body = encode_body(&StarRecord {
            owner: address.to_string(),
            star,
        })?;
        self.commit(body)
    }
}
