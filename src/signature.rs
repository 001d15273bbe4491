//! Message-signature verification seam
//!
//! The ownership protocol only needs "did the holder of `address` sign
//! `message`", so the scheme sits behind a trait. The default scheme is
//! Ed25519 with the wallet address being the hex-encoded 32-byte public
//! key and signatures hex-encoded 64-byte strings.

use crate::error::{LedgerError, Result};

/// Trait for wallet message-signature schemes
pub trait SignatureScheme {
    /// Verify `signature` over `message` against `address`.
    ///
    /// Undecodable addresses or signatures fail verification rather than
    /// surfacing as a distinct error, matching the treatment of a throwing
    /// verifier.
    fn verify(&self, address: &str, message: &[u8], signature: &str) -> Result<()>;
}

/// Ed25519 scheme over hex-encoded keys and signatures
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Scheme;

impl Ed25519Scheme {
    fn decode32(field: &str, value: &str) -> Result<[u8; 32]> {
        let bytes = hex::decode(value).map_err(|e| LedgerError::InvalidSignature {
            reason: format!("{field} is not valid hex: {e}"),
        })?;
        bytes.try_into().map_err(|_| LedgerError::InvalidSignature {
            reason: format!("{field} must be 32 bytes"),
        })
    }

    fn decode64(field: &str, value: &str) -> Result<[u8; 64]> {
        let bytes = hex::decode(value).map_err(|e| LedgerError::InvalidSignature {
            reason: format!("{field} is not valid hex: {e}"),
        })?;
        bytes.try_into().map_err(|_| LedgerError::InvalidSignature {
            reason: format!("{field} must be 64 bytes"),
        })
    }
}

impl SignatureScheme for Ed25519Scheme {
    fn verify(&self, address: &str, message: &[u8], signature: &str) -> Result<()> {
        use ed25519_dalek::{Signature, VerifyingKey};

        let key_bytes = Self::decode32("address", address)?;
        let key = VerifyingKey::from_bytes(&key_bytes).map_err(|e| {
            LedgerError::InvalidSignature {
                reason: format!("address is not a valid public key: {e}"),
            }
        })?;

        let sig_bytes = Self::decode64("signature", signature)?;
        let sig = Signature::from_bytes(&sig_bytes);

        key.verify_strict(message, &sig)
            .map_err(|e| LedgerError::InvalidSignature {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    fn test_key(seed: u8) -> SigningKey {
        SigningKey::from_bytes(&[seed; 32])
    }

    #[test]
    fn test_valid_signature_passes() {
        let key = test_key(1);
        let address = hex::encode(key.verifying_key().to_bytes());
        let message = b"hello chain";
        let signature = hex::encode(key.sign(message).to_bytes());

        assert!(Ed25519Scheme.verify(&address, message, &signature).is_ok());
    }

    #[test]
    fn test_wallet_mismatch_fails() {
        let signer = test_key(1);
        let other = test_key(2);
        let address = hex::encode(other.verifying_key().to_bytes());
        let message = b"hello chain";
        let signature = hex::encode(signer.sign(message).to_bytes());

        let err = Ed25519Scheme.verify(&address, message, &signature).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidSignature { .. }));
    }

    #[test]
    fn test_tampered_message_fails() {
        let key = test_key(1);
        let address = hex::encode(key.verifying_key().to_bytes());
        let signature = hex::encode(key.sign(b"original").to_bytes());

        let err = Ed25519Scheme.verify(&address, b"altered", &signature).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidSignature { .. }));
    }

    #[test]
    fn test_undecodable_inputs_fail() {
        let key = test_key(1);
        let address = hex::encode(key.verifying_key().to_bytes());
        let signature = hex::encode(key.sign(b"msg").to_bytes());

        assert!(Ed25519Scheme.verify("not hex", b"msg", &signature).is_err());
        assert!(Ed25519Scheme.verify("abcd", b"msg", &signature).is_err()); // too short
        assert!(Ed25519Scheme.verify(&address, b"msg", "zz").is_err());
    }
}
