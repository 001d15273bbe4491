//! Hash function abstraction for the star ledger

/// Trait for hash functions used to seal blocks
pub trait HashFunction {
    /// The output type of the hash function
    type Output: AsRef<[u8]> + Clone + Eq + core::fmt::Debug;

    /// Hash a single piece of data
    fn hash(&self, data: &[u8]) -> Self::Output;
}

/// Default hasher using SHA-256
///
/// SHA-256 is the commitment scheme of the canonical chain: every stored
/// block hash was computed with it, so swapping the hasher on an existing
/// ledger invalidates all prior hashes.
#[derive(Debug, Clone, Default)]
pub struct Sha256Hasher;

impl HashFunction for Sha256Hasher {
    type Output = [u8; 32];

    fn hash(&self, data: &[u8]) -> Self::Output {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Blake3 hasher (faster, for ledgers that never need SHA-256 compatibility)
#[cfg(feature = "blake3-hash")]
#[derive(Debug, Clone, Default)]
pub struct Blake3Hasher;

#[cfg(feature = "blake3-hash")]
impl HashFunction for Blake3Hasher {
    type Output = [u8; 32];

    fn hash(&self, data: &[u8]) -> Self::Output {
        *blake3::hash(data).as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hasher() {
        let hasher = Sha256Hasher;
        let data = b"test data";
        let hash1 = hasher.hash(data);
        let hash2 = hasher.hash(data);
        assert_eq!(hash1, hash2);
        assert_ne!(hasher.hash(b"different"), hash1);
    }

    #[test]
    fn test_sha256_known_vector() {
        let hasher = Sha256Hasher;
        // SHA-256("abc")
        let expected =
            hex::decode("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
                .unwrap();
        assert_eq!(hasher.hash(b"abc").as_ref(), expected.as_slice());
    }

    #[cfg(feature = "blake3-hash")]
    #[test]
    fn test_blake3_hasher() {
        let hasher = Blake3Hasher;
        let hash1 = hasher.hash(b"test data");
        let hash2 = hasher.hash(b"test data");
        assert_eq!(hash1, hash2);
        assert_ne!(hasher.hash(b"different"), hash1);
    }
}
