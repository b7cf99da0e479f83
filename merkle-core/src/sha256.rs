/// SHA-256 hasher implementation
use sha2::{Digest, Sha256};

use crate::digest::HashDigest;
use crate::traits::Hasher;

/// SHA-256 hasher
///
/// 用於不依賴 Keccak 的鏈下驗證方或 Soroban 等使用 SHA-256 的合約。
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl Hasher for Sha256Hasher {
    fn hash(&self, data: &[u8]) -> HashDigest {
        HashDigest(Sha256::digest(data).into())
    }

    fn algorithm_name(&self) -> &str {
        "sha256"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        let hasher = Sha256Hasher::new();
        assert_eq!(
            hasher.hash(b"abc").to_hex(),
            "0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_pair_is_order_independent() {
        let hasher = Sha256Hasher::new();
        let a = hasher.hash(b"a");
        let b = hasher.hash(b"b");
        assert_eq!(hasher.hash_pair(&a, &b), hasher.hash_pair(&b, &a));
    }
}
