//! Keccak-256 hasher implementation
//!
//! 以太坊使用的 Keccak-256（非 NIST SHA3-256 填充），
//! 與 Solidity `keccak256` 及 OpenZeppelin `MerkleProof` 兼容。

use sha3::{Digest, Keccak256};

use crate::digest::HashDigest;
use crate::traits::Hasher;

/// Keccak-256 hasher
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl Keccak256Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl Hasher for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> HashDigest {
        HashDigest(Keccak256::digest(data).into())
    }

    fn algorithm_name(&self) -> &str {
        "keccak256"
    }

    fn hash_pair(&self, a: &HashDigest, b: &HashDigest) -> HashDigest {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let hash = Keccak256::new()
            .chain_update(first)
            .chain_update(second)
            .finalize();
        HashDigest(hash.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_vector() {
        let hasher = Keccak256Hasher::new();
        assert_eq!(
            hasher.hash(b"").to_hex(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_hash_pair_is_order_independent() {
        let hasher = Keccak256Hasher::new();
        let left = HashDigest([0x01u8; 32]);
        let right = HashDigest([0x02u8; 32]);

        assert_eq!(hasher.hash_pair(&left, &right), hasher.hash_pair(&right, &left));
    }

    #[test]
    fn test_hash_pair_matches_sorted_concatenation() {
        let hasher = Keccak256Hasher::new();
        let low = HashDigest([0x01u8; 32]);
        let high = HashDigest([0x02u8; 32]);

        let mut concat = Vec::with_capacity(64);
        concat.extend_from_slice(low.as_bytes());
        concat.extend_from_slice(high.as_bytes());

        assert_eq!(hasher.hash_pair(&high, &low), hasher.hash(&concat));
    }
}
