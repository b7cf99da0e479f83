//! Sorted-pair Merkle tree library
//!
//! Builds a binary Merkle tree over a whitelist, exposes the root, and
//! produces/verifies inclusion proofs compatible with verifiers that hash
//! each pair in sorted order (OpenZeppelin `MerkleProof`, merkletreejs
//! `{ sortPairs: true }`).
//!
//! # Quick Start
//!
//! ```rust
//! use merkle_core::encoder::AddressEncoder;
//! use merkle_core::{verify, Keccak256Hasher, MerkleTree, TreeOptions};
//!
//! let whitelist = [
//!     "0x1111111111111111111111111111111111111111",
//!     "0x2222222222222222222222222222222222222222",
//!     "0x3333333333333333333333333333333333333333",
//! ];
//!
//! // Build tree
//! let hasher = Keccak256Hasher::new();
//! let tree = MerkleTree::from_values(&whitelist, &AddressEncoder, hasher, TreeOptions::default())
//!     .unwrap();
//! let root = tree.root();
//!
//! // Prove membership
//! let leaf = tree.leaf_for(&AddressEncoder, "0x2222222222222222222222222222222222222222").unwrap();
//! let proof = tree.prove(&leaf).unwrap();
//!
//! // Verify against the published root only
//! assert!(verify(&hasher, &leaf, &proof, &root));
//! ```

pub mod algorithm;
pub mod digest;
pub mod encoder;
pub mod error;
pub mod keccak;
pub mod parallel;
pub mod proof;
pub mod sha256;
pub mod traits;
pub mod tree;
pub mod verifier;

// Re-export commonly used types
pub use algorithm::HashAlgorithm;
pub use digest::{HashDigest, Leaf, MerkleRoot, DIGEST_LEN};
pub use encoder::{hash_leaf, hash_leaves, LeafEncoder, LeafEncoding};
pub use error::{MerkleError, Result};
pub use keccak::Keccak256Hasher;
pub use proof::{MerkleProof, ProofStep};
pub use sha256::Sha256Hasher;
pub use traits::Hasher;
pub use tree::{MerkleTree, OddNodePolicy, TreeOptions};
pub use verifier::{try_verify, verify, verify_hex, verify_siblings, MAX_PROOF_DEPTH};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_integration() {
        let hasher = Keccak256Hasher::new();
        let leaves: Vec<Leaf> = (0u8..10).map(|i| hasher.hash(&[i])).collect();
        let tree = MerkleTree::build(leaves.clone(), hasher, TreeOptions::default()).unwrap();

        for leaf in &leaves {
            let proof = tree.prove(leaf).unwrap();
            assert!(verify(&hasher, leaf, &proof, &tree.root()));
        }
    }
}
