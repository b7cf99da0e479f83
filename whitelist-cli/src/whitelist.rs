//! 白名單樹操作
//!
//! 把配置中的算法、編碼和構建選項應用到核心庫。

use merkle_core::{try_verify, HashDigest, Hasher, LeafEncoder, MerkleProof, MerkleTree};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::types::{ProofEntry, WhitelistConfig};

/// 運行時選擇哈希算法的白名單樹
pub type WhitelistTree = MerkleTree<Box<dyn Hasher>>;

/// 按配置構建白名單樹
pub fn build_tree<S: AsRef<str>>(values: &[S], config: &WhitelistConfig) -> Result<WhitelistTree> {
    info!(
        "Building Merkle tree: {} values, hash={}, encoding={}, sort_leaves={}, odd={:?}",
        values.len(),
        config.hash_algorithm,
        config.leaf_encoding,
        config.sort_leaves,
        config.odd_node_policy
    );

    let tree = MerkleTree::from_values(
        values,
        &config.leaf_encoding,
        config.hash_algorithm.hasher(),
        config.tree_options(),
    )?;

    let distinct = {
        let mut leaves = tree.leaves().to_vec();
        leaves.sort_unstable();
        leaves.dedup();
        leaves.len()
    };
    if distinct != tree.leaf_count() {
        warn!(
            "Whitelist contains {} duplicate entries; proofs target the first occurrence",
            tree.leaf_count() - distinct
        );
    }

    info!("Merkle root: {}", tree.root());
    Ok(tree)
}

/// 生成單個值的證明條目
pub fn proof_for(tree: &WhitelistTree, config: &WhitelistConfig, value: &str) -> Result<ProofEntry> {
    let leaf = tree.leaf_for(&config.leaf_encoding, value)?;
    let proof = tree.prove(&leaf)?;
    debug!("Proof for {}: {} siblings", value.trim(), proof.siblings().len());

    Ok(ProofEntry {
        value: value.trim().to_string(),
        leaf: leaf.to_hex(),
        leaf_index: proof.leaf_index,
        proof: proof.to_hex(),
    })
}

/// 僅憑已發布的根驗證值的成員資格
pub fn verify_value<S: AsRef<str>>(
    config: &WhitelistConfig,
    value: &str,
    proof_hex: &[S],
    root_hex: &str,
) -> Result<bool> {
    let hasher = config.hash_algorithm.hasher();
    let bytes = config.leaf_encoding.encode(value)?;
    let leaf = hasher.hash(&bytes);
    let proof = MerkleProof::from_hex(0, proof_hex)?;
    let root = HashDigest::from_hex(root_hex)?;
    let valid = try_verify(&hasher, &leaf, &proof, &root)?;
    debug!("Verification of {} against {}: {}", value.trim(), root_hex, valid);
    Ok(valid)
}
