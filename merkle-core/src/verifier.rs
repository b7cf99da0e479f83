//! 默克爾證明驗證
//!
//! 驗證步驟:
//! 1. `current = leaf`
//! 2. 逐步消費證明:
//!    - `Sibling(h)`: `current = hash_pair(current, h)`，排序規則與構建時相同
//!    - `CarryUp`: `current` 不變
//! 3. 比較最終的 `current` 與根
//!
//! 必須使用與構建時相同的 Hasher 和配對規則，任何偏差都只會表現為
//! 驗證失敗，而不是崩潰。

use crate::digest::{HashDigest, Leaf, MerkleRoot};
use crate::error::{MerkleError, Result};
use crate::proof::{MerkleProof, ProofStep};
use crate::traits::Hasher;

/// 證明最多步數
///
/// 葉子索引為 `u64`，任何有效樹的高度都不超過 64。
pub const MAX_PROOF_DEPTH: usize = 64;

/// 重新計算根
pub fn compute_root<H: Hasher + ?Sized>(hasher: &H, leaf: &Leaf, steps: &[ProofStep]) -> HashDigest {
    steps.iter().fold(*leaf, |current, step| match step {
        ProofStep::Sibling(sibling) => hasher.hash_pair(&current, sibling),
        ProofStep::CarryUp => current,
    })
}

/// 驗證證明，格式錯誤時返回錯誤
///
/// # 錯誤
/// - `MerkleError::MalformedProof`: 步數超過 [`MAX_PROOF_DEPTH`]
pub fn try_verify<H: Hasher + ?Sized>(
    hasher: &H,
    leaf: &Leaf,
    proof: &MerkleProof,
    root: &MerkleRoot,
) -> Result<bool> {
    if proof.steps.len() > MAX_PROOF_DEPTH {
        return Err(MerkleError::MalformedProof(format!(
            "{} steps exceeds maximum tree depth {}",
            proof.steps.len(),
            MAX_PROOF_DEPTH
        )));
    }
    Ok(&compute_root(hasher, leaf, &proof.steps) == root)
}

/// 驗證證明
///
/// # 返回
/// - `true`: 葉子屬於以 `root` 為根的樹
/// - `false`: 數據被篡改、證明無效或格式錯誤
pub fn verify<H: Hasher + ?Sized>(
    hasher: &H,
    leaf: &Leaf,
    proof: &MerkleProof,
    root: &MerkleRoot,
) -> bool {
    try_verify(hasher, leaf, proof, root).unwrap_or(false)
}

/// 驗證緊湊的兄弟節點列表（OpenZeppelin `MerkleProof.verify` 語義）
pub fn verify_siblings<H: Hasher + ?Sized>(
    hasher: &H,
    leaf: &Leaf,
    siblings: &[HashDigest],
    root: &MerkleRoot,
) -> bool {
    if siblings.len() > MAX_PROOF_DEPTH {
        return false;
    }
    let current = siblings
        .iter()
        .fold(*leaf, |current, sibling| hasher.hash_pair(&current, sibling));
    &current == root
}

/// 驗證十六進制形式的葉子、證明和根
///
/// # 錯誤
/// - `MerkleError::MalformedProof`: 任一摘要不是 32 字節十六進制，或步數過多
pub fn verify_hex<H, S>(hasher: &H, leaf_hex: &str, proof_hex: &[S], root_hex: &str) -> Result<bool>
where
    H: Hasher + ?Sized,
    S: AsRef<str>,
{
    let leaf = HashDigest::from_hex(leaf_hex)?;
    let root = HashDigest::from_hex(root_hex)?;
    let proof = MerkleProof::from_hex(0, proof_hex)?;
    try_verify(hasher, &leaf, &proof, &root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keccak::Keccak256Hasher;

    #[test]
    fn test_empty_proof_verifies_leaf_as_root() {
        let hasher = Keccak256Hasher::new();
        let leaf = hasher.hash(b"single leaf");
        let proof = MerkleProof::new(0, vec![]);

        assert!(verify(&hasher, &leaf, &proof, &leaf));
        assert!(!verify(&hasher, &hasher.hash(b"wrong data"), &proof, &leaf));
    }

    #[test]
    fn test_two_leaf_tree_both_sides() {
        let hasher = Keccak256Hasher::new();
        let a = hasher.hash(b"leaf 0");
        let b = hasher.hash(b"leaf 1");
        let root = hasher.hash_pair(&a, &b);

        assert!(verify_siblings(&hasher, &a, &[b], &root));
        assert!(verify_siblings(&hasher, &b, &[a], &root));
        assert!(!verify_siblings(&hasher, &a, &[a], &root));
    }

    #[test]
    fn test_carry_up_passes_through() {
        let hasher = Keccak256Hasher::new();
        let a = hasher.hash(b"a");
        let b = hasher.hash(b"b");
        let root = hasher.hash_pair(&a, &b);
        let proof = MerkleProof::new(0, vec![ProofStep::CarryUp, ProofStep::Sibling(b)]);

        assert!(verify(&hasher, &a, &proof, &root));
    }

    #[test]
    fn test_overlong_proof_is_malformed() {
        let hasher = Keccak256Hasher::new();
        let leaf = hasher.hash(b"leaf");
        let proof = MerkleProof::new(0, vec![ProofStep::CarryUp; MAX_PROOF_DEPTH + 1]);

        assert!(matches!(
            try_verify(&hasher, &leaf, &proof, &leaf),
            Err(MerkleError::MalformedProof(_))
        ));
        assert!(!verify(&hasher, &leaf, &proof, &leaf));
    }

    #[test]
    fn test_verify_hex_rejects_bad_lengths() {
        let hasher = Keccak256Hasher::new();
        let digest = format!("0x{}", "11".repeat(32));

        let result = verify_hex(&hasher, &digest, &["0x11"], &digest);
        assert!(matches!(result, Err(MerkleError::MalformedProof(_))));

        let result = verify_hex::<_, &str>(&hasher, "0x11", &[], &digest);
        assert!(matches!(result, Err(MerkleError::MalformedProof(_))));
    }

    #[test]
    fn test_verify_hex_accepts_mixed_case() {
        let hasher = Keccak256Hasher::new();
        let a = hasher.hash(b"a");
        let b = hasher.hash(b"b");
        let root = hasher.hash_pair(&a, &b);

        let ok = verify_hex(
            &hasher,
            &a.to_hex().to_uppercase().replacen("0X", "0x", 1),
            &[b.to_hex()],
            &root.to_hex(),
        )
        .unwrap();
        assert!(ok);
    }
}
