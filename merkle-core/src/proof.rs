//! 默克爾證明生成
//!
//! 證明是從葉子到根逐層記錄的步驟序列，每個根以下的層恰好一步：
//! - `Sibling(h)`: 該層存在配對節點 `h`
//! - `CarryUp`: 當前節點是奇數層末尾，原樣晉升，沒有配對
//!
//! 鏈上驗證方（OpenZeppelin `MerkleProof`）只接受兄弟節點列表，
//! `CarryUp` 在那裡是隱式的，見 [`MerkleProof::siblings`]。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::digest::{HashDigest, Leaf, MerkleRoot};
use crate::error::{MerkleError, Result};
use crate::traits::Hasher;
use crate::tree::{MerkleTree, OddNodePolicy};

/// 單層證明步驟
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofStep {
    /// 配對的兄弟節點
    Sibling(HashDigest),
    /// 無兄弟節點，當前值原樣晉升
    CarryUp,
}

impl ProofStep {
    pub fn sibling(&self) -> Option<&HashDigest> {
        match self {
            ProofStep::Sibling(digest) => Some(digest),
            ProofStep::CarryUp => None,
        }
    }
}

/// 默克爾證明
///
/// # 示例
///
/// ```
/// use merkle_core::{HashDigest, Keccak256Hasher, MerkleTree, ProofStep, TreeOptions};
///
/// let leaves = vec![HashDigest([1u8; 32]), HashDigest([2u8; 32]), HashDigest([3u8; 32])];
/// let tree = MerkleTree::build(leaves, Keccak256Hasher::new(), TreeOptions::default()).unwrap();
///
/// let proof = tree.prove(&HashDigest([3u8; 32])).unwrap();
/// assert_eq!(proof.steps[0], ProofStep::CarryUp);
/// assert_eq!(proof.siblings().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// 葉子在第 0 層的索引（僅供參考，驗證不依賴位置）
    pub leaf_index: u64,

    /// 從葉子到根的步驟
    ///
    /// steps[0] 是最底層，steps[n-1] 是根下一層
    pub steps: Vec<ProofStep>,
}

impl MerkleProof {
    /// 創建新的默克爾證明
    pub fn new(leaf_index: u64, steps: Vec<ProofStep>) -> Self {
        Self { leaf_index, steps }
    }

    /// 從緊湊的兄弟節點列表構造（無顯式 `CarryUp`）
    pub fn from_siblings(leaf_index: u64, siblings: Vec<HashDigest>) -> Self {
        Self {
            leaf_index,
            steps: siblings.into_iter().map(ProofStep::Sibling).collect(),
        }
    }

    /// 獲取證明深度（樹的高度）
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// 緊湊形式：只保留兄弟節點
    pub fn siblings(&self) -> Vec<HashDigest> {
        self.steps.iter().filter_map(ProofStep::sibling).copied().collect()
    }

    /// 與 merkletreejs `getHexProof` 相同的十六進制列表
    pub fn to_hex(&self) -> Vec<String> {
        self.steps
            .iter()
            .filter_map(ProofStep::sibling)
            .map(HashDigest::to_hex)
            .collect()
    }

    /// 解析十六進制兄弟節點列表
    ///
    /// # 錯誤
    /// - 任一條目長度錯誤或非十六進制時返回 `MalformedProof`
    pub fn from_hex<S: AsRef<str>>(leaf_index: u64, entries: &[S]) -> Result<Self> {
        let siblings = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                HashDigest::from_hex(entry.as_ref()).map_err(|e| {
                    MerkleError::MalformedProof(format!("entry {}: {}", i, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_siblings(leaf_index, siblings))
    }

    /// 序列化證明為字節（bincode）
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| {
            MerkleError::Deserialization(format!("Failed to serialize MerkleProof: {}", e))
        })
    }

    /// 從字節反序列化證明
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| {
            MerkleError::Deserialization(format!("Failed to deserialize MerkleProof: {}", e))
        })
    }

    /// 驗證葉子屬於以 `root` 為根的樹
    pub fn verify<H: Hasher + ?Sized>(&self, hasher: &H, leaf: &Leaf, root: &MerkleRoot) -> bool {
        crate::verifier::verify(hasher, leaf, self, root)
    }
}

impl<H: Hasher> MerkleTree<H> {
    /// 生成指定葉子的 Merkle Proof
    ///
    /// # 錯誤
    /// - `MerkleError::LeafNotFound`: 葉子不在第 0 層
    pub fn prove(&self, leaf: &Leaf) -> Result<MerkleProof> {
        let index = self
            .position(leaf)
            .ok_or(MerkleError::LeafNotFound(*leaf))?;
        self.prove_index(index)
    }

    /// 生成第 0 層指定索引的 Merkle Proof
    ///
    /// # 錯誤
    /// - `MerkleError::InvalidLeafIndex`: 索引超出範圍
    pub fn prove_index(&self, leaf_index: usize) -> Result<MerkleProof> {
        let total = self.leaf_count();
        if leaf_index >= total {
            return Err(MerkleError::InvalidLeafIndex {
                index: leaf_index,
                total,
            });
        }

        let levels = self.levels();
        let mut steps = Vec::with_capacity(self.depth());
        let mut current_index = leaf_index;

        // 從葉子層向上遍歷到根的下一層
        for level in &levels[..levels.len() - 1] {
            let sibling_index = current_index ^ 1;

            let step = if sibling_index < level.len() {
                ProofStep::Sibling(level[sibling_index])
            } else {
                match self.options().odd_node_policy {
                    OddNodePolicy::CarryUp => ProofStep::CarryUp,
                    OddNodePolicy::Duplicate => ProofStep::Sibling(level[current_index]),
                }
            };
            steps.push(step);

            current_index /= 2;
        }

        debug!(
            "Generated proof for leaf {} with {} steps",
            leaf_index,
            steps.len()
        );

        Ok(MerkleProof {
            leaf_index: leaf_index as u64,
            steps,
        })
    }

    /// 用本樹的 Hasher 和根驗證證明
    pub fn verify(&self, leaf: &Leaf, proof: &MerkleProof) -> bool {
        crate::verifier::verify(self.hasher(), leaf, proof, &self.root())
    }
}
