//! 默克爾樹構建
//!
//! # 構建規則
//!
//! 1. 第 0 層為葉子摘要；`sort_leaves` 開啟時先按字節字典序排序，
//!    使根只取決於葉子集合而非插入順序
//! 2. 每層按相鄰兩兩配對，配對時兩個摘要先排序再拼接哈希
//!    （`Hasher::hash_pair`），驗證方因此不需要知道左右位置
//! 3. 奇數層的最後一個節點按 [`OddNodePolicy`] 處理：
//!    默認 `CarryUp` 原樣晉升到上一層，不重新哈希
//! 4. 重複直到只剩一個節點，即根
//!
//! 默認配置（`sort_leaves = true`，`CarryUp`）與 OpenZeppelin
//! `MerkleProof.verify` 兼容；`sort_leaves = false` 時與 merkletreejs
//! `{ sortPairs: true }` 的輸出完全一致。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::digest::{HashDigest, Leaf, MerkleRoot};
use crate::encoder::{hash_leaves, LeafEncoder};
use crate::error::{MerkleError, Result};
use crate::keccak::Keccak256Hasher;
use crate::parallel::{hash_level, parallelism_enabled};
use crate::traits::Hasher;

/// 奇數層末尾節點的處理方式
///
/// 兩種策略生成的根不同，必須與目標驗證方保持一致。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddNodePolicy {
    /// 原樣晉升到上一層（merkletreejs 默認行為）
    #[default]
    CarryUp,
    /// 與自身配對後哈希
    Duplicate,
}

/// 樹構建選項
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// 構建前對葉子排序
    pub sort_leaves: bool,

    /// 奇數節點策略
    pub odd_node_policy: OddNodePolicy,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            sort_leaves: true,
            odd_node_policy: OddNodePolicy::CarryUp,
        }
    }
}

impl TreeOptions {
    /// 保持輸入順序（與 merkletreejs `sortPairs: true` 一致）
    pub fn insertion_order() -> Self {
        Self {
            sort_leaves: false,
            ..Self::default()
        }
    }

    pub fn with_odd_node_policy(mut self, policy: OddNodePolicy) -> Self {
        self.odd_node_policy = policy;
        self
    }
}

/// Merkle Tree
///
/// 構建後不可變；葉子集合變化時需要重新構建。
///
/// # 示例
///
/// ```
/// use merkle_core::{Keccak256Hasher, MerkleTree, TreeOptions};
/// use merkle_core::encoder::AddressEncoder;
///
/// let whitelist = [
///     "0x1111111111111111111111111111111111111111",
///     "0x2222222222222222222222222222222222222222",
///     "0x3333333333333333333333333333333333333333",
/// ];
/// let tree = MerkleTree::from_values(
///     &whitelist,
///     &AddressEncoder,
///     Keccak256Hasher::new(),
///     TreeOptions::default(),
/// )
/// .unwrap();
///
/// let leaf = tree.leaf_for(&AddressEncoder, whitelist[1]).unwrap();
/// let proof = tree.prove(&leaf).unwrap();
/// assert!(tree.verify(&leaf, &proof));
/// ```
#[derive(Debug, Clone)]
pub struct MerkleTree<H: Hasher = Keccak256Hasher> {
    /// 所有層級的節點（從底層葉子到根）
    /// levels[0] = 葉子層, levels[n-1] = [根]
    levels: Vec<Vec<HashDigest>>,

    hasher: H,

    options: TreeOptions,
}

impl<H: Hasher> MerkleTree<H> {
    /// 從已哈希的葉子構建樹
    ///
    /// # 錯誤
    /// - `MerkleError::EmptyTree`: 葉子集合為空
    pub fn build(leaves: Vec<Leaf>, hasher: H, options: TreeOptions) -> Result<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let mut current = leaves;
        if options.sort_leaves {
            current.sort_unstable();
        }

        debug!(
            "Building {} tree over {} leaves ({:?}, parallel: {})",
            hasher.algorithm_name(),
            current.len(),
            options,
            parallelism_enabled()
        );

        let mut levels = Vec::new();
        while current.len() > 1 {
            let next = hash_level(&hasher, &current, options.odd_node_policy);
            debug!("Level {}: {} nodes -> {} nodes", levels.len(), current.len(), next.len());
            levels.push(current);
            current = next;
        }
        levels.push(current);

        Ok(Self {
            levels,
            hasher,
            options,
        })
    }

    /// 規範化、哈希原始值後構建樹
    pub fn from_values<E, S>(values: &[S], encoder: &E, hasher: H, options: TreeOptions) -> Result<Self>
    where
        E: LeafEncoder + ?Sized,
        S: AsRef<str>,
    {
        let leaves = hash_leaves(encoder, &hasher, values)?;
        Self::build(leaves, hasher, options)
    }

    /// 用本樹的 Hasher 計算原始值的葉子摘要
    pub fn leaf_for<E: LeafEncoder + ?Sized>(&self, encoder: &E, raw: &str) -> Result<Leaf> {
        crate::encoder::hash_leaf(encoder, &self.hasher, raw)
    }

    /// 獲取 Merkle 根
    pub fn root(&self) -> MerkleRoot {
        // build() 保證頂層恰好一個節點
        self.levels[self.levels.len() - 1][0]
    }

    /// 獲取第 0 層葉子（按構建順序）
    pub fn leaves(&self) -> &[Leaf] {
        &self.levels[0]
    }

    pub fn levels(&self) -> &[Vec<HashDigest>] {
        &self.levels
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// 根以上的層數，等於每個證明的步驟數
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn options(&self) -> TreeOptions {
        self.options
    }

    /// 葉子在第 0 層的位置（重複葉子取第一個）
    pub fn position(&self, leaf: &Leaf) -> Option<usize> {
        if self.options.sort_leaves {
            let index = self.levels[0].partition_point(|node| node < leaf);
            (self.levels[0].get(index) == Some(leaf)).then_some(index)
        } else {
            self.levels[0].iter().position(|node| node == leaf)
        }
    }

    pub fn contains(&self, leaf: &Leaf) -> bool {
        self.position(leaf).is_some()
    }
}
