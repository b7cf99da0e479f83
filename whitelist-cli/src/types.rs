//! 共享數據類型定義

use merkle_core::{HashAlgorithm, LeafEncoding, OddNodePolicy, TreeOptions};
use serde::{Deserialize, Serialize};

/// 白名單工具運行時配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhitelistConfig {
    /// 白名單文件路徑（每行一個值）
    pub input_path: String,

    /// 導出報告路徑
    pub output_path: String,

    /// 哈希算法
    pub hash_algorithm: HashAlgorithm,

    /// 葉子編碼方式
    pub leaf_encoding: LeafEncoding,

    /// 構建前是否排序葉子
    pub sort_leaves: bool,

    /// 奇數節點策略
    pub odd_node_policy: OddNodePolicy,
}

impl WhitelistConfig {
    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            sort_leaves: self.sort_leaves,
            odd_node_policy: self.odd_node_policy,
        }
    }
}

impl Default for WhitelistConfig {
    fn default() -> Self {
        Self {
            input_path: std::env::var("WHITELIST_INPUT_PATH")
                .unwrap_or_else(|_| "./whitelist.txt".to_string()),
            output_path: std::env::var("WHITELIST_OUTPUT_PATH")
                .unwrap_or_else(|_| "./merkle_proofs.json".to_string()),
            hash_algorithm: HashAlgorithm::Keccak256,
            leaf_encoding: LeafEncoding::Address,
            sort_leaves: true,
            odd_node_policy: OddNodePolicy::CarryUp,
        }
    }
}

/// 單個白名單條目的證明
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofEntry {
    /// 原始輸入值（去除空白）
    pub value: String,

    /// 葉子摘要
    pub leaf: String,

    /// 葉子在第 0 層的索引
    pub leaf_index: u64,

    /// 兄弟節點列表（鏈上驗證使用）
    pub proof: Vec<String>,
}

/// 導出的白名單證明報告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofReport {
    /// 哈希算法
    pub hash_algorithm: HashAlgorithm,

    /// 葉子編碼方式
    pub leaf_encoding: LeafEncoding,

    /// 構建選項
    pub options: TreeOptions,

    /// 默克爾根
    pub merkle_root: String,

    /// 葉子數量
    pub leaf_count: usize,

    /// 樹高度
    pub depth: usize,

    /// 生成時間（Unix 秒）
    pub generated_at: i64,

    /// 每個條目的證明
    pub entries: Vec<ProofEntry>,
}
