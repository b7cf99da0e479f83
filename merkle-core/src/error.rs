/// Error type definitions
use thiserror::Error;

use crate::digest::HashDigest;

/// 默克爾樹相關錯誤
///
/// 所有錯誤都只影響當前調用，已構建的樹不會因此失效。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// 空葉子集合無法產生根
    #[error("Cannot build tree from an empty leaf set")]
    EmptyTree,

    /// 請求證明的葉子不在樹中
    #[error("Leaf not found in tree: {0}")]
    LeafNotFound(HashDigest),

    /// 無效的葉子索引
    #[error("Invalid leaf index: {index} (total leaves: {total})")]
    InvalidLeafIndex { index: usize, total: usize },

    /// 證明格式無效（摘要長度錯誤或層數不可能）
    #[error("Malformed proof: {0}")]
    MalformedProof(String),

    /// 原始葉子值無法規範化
    #[error("Invalid leaf encoding: {0}")]
    InvalidEncoding(String),

    /// 反序列化失敗
    #[error("Deserialization failed: {0}")]
    Deserialization(String),
}

pub type Result<T> = std::result::Result<T, MerkleError>;
