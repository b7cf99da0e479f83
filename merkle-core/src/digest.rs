//! 固定長度哈希摘要
//!
//! 葉子、內部節點與根共用同一個 32 字節摘要類型。
//! 排序為字節字典序，與 Solidity `bytes32` 比較以及 merkletreejs 的
//! `Buffer.compare` 一致。

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{MerkleError, Result};

/// 摘要長度（字節）
pub const DIGEST_LEN: usize = 32;

/// 32 字節哈希摘要
///
/// # 示例
///
/// ```
/// use merkle_core::HashDigest;
///
/// assert!("0xAB".parse::<HashDigest>().is_err());
///
/// let zero = HashDigest::from_hex(&"00".repeat(32)).unwrap();
/// assert_eq!(zero.to_string(), format!("0x{}", "00".repeat(32)));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashDigest(pub [u8; DIGEST_LEN]);

/// 葉子摘要
pub type Leaf = HashDigest;

/// 默克爾根
pub type MerkleRoot = HashDigest;

impl HashDigest {
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// 從任意長度切片構造，長度必須正好 32 字節
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| {
            MerkleError::MalformedProof(format!(
                "expected {} byte digest, got {} bytes",
                DIGEST_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(array))
    }

    /// 解析十六進制字符串
    ///
    /// 接受 `0x`/`0X` 前綴及大小寫混合；長度不是 64 個十六進制字符時
    /// 返回 `MalformedProof`。
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let cleaned = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if cleaned.len() != DIGEST_LEN * 2 {
            return Err(MerkleError::MalformedProof(format!(
                "expected {} hex chars, got {}",
                DIGEST_LEN * 2,
                cleaned.len()
            )));
        }
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(cleaned, &mut bytes)
            .map_err(|e| MerkleError::MalformedProof(format!("invalid hex digest: {}", e)))?;
        Ok(Self(bytes))
    }

    /// `0x` 前綴的小寫十六進制表示
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; DIGEST_LEN]> for HashDigest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<HashDigest> for [u8; DIGEST_LEN] {
    fn from(digest: HashDigest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for HashDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for HashDigest {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashDigest({})", self)
    }
}

impl Serialize for HashDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct HashDigestVisitor;

impl<'de> Visitor<'de> for HashDigestVisitor {
    type Value = HashDigest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a 0x-prefixed 32 byte hex string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<HashDigest, E> {
        HashDigest::from_hex(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for HashDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(HashDigestVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip_and_case_folding() {
        let lower = format!("0x{}", "ab".repeat(32));
        let upper = format!("0X{}", "AB".repeat(32));
        let bare = "aB".repeat(32);

        let a = HashDigest::from_hex(&lower).unwrap();
        let b = HashDigest::from_hex(&upper).unwrap();
        let c = HashDigest::from_hex(&bare).unwrap();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.to_hex(), lower);
        assert_eq!(a.to_string(), lower);
    }

    #[test]
    fn test_wrong_length_is_malformed() {
        let result = HashDigest::from_hex("0x1234");
        assert!(matches!(result, Err(MerkleError::MalformedProof(_))));

        let result = HashDigest::from_slice(&[0u8; 31]);
        assert!(matches!(result, Err(MerkleError::MalformedProof(_))));
    }

    #[test]
    fn test_invalid_hex_is_malformed() {
        let result = HashDigest::from_hex(&"zz".repeat(32));
        assert!(matches!(result, Err(MerkleError::MalformedProof(_))));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut low = [0xffu8; 32];
        low[0] = 0x00;
        let mut high = [0x00u8; 32];
        high[0] = 0x01;

        assert!(HashDigest(low) < HashDigest(high));
    }
}
