//! 葉子值規範化
//!
//! 原始輸入（例如白名單地址）在哈希前必須轉成唯一的字節表示：
//! 去除首尾空白、去掉一次 `0x`/`0X` 前綴、大小寫折疊、按固定寬度解碼。
//! 只在大小寫或前綴上不同的兩個輸入必須得到相同字節，
//! 這樣獨立計算的證明才能對上已發布的根。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::digest::Leaf;
use crate::error::{MerkleError, Result};
use crate::traits::Hasher;

/// 以太坊地址長度（字節）
pub const ADDRESS_LEN: usize = 20;

/// Leaf encoder trait
pub trait LeafEncoder {
    /// 將原始值轉換為規範字節序列
    fn encode(&self, raw: &str) -> Result<Vec<u8>>;
}

fn strip_hex_prefix(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
}

/// Parses an Ethereum address from a hex string.
///
/// Accepts the value with or without `0x` and in any letter case.
pub fn parse_address(raw: &str) -> Result<[u8; ADDRESS_LEN]> {
    let cleaned = strip_hex_prefix(raw);
    if cleaned.len() != ADDRESS_LEN * 2 {
        return Err(MerkleError::InvalidEncoding(format!(
            "Invalid address length: expected {} hex chars, got {}",
            ADDRESS_LEN * 2,
            cleaned.len()
        )));
    }
    let mut address = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(cleaned, &mut address)
        .map_err(|e| MerkleError::InvalidEncoding(format!("Invalid hex encoding: {}", e)))?;
    Ok(address)
}

/// 20 字節打包地址（`abi.encodePacked(address)`）
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressEncoder;

impl LeafEncoder for AddressEncoder {
    fn encode(&self, raw: &str) -> Result<Vec<u8>> {
        Ok(parse_address(raw)?.to_vec())
    }
}

/// 左側補零到 32 字節的地址（`abi.encode(address)`）
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddedAddressEncoder;

impl LeafEncoder for PaddedAddressEncoder {
    fn encode(&self, raw: &str) -> Result<Vec<u8>> {
        let address = parse_address(raw)?;
        let mut word = vec![0u8; 32];
        word[32 - ADDRESS_LEN..].copy_from_slice(&address);
        Ok(word)
    }
}

/// 任意長度的十六進制負載
#[derive(Debug, Clone, Copy, Default)]
pub struct HexEncoder;

impl LeafEncoder for HexEncoder {
    fn encode(&self, raw: &str) -> Result<Vec<u8>> {
        let cleaned = strip_hex_prefix(raw);
        if cleaned.is_empty() {
            return Err(MerkleError::InvalidEncoding("Empty hex value".to_string()));
        }
        if cleaned.len() % 2 != 0 {
            return Err(MerkleError::InvalidEncoding(format!(
                "Odd number of hex chars: {}",
                cleaned.len()
            )));
        }
        hex::decode(cleaned)
            .map_err(|e| MerkleError::InvalidEncoding(format!("Invalid hex encoding: {}", e)))
    }
}

/// 可配置的葉子編碼方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafEncoding {
    #[default]
    Address,
    PaddedAddress,
    Hex,
}

impl LeafEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            LeafEncoding::Address => "address",
            LeafEncoding::PaddedAddress => "padded_address",
            LeafEncoding::Hex => "hex",
        }
    }
}

impl LeafEncoder for LeafEncoding {
    fn encode(&self, raw: &str) -> Result<Vec<u8>> {
        match self {
            LeafEncoding::Address => AddressEncoder.encode(raw),
            LeafEncoding::PaddedAddress => PaddedAddressEncoder.encode(raw),
            LeafEncoding::Hex => HexEncoder.encode(raw),
        }
    }
}

impl fmt::Display for LeafEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LeafEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "address" => Ok(LeafEncoding::Address),
            "padded_address" => Ok(LeafEncoding::PaddedAddress),
            "hex" => Ok(LeafEncoding::Hex),
            other => Err(format!("Unsupported leaf encoding: {}", other)),
        }
    }
}

/// 規範化並哈希單個原始值
pub fn hash_leaf<E, H>(encoder: &E, hasher: &H, raw: &str) -> Result<Leaf>
where
    E: LeafEncoder + ?Sized,
    H: Hasher + ?Sized,
{
    let bytes = encoder.encode(raw)?;
    Ok(hasher.hash(&bytes))
}

/// 規範化並哈希一組原始值，遇到第一個無效值即失敗
pub fn hash_leaves<E, H, S>(encoder: &E, hasher: &H, raws: &[S]) -> Result<Vec<Leaf>>
where
    E: LeafEncoder + ?Sized,
    H: Hasher + ?Sized,
    S: AsRef<str>,
{
    raws.iter()
        .map(|raw| hash_leaf(encoder, hasher, raw.as_ref()))
        .collect()
}
