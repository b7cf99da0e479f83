//! 運行時可選的哈希算法

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::keccak::Keccak256Hasher;
use crate::sha256::Sha256Hasher;
use crate::traits::Hasher;

/// 支持的哈希算法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// Keccak-256（以太坊）
    #[default]
    Keccak256,
    /// SHA-256
    Sha256,
}

impl HashAlgorithm {
    /// 創建對應的 Hasher
    pub fn hasher(&self) -> Box<dyn Hasher> {
        match self {
            HashAlgorithm::Keccak256 => Box::new(Keccak256Hasher::new()),
            HashAlgorithm::Sha256 => Box::new(Sha256Hasher::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Keccak256 => "keccak256",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keccak256" | "keccak" => Ok(HashAlgorithm::Keccak256),
            "sha256" | "sha2" => Ok(HashAlgorithm::Sha256),
            other => Err(format!("Unsupported hash algorithm: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hasher_names_match() {
        for algorithm in [HashAlgorithm::Keccak256, HashAlgorithm::Sha256] {
            assert_eq!(algorithm.hasher().algorithm_name(), algorithm.name());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Keccak256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Keccak256);
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert!("blake3".parse::<HashAlgorithm>().is_err());
    }
}
