//! 層內配對哈希的並行執行
//!
//! 同一層的配對彼此獨立，啟用 `parallel` feature 後在 rayon 線程池上執行。
//! 結果必須與順序執行逐位一致，順序版本是參考語義。

use crate::digest::HashDigest;
use crate::tree::OddNodePolicy;
use crate::traits::Hasher;

/// 低於此節點數時直接順序執行
pub const PARALLEL_THRESHOLD: usize = 1 << 12;

#[cfg(feature = "parallel")]
const MIN_CHUNK_PAIRS: usize = 64;

fn combine<H: Hasher + ?Sized>(hasher: &H, pair: &[HashDigest], policy: OddNodePolicy) -> HashDigest {
    match pair {
        [left, right] => hasher.hash_pair(left, right),
        _ => {
            let single = &pair[0];
            match policy {
                OddNodePolicy::CarryUp => *single,
                OddNodePolicy::Duplicate => hasher.hash_pair(single, single),
            }
        }
    }
}

pub(crate) fn hash_level_sequential<H: Hasher + ?Sized>(
    hasher: &H,
    level: &[HashDigest],
    policy: OddNodePolicy,
) -> Vec<HashDigest> {
    level
        .chunks(2)
        .map(|pair| combine(hasher, pair, policy))
        .collect()
}

#[cfg(feature = "parallel")]
pub(crate) fn hash_level<H: Hasher + ?Sized>(
    hasher: &H,
    level: &[HashDigest],
    policy: OddNodePolicy,
) -> Vec<HashDigest> {
    use rayon::prelude::*;

    if level.len() < PARALLEL_THRESHOLD {
        return hash_level_sequential(hasher, level, policy);
    }
    level
        .par_chunks(2)
        .with_min_len(MIN_CHUNK_PAIRS)
        .map(|pair| combine(hasher, pair, policy))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn hash_level<H: Hasher + ?Sized>(
    hasher: &H,
    level: &[HashDigest],
    policy: OddNodePolicy,
) -> Vec<HashDigest> {
    hash_level_sequential(hasher, level, policy)
}

/// 是否編譯了並行支持
pub fn parallelism_enabled() -> bool {
    cfg!(feature = "parallel")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keccak::Keccak256Hasher;

    #[test]
    fn test_parallel_matches_sequential() {
        let hasher = Keccak256Hasher::new();
        let level: Vec<HashDigest> = (0..(PARALLEL_THRESHOLD as u32 + 3))
            .map(|i| hasher.hash(&i.to_be_bytes()))
            .collect();

        for policy in [OddNodePolicy::CarryUp, OddNodePolicy::Duplicate] {
            assert_eq!(
                hash_level(&hasher, &level, policy),
                hash_level_sequential(&hasher, &level, policy)
            );
        }
    }

    #[test]
    fn test_parallelism_flag_follows_feature() {
        assert_eq!(parallelism_enabled(), cfg!(feature = "parallel"));
    }

    #[test]
    fn test_odd_tail_policies() {
        let hasher = Keccak256Hasher::new();
        let level = vec![HashDigest([1u8; 32]), HashDigest([2u8; 32]), HashDigest([3u8; 32])];

        let carried = hash_level_sequential(&hasher, &level, OddNodePolicy::CarryUp);
        assert_eq!(carried.len(), 2);
        assert_eq!(carried[1], level[2]);

        let duplicated = hash_level_sequential(&hasher, &level, OddNodePolicy::Duplicate);
        assert_eq!(duplicated[1], hasher.hash_pair(&level[2], &level[2]));
    }
}
