/// Unified interface for tree hash functions
use crate::digest::{HashDigest, DIGEST_LEN};

/// Hasher trait
///
/// 樹構建、證明生成與驗證必須使用同一個 Hasher，否則證明會靜默失效。
pub trait Hasher: Send + Sync {
    /// Hash arbitrary bytes
    fn hash(&self, data: &[u8]) -> HashDigest;

    /// Algorithm name
    fn algorithm_name(&self) -> &str;

    /// 合併兩個子節點
    ///
    /// 先按字節字典序排序，再拼接為 64 字節後哈希，
    /// 因此結果與左右位置無關。
    fn hash_pair(&self, a: &HashDigest, b: &HashDigest) -> HashDigest {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let mut buf = [0u8; DIGEST_LEN * 2];
        buf[..DIGEST_LEN].copy_from_slice(first.as_bytes());
        buf[DIGEST_LEN..].copy_from_slice(second.as_bytes());
        self.hash(&buf)
    }
}

impl<H: Hasher + ?Sized> Hasher for Box<H> {
    fn hash(&self, data: &[u8]) -> HashDigest {
        (**self).hash(data)
    }

    fn algorithm_name(&self) -> &str {
        (**self).algorithm_name()
    }

    fn hash_pair(&self, a: &HashDigest, b: &HashDigest) -> HashDigest {
        (**self).hash_pair(a, b)
    }
}

impl<H: Hasher + ?Sized> Hasher for &H {
    fn hash(&self, data: &[u8]) -> HashDigest {
        (**self).hash(data)
    }

    fn algorithm_name(&self) -> &str {
        (**self).algorithm_name()
    }

    fn hash_pair(&self, a: &HashDigest, b: &HashDigest) -> HashDigest {
        (**self).hash_pair(a, b)
    }
}
