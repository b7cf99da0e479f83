//! 證明報告生成與寫入
//!
//! 報告包含根、構建參數以及每個白名單條目的證明，
//! 供前端或領取腳本直接讀取。

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::Result;
use crate::types::{ProofReport, WhitelistConfig};
use crate::whitelist::{build_tree, proof_for};

/// 為整個白名單生成證明報告
pub fn build_report<S: AsRef<str>>(values: &[S], config: &WhitelistConfig) -> Result<ProofReport> {
    let tree = build_tree(values, config)?;

    let entries = values
        .iter()
        .map(|value| proof_for(&tree, config, value.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Ok(ProofReport {
        hash_algorithm: config.hash_algorithm,
        leaf_encoding: config.leaf_encoding,
        options: config.tree_options(),
        merkle_root: tree.root().to_hex(),
        leaf_count: tree.leaf_count(),
        depth: tree.depth(),
        generated_at: Utc::now().timestamp(),
        entries,
    })
}

/// 原子寫入文件
///
/// 先寫入同目錄下唯一命名的臨時文件，sync 後再重命名覆蓋目標。
/// 寫入失敗時臨時文件隨 drop 刪除。
pub fn write_file_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// 寫出 JSON 報告
pub fn write_report(report: &ProofReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    write_file_atomic(path, &json)?;
    info!(
        "Wrote {} proofs for root {} to {}",
        report.entries.len(),
        report.merkle_root,
        path.display()
    );
    Ok(())
}

/// 讀取 JSON 報告
pub fn read_report(path: &Path) -> Result<ProofReport> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
