//! 白名單默克爾樹工具
//!
//! 本 crate 是核心庫 `merkle_core` 的外部協作者，負責:
//! 1. 從文件讀取白名單
//! 2. 加載配置（文件 + 環境變量）
//! 3. 構建默克爾樹，輸出根和證明
//! 4. 導出 JSON 證明報告
//!
//! # 架構
//!
//! ```text
//! ┌──────────────┐
//! │     CLI      │
//! └──────┬───────┘
//!        │
//!   ┌────┴────┬──────────┬──────────┐
//!   ▼         ▼          ▼          ▼
//! Source   Config   Whitelist    Report
//!                       │
//!                       ▼
//!                  merkle_core
//! ```
//!
//! # 示例用法
//!
//! ```no_run
//! use std::path::Path;
//! use whitelist_cli::{config::load_config, report, source};
//!
//! let config = load_config(None)?;
//! let values = source::load_values(Path::new(&config.input_path))?;
//! let report = report::build_report(&values, &config)?;
//! println!("Merkle root: {}", report.merkle_root);
//! # Ok::<(), whitelist_cli::CliError>(())
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod source;
pub mod types;
pub mod whitelist;

// Re-export 常用類型
pub use error::{CliError, Result};
pub use types::{ProofEntry, ProofReport, WhitelistConfig};
pub use whitelist::{build_tree, proof_for, verify_value, WhitelistTree};
