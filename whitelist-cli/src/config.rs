//! 配置管理模塊
//!
//! 負責加載和驗證白名單工具配置

use crate::error::{CliError, Result};
use crate::types::WhitelistConfig;
use config::{Config, Environment, File};
use merkle_core::{HashAlgorithm, LeafEncoding, OddNodePolicy};
use std::path::Path;

/// 加載配置
///
/// 來源按優先級從低到高:
/// 1. 默認值
/// 2. 配置文件（支持 TOML、JSON、YAML；顯式指定時必須存在）
/// 3. 環境變量，前綴 `WHITELIST_`，例如 `WHITELIST_HASH_ALGORITHM=sha256`
///
/// # 示例
/// ```no_run
/// use std::path::Path;
/// use whitelist_cli::config::load_config;
///
/// let config = load_config(Some(Path::new("whitelist.toml"))).expect("Failed to load config");
/// println!("Input: {}", config.input_path);
/// ```
pub fn load_config(config_path: Option<&Path>) -> Result<WhitelistConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(Environment::with_prefix("WHITELIST"))
        .build()
        .map_err(|e| CliError::Config(format!("Failed to load config: {}", e)))?;

    let whitelist_config: WhitelistConfig = config
        .try_deserialize()
        .map_err(|e| CliError::Config(format!("Failed to parse config: {}", e)))?;

    validate_config(&whitelist_config)?;

    Ok(whitelist_config)
}

/// 命令行參數對配置的覆蓋
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub hash_algorithm: Option<HashAlgorithm>,
    pub leaf_encoding: Option<LeafEncoding>,
    /// 保持輸入順序，不排序葉子
    pub keep_order: bool,
    /// 奇數層末尾節點與自身配對
    pub duplicate_odd: bool,
}

/// 將命令行覆蓋應用到已加載的配置上
///
/// 未指定的參數保留文件或環境變量中的值。
pub fn apply_overrides(config: &mut WhitelistConfig, overrides: &ConfigOverrides) {
    if let Some(hash) = overrides.hash_algorithm {
        config.hash_algorithm = hash;
    }
    if let Some(encoding) = overrides.leaf_encoding {
        config.leaf_encoding = encoding;
    }
    if overrides.keep_order {
        config.sort_leaves = false;
    }
    if overrides.duplicate_odd {
        config.odd_node_policy = OddNodePolicy::Duplicate;
    }
}

/// 驗證配置的有效性
pub fn validate_config(config: &WhitelistConfig) -> Result<()> {
    if config.input_path.trim().is_empty() {
        return Err(CliError::Config("input_path must not be empty".to_string()));
    }

    if config.output_path.trim().is_empty() {
        return Err(CliError::Config("output_path must not be empty".to_string()));
    }

    Ok(())
}
