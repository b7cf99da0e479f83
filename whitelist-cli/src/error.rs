//! 白名單工具統一錯誤類型定義
//!
//! 使用 thiserror crate 提供錯誤鏈，核心庫錯誤原樣包裝。

use thiserror::Error;

/// 白名單工具錯誤類型
#[derive(Error, Debug)]
pub enum CliError {
    /// 默克爾樹錯誤
    ///
    /// 空白名單、地址不在樹中、證明格式錯誤等
    #[error("Merkle error: {0}")]
    Merkle(#[from] merkle_core::MerkleError),

    /// 配置錯誤
    ///
    /// 當配置文件格式錯誤或缺少必要參數時返回此錯誤
    #[error("Configuration error: {0}")]
    Config(String),

    /// 輸入錯誤
    ///
    /// 白名單文件中的某一行無法解析
    #[error("Invalid input: {0}")]
    Input(String),

    /// 序列化錯誤
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O 錯誤
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 類型別名
pub type Result<T> = std::result::Result<T, CliError>;

/// 從 JSON 錯誤轉換
impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

/// 從 config crate 錯誤轉換
impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
