//! 白名單輸入讀取
//!
//! 每行一個值，空行和 `#` 開頭的註釋行會被跳過。

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{CliError, Result};

/// 從任意讀取器解析白名單
pub fn read_values<R: Read>(reader: R) -> Result<Vec<String>> {
    let reader = BufReader::new(reader);
    let mut values = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            CliError::Input(format!("Failed to read line {}: {}", line_num + 1, e))
        })?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        values.push(trimmed.to_string());

        if (line_num + 1) % 1_000_000 == 0 {
            debug!("Processed {} lines...", line_num + 1);
        }
    }

    Ok(values)
}

/// 從文件加載白名單
pub fn load_values(path: &Path) -> Result<Vec<String>> {
    info!("Reading whitelist from {}", path.display());
    let file = File::open(path).map_err(|e| {
        CliError::Input(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let values = read_values(file)?;
    info!("Total values: {}", values.len());
    Ok(values)
}
