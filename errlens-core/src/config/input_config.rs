//! Input configuration.

use serde::{Deserialize, Serialize};

/// Default upper bound on the size of an analyzed file: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Configuration for reading the file under analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum file size in bytes. Default: 10 MiB.
    pub max_file_size: Option<u64>,
    /// Strip a leading UTF-8 byte-order mark. Default: true.
    pub strip_bom: Option<bool>,
}

impl InputConfig {
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    pub fn effective_strip_bom(&self) -> bool {
        self.strip_bom.unwrap_or(true)
    }
}
