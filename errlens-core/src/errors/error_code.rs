//! ErrorCode trait for stable diagnostic codes.

/// Every errlens error enum implements this to expose a stable code string
/// alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic line: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const USAGE_ERROR: &str = "USAGE_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const FILE_TOO_LARGE: &str = "FILE_TOO_LARGE";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
