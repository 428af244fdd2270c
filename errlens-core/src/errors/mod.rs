//! Error handling for errlens.
//! One error enum per subsystem, `thiserror` only.

pub mod analyze_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod parse_error;
pub mod usage_error;

pub use analyze_error::AnalyzeError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use input_error::InputError;
pub use parse_error::ParseError;
pub use usage_error::UsageError;
