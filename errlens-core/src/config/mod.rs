//! Configuration system for errlens.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod errlens_config;
pub mod input_config;
pub mod report_config;

pub use errlens_config::{CliOverrides, ErrlensConfig};
pub use input_config::InputConfig;
pub use report_config::{ReportConfig, ReportFormat};
