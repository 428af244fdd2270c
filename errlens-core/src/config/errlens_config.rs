//! Top-level errlens configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{InputConfig, ReportConfig, ReportFormat};
use crate::errors::ConfigError;

/// Name of the project-level config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "errlens.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ERRLENS_*`)
/// 3. Project config (`errlens.toml` in the root, or `--config <PATH>`)
/// 4. User config (`~/.errlens/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ErrlensConfig {
    pub input: InputConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file; replaces the project-level lookup and must exist.
    pub config_file: Option<PathBuf>,
    pub max_file_size: Option<u64>,
    pub format: Option<ReportFormat>,
}

impl ErrlensConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config, or the explicitly requested file
        match cli_overrides.and_then(|cli| cli.config_file.as_deref()) {
            Some(explicit) => {
                if !explicit.is_file() {
                    return Err(ConfigError::FileNotFound {
                        path: explicit.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, explicit)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ErrlensConfig) -> Result<(), ConfigError> {
        if config.input.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "input.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.errlens/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".errlens").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ErrlensConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ErrlensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        tracing::debug!(path = %path.display(), "merged config file");
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut ErrlensConfig, other: &ErrlensConfig) {
        if other.input.max_file_size.is_some() {
            base.input.max_file_size = other.input.max_file_size;
        }
        if other.input.strip_bom.is_some() {
            base.input.strip_bom = other.input.strip_bom;
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ERRLENS_INPUT_MAX_FILE_SIZE`, `ERRLENS_REPORT_FORMAT`, etc.
    /// Unparseable values are logged and skipped.
    fn apply_env_overrides(config: &mut ErrlensConfig) {
        if let Ok(val) = std::env::var("ERRLENS_INPUT_MAX_FILE_SIZE") {
            match val.parse::<u64>() {
                Ok(v) => config.input.max_file_size = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring ERRLENS_INPUT_MAX_FILE_SIZE"),
            }
        }
        if let Ok(val) = std::env::var("ERRLENS_INPUT_STRIP_BOM") {
            match val.parse::<bool>() {
                Ok(v) => config.input.strip_bom = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring ERRLENS_INPUT_STRIP_BOM"),
            }
        }
        if let Ok(val) = std::env::var("ERRLENS_REPORT_FORMAT") {
            match val.parse::<ReportFormat>() {
                Ok(v) => config.report.format = Some(v),
                Err(e) => tracing::warn!(error = %e, "ignoring ERRLENS_REPORT_FORMAT"),
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ErrlensConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_file_size {
            config.input.max_file_size = Some(v);
        }
        if let Some(v) = cli.format {
            config.report.format = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
