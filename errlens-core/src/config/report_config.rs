//! Report configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Shape of the single line written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `{"hasBasicHandling":..,"hasAdvancedHandling":..}`
    #[default]
    Json,
    /// One of `None`, `Basic`, `Advanced`, `Both`.
    Category,
    /// Advice sentence for the category.
    Recommendation,
}

impl ReportFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Category => "category",
            Self::Recommendation => "recommendation",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "category" => Ok(Self::Category),
            "recommendation" => Ok(Self::Recommendation),
            other => Err(ConfigError::InvalidValue {
                field: "report.format".to_string(),
                message: format!(
                    "unknown format '{other}', expected 'json', 'category' or 'recommendation'"
                ),
            }),
        }
    }
}

/// Configuration for the result reporter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format. Default: json.
    pub format: Option<ReportFormat>,
}

impl ReportConfig {
    pub fn effective_format(&self) -> ReportFormat {
        self.format.unwrap_or_default()
    }
}
