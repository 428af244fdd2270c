//! Classification result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final two-flag classification for one file.
///
/// Serializes as `{"hasBasicHandling":..,"hasAdvancedHandling":..}`; field
/// order and key names are part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "hasBasicHandling")]
    pub has_basic_handling: bool,
    #[serde(rename = "hasAdvancedHandling")]
    pub has_advanced_handling: bool,
}

impl Verdict {
    pub fn category(&self) -> HandlingCategory {
        match (self.has_basic_handling, self.has_advanced_handling) {
            (true, true) => HandlingCategory::Both,
            (true, false) => HandlingCategory::Basic,
            (false, true) => HandlingCategory::Advanced,
            (false, false) => HandlingCategory::None,
        }
    }
}

/// Four-way summary of a [`Verdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlingCategory {
    None,
    Basic,
    Advanced,
    Both,
}

impl HandlingCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Basic => "Basic",
            Self::Advanced => "Advanced",
            Self::Both => "Both",
        }
    }

    /// One-sentence advice for a codebase in this category.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Both => "The codebase has basic and advanced exception handling.",
            Self::Advanced => "The codebase has advanced exception handling.",
            Self::Basic => "Basic exception handling detected. Consider enhancements.",
            Self::None => "No exception handling detected. Consider adding exception handling.",
        }
    }
}

impl fmt::Display for HandlingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
