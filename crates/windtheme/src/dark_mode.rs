//! Dark-mode activation strategy.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_yaml::Value;

use crate::error::{ConfigError, Result};
use crate::fields::kind;

/// How the consuming tool decides when dark variants apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// Follow the OS preference through `prefers-color-scheme`.
    Media,
    /// Apply dark variants under an explicit `dark` marker class.
    Class,
}

impl DarkModeStrategy {
    pub const ALL: [DarkModeStrategy; 2] = [DarkModeStrategy::Media, DarkModeStrategy::Class];

    pub fn as_str(&self) -> &'static str {
        match self {
            DarkModeStrategy::Media => "media",
            DarkModeStrategy::Class => "class",
        }
    }

    /// The CSS condition dark variants are emitted under.
    pub fn condition(&self) -> &'static str {
        match self {
            DarkModeStrategy::Media => "@media (prefers-color-scheme: dark)",
            DarkModeStrategy::Class => ".dark",
        }
    }

    pub(crate) fn parse(value: &Value, field: &str) -> Result<Self> {
        let text = value.as_str().ok_or_else(|| {
            ConfigError::malformed(
                field,
                format!("must be one of: media, class (got {})", kind(value)),
            )
        })?;
        text.parse()
            .map_err(|message: String| ConfigError::malformed(field, message))
    }
}

impl FromStr for DarkModeStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DarkModeStrategy::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("must be one of: media, class (got '{}')", s))
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
