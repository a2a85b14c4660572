//! Named `box-shadow` presets.

use std::fmt;

use serde::{Serialize, Serializer};
use windtheme_shadow::{BoxShadow, ShadowError};

/// A shadow preset: the CSS value as written, plus its parsed structure.
///
/// The source text is what gets handed to the consuming tool and what is written
/// back on serialization; the parsed [`BoxShadow`] is kept for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowToken {
    source: String,
    shadow: BoxShadow,
}

impl ShadowToken {
    /// Parses a CSS `box-shadow` value. Surrounding whitespace is trimmed.
    pub fn parse(value: &str) -> Result<Self, ShadowError> {
        let source = value.trim();
        let shadow = BoxShadow::parse(source)?;
        Ok(Self {
            source: source.to_string(),
            shadow,
        })
    }

    /// The CSS value as written in the config.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn shadow(&self) -> &BoxShadow {
        &self.shadow
    }
}

impl fmt::Display for ShadowToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for ShadowToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}
