//! Theme extensions: additive design tokens layered onto the generator's defaults.
//!
//! Two token families are recognized under `theme.extend`:
//!
//! ```yaml
//! theme:
//!   extend:
//!     colors:
//!       brand:            # palette name
//!         50: "#f0fdf9"   # all ten shade steps, 50 through 900
//!         # ...
//!         900: "#134e4a"
//!     boxShadow:
//!       soft: 0 10px 30px rgba(15, 23, 42, 0.08)
//!       card: 0 8px 22px rgba(15, 23, 42, 0.08)
//! ```
//!
//! Palette and shadow names end up inside generated class names (`bg-brand-500`,
//! `shadow-card`), so they are restricted to ASCII letters, digits, `-` and `_`.
//!
//! Both families are optional; an absent family is an empty map.

mod palette;
mod shadow;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_yaml::Value;

pub use palette::{HexColor, Palette, ShadeKey};
pub use shadow::ShadowToken;

use crate::error::{ConfigError, Result};
use crate::fields::{check_keys, expect_mapping, expect_str, is_token_name, join, key_name, optional};

/// The `theme.extend` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThemeExtensions {
    colors: BTreeMap<String, Palette>,
    #[serde(rename = "boxShadow")]
    box_shadow: BTreeMap<String, ShadowToken>,
}

impl ThemeExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a palette, returning the updated extensions.
    ///
    /// # Errors
    ///
    /// Fails if `name` is not a valid token name.
    pub fn with_palette(mut self, name: impl Into<String>, palette: Palette) -> Result<Self> {
        let name = checked_name(name.into(), "colors", "palette")?;
        self.colors.insert(name, palette);
        Ok(self)
    }

    /// Adds a shadow preset, returning the updated extensions.
    ///
    /// # Errors
    ///
    /// Fails if `name` is not a valid token name.
    pub fn with_shadow(mut self, name: impl Into<String>, shadow: ShadowToken) -> Result<Self> {
        let name = checked_name(name.into(), "boxShadow", "shadow")?;
        self.box_shadow.insert(name, shadow);
        Ok(self)
    }

    pub fn colors(&self) -> &BTreeMap<String, Palette> {
        &self.colors
    }

    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.colors.get(name)
    }

    pub fn box_shadow(&self) -> &BTreeMap<String, ShadowToken> {
        &self.box_shadow
    }

    pub fn shadow(&self, name: &str) -> Option<&ShadowToken> {
        self.box_shadow.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.box_shadow.is_empty()
    }

    /// Reads the `extend` mapping.
    pub(crate) fn parse(value: &Value, field: &str) -> Result<Self> {
        let map = expect_mapping(value, field)?;
        check_keys(map, field, &["colors", "boxShadow"])?;

        let mut extensions = ThemeExtensions::new();

        if let Some(colors) = optional(map, "colors") {
            let colors_field = join(field, "colors");
            for (name, palette_value) in expect_mapping(colors, &colors_field)? {
                let name = token_name(name, &colors_field, "palette")?;
                let palette = Palette::parse(palette_value, &join(&colors_field, &name))?;
                extensions.colors.insert(name, palette);
            }
        }

        if let Some(shadows) = optional(map, "boxShadow") {
            let shadows_field = join(field, "boxShadow");
            for (name, shadow_value) in expect_mapping(shadows, &shadows_field)? {
                let name = token_name(name, &shadows_field, "shadow")?;
                let shadow_field = join(&shadows_field, &name);
                let text = expect_str(shadow_value, &shadow_field)?;
                let token = ShadowToken::parse(text).map_err(|e| {
                    ConfigError::malformed(&shadow_field, format!("is not a valid box-shadow: {}", e))
                })?;
                extensions.box_shadow.insert(name, token);
            }
        }

        Ok(extensions)
    }
}

fn token_name(key: &Value, parent: &str, what: &str) -> Result<String> {
    match key_name(key) {
        Some(name) => checked_name(name, parent, what),
        None => Err(ConfigError::malformed(
            parent,
            format!("has a {} name that is not text", what),
        )),
    }
}

fn checked_name(name: String, parent: &str, what: &str) -> Result<String> {
    if is_token_name(&name) {
        Ok(name)
    } else {
        Err(ConfigError::malformed(
            join(parent, &name),
            format!("is not a valid {} name (use letters, digits, '-' or '_')", what),
        ))
    }
}
