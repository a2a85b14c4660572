//! The theme configuration record.
//!
//! A [`ThemeConfig`] is the validated form of a document like:
//!
//! ```yaml
//! content:
//!   - ./index.html
//!   - ./src/**/*.{js,ts,jsx,tsx}
//! darkMode: class
//! theme:
//!   extend:
//!     colors:
//!       brand: { 50: "#f0fdf9", ..., 900: "#134e4a" }
//!     boxShadow:
//!       soft: 0 10px 30px rgba(15, 23, 42, 0.08)
//! plugins: []
//! ```
//!
//! The record is immutable once built. Every value it holds has already passed
//! its shape check, so readers never need to re-validate. It serializes back to
//! the same key layout it was read from, and the output reloads to an equal
//! record.

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::content::ContentGlobs;
use crate::dark_mode::DarkModeStrategy;
use crate::error::Result;
use crate::plugin::PluginRef;
use crate::theme::{HexColor, Palette, ShadeKey, ShadowToken, ThemeExtensions};

const BUILTIN_YAML: &str = include_str!("../config/windtheme.yaml");

static BUILTIN: Lazy<Result<ThemeConfig>> = Lazy::new(|| ThemeConfig::from_yaml(BUILTIN_YAML));

/// A validated theme configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    content: ContentGlobs,
    dark_mode: DarkModeStrategy,
    theme: ThemeExtensions,
    plugins: Vec<PluginRef>,
}

impl ThemeConfig {
    /// Assembles a record from already validated parts.
    pub fn new(
        content: ContentGlobs,
        dark_mode: DarkModeStrategy,
        theme: ThemeExtensions,
        plugins: Vec<PluginRef>,
    ) -> Self {
        Self {
            content,
            dark_mode,
            theme,
            plugins,
        }
    }

    /// The record shipped with the crate.
    ///
    /// Parsed on first use and shared afterwards.
    pub fn builtin() -> Result<&'static ThemeConfig> {
        BUILTIN.as_ref().map_err(|e| e.clone())
    }

    /// Source globs the class scanner reads, in declaration order.
    pub fn content_globs(&self) -> &ContentGlobs {
        &self.content
    }

    pub fn dark_mode_strategy(&self) -> DarkModeStrategy {
        self.dark_mode
    }

    /// The `theme.extend` tokens.
    pub fn theme_extensions(&self) -> &ThemeExtensions {
        &self.theme
    }

    /// Plugin references, in declaration order. Often empty.
    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }

    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.theme.palette(name)
    }

    pub fn shadow(&self, name: &str) -> Option<&ShadowToken> {
        self.theme.shadow(name)
    }

    /// Looks up one shade of a named palette: `shade("brand", ShadeKey::S500)`.
    pub fn shade(&self, palette: &str, shade: ShadeKey) -> Option<HexColor> {
        self.palette(palette).map(|p| p.get(shade))
    }

    /// Serializes to YAML using the document's key names.
    pub fn to_yaml(&self) -> serde_yaml::Result<String> {
        serde_yaml::to_string(self)
    }

    /// Serializes to pretty-printed JSON using the document's key names.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    content: &'a ContentGlobs,
    dark_mode: DarkModeStrategy,
    theme: ThemeSection<'a>,
    plugins: &'a [PluginRef],
}

#[derive(Serialize)]
struct ThemeSection<'a> {
    extend: &'a ThemeExtensions,
}

impl Serialize for ThemeConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Document {
            content: &self.content,
            dark_mode: self.dark_mode,
            theme: ThemeSection {
                extend: &self.theme,
            },
            plugins: &self.plugins,
        }
        .serialize(serializer)
    }
}
