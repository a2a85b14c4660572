//! Windtheme - typed theme configuration for utility-class CSS generators.
//!
//! A utility-class generator scans source files for class names like
//! `bg-brand-500` or `shadow-card` and emits the matching CSS. What it scans and
//! which design tokens it knows about come from a small declarative record:
//!
//! - **content globs**: which source files to scan
//! - **dark mode strategy**: `media` (follow the OS) or `class` (explicit marker)
//! - **theme extensions**: extra color palettes and box-shadow presets
//! - **plugins**: generator plugins to enable, usually none
//!
//! This crate loads that record from YAML or JSON, validates every value, and
//! hands back an immutable [`ThemeConfig`]. Any problem is reported as
//! [`ConfigError::Malformed`] naming the offending field; no partial record is
//! ever returned.
//!
//! # Quick Start
//!
//! ```rust
//! use windtheme::{DarkModeStrategy, ShadeKey, ThemeConfig};
//!
//! let config = ThemeConfig::from_yaml(r##"
//! content:
//!   - ./index.html
//!   - ./src/**/*.{js,ts,jsx,tsx}
//! darkMode: class
//! theme:
//!   extend:
//!     colors:
//!       brand:
//!         50: "#f0fdf9"
//!         100: "#ccfbef"
//!         200: "#99f6e0"
//!         300: "#5eead4"
//!         400: "#2dd4bf"
//!         500: "#14b8a6"
//!         600: "#0d9488"
//!         700: "#0f766e"
//!         800: "#115e59"
//!         900: "#134e4a"
//!     boxShadow:
//!       soft: 0 10px 30px rgba(15, 23, 42, 0.08)
//! plugins: []
//! "##).unwrap();
//!
//! assert_eq!(config.dark_mode_strategy(), DarkModeStrategy::Class);
//! assert_eq!(config.shade("brand", ShadeKey::S500).unwrap().to_string(), "#14b8a6");
//!
//! let matcher = config.content_globs().matcher().unwrap();
//! assert!(matcher.is_match("src/components/Button.tsx"));
//! ```
//!
//! # Loading
//!
//! | Source | Call |
//! |--------|------|
//! | YAML text | [`ThemeConfig::from_yaml`] |
//! | JSON text | [`ThemeConfig::from_json`] |
//! | A file (format by extension) | [`ThemeConfig::from_file`] |
//! | `windtheme.{yaml,yml,json}` in a directory | [`ThemeConfig::from_dir`] |
//! | The record shipped with the crate | [`ThemeConfig::builtin`] |
//!
//! # Validation Rules
//!
//! - `content`, `darkMode` and `theme.extend` are required; `plugins` defaults to empty
//! - unknown keys are rejected at every level
//! - a palette defines exactly the ten shades 50, 100, 200, ..., 900
//! - colors are `#RRGGBB`
//! - shadows are CSS `box-shadow` values with offsets and a color, parsed by
//!   [`windtheme_shadow`]
//!
//! Serializing a record with [`ThemeConfig::to_yaml`] or [`ThemeConfig::to_json`]
//! produces a document that reloads to an equal record.
//!
//! # Logging
//!
//! Load paths emit `tracing` events at `debug` and `trace` level. The crate never
//! installs a subscriber.

mod config;
mod content;
mod dark_mode;
mod error;
mod fields;
mod loader;
mod plugin;
mod theme;

pub use config::ThemeConfig;
pub use content::{ContentGlob, ContentGlobs, ContentMatcher};
pub use dark_mode::DarkModeStrategy;
pub use error::{ConfigError, Result};
pub use loader::{locate_config, ConfigFormat, CONFIG_EXTENSIONS, CONFIG_FILE_STEM};
pub use plugin::PluginRef;
pub use theme::{HexColor, Palette, ShadeKey, ShadowToken, ThemeExtensions};

pub use windtheme_shadow::{BoxShadow, ShadowError};
