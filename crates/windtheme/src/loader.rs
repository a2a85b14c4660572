//! Loading theme configs from text, files and directories.
//!
//! YAML is the primary format; JSON is accepted as well. Both are decoded into a
//! single [`serde_yaml::Value`] tree first and then walked field by field, so an
//! error always names the dotted path of the field at fault.
//!
//! # Discovery
//!
//! [`locate_config`] looks for a file named [`CONFIG_FILE_STEM`] with one of the
//! [`CONFIG_EXTENSIONS`]. When several exist, the extension listed first wins:
//!
//! ```text
//! project/
//!   windtheme.yaml   <- used
//!   windtheme.json   <- ignored
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, trace};

use crate::config::ThemeConfig;
use crate::content::ContentGlobs;
use crate::dark_mode::DarkModeStrategy;
use crate::error::{ConfigError, Result};
use crate::fields::{check_keys, expect_mapping, optional, required, ROOT};
use crate::plugin::PluginRef;
use crate::theme::ThemeExtensions;

/// File name, without extension, that [`locate_config`] searches for.
pub const CONFIG_FILE_STEM: &str = "windtheme";

/// Recognized config extensions, in priority order.
pub const CONFIG_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Field name used when the file itself, rather than its content, is at fault.
const FILE_FIELD: &str = "<file>";

const TOP_LEVEL_KEYS: &[&str] = &["content", "darkMode", "theme", "plugins"];

/// Text encoding of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension. Matching ignores ASCII case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(ConfigFormat::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(ConfigFormat::Json)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Json => "JSON",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finds the config file in `dir`, honoring [`CONFIG_EXTENSIONS`] priority.
pub fn locate_config<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    let dir = dir.as_ref();
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}{}", CONFIG_FILE_STEM, ext)))
        .find(|candidate| candidate.is_file())
}

impl ThemeConfig {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] naming the first field that is missing
    /// or has the wrong shape.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Self::from_str_with_format(text, ConfigFormat::Yaml)
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Same as [`ThemeConfig::from_yaml`].
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_str_with_format(text, ConfigFormat::Json)
    }

    pub fn from_str_with_format(text: &str, format: ConfigFormat) -> Result<Self> {
        trace!(format = %format, bytes = text.len(), "parsing theme config");

        let root = decode(text, format)?;
        let config = parse_document(&root)?;

        debug!(
            format = %format,
            globs = config.content_globs().len(),
            dark_mode = %config.dark_mode_strategy(),
            palettes = config.theme_extensions().colors().len(),
            shadows = config.theme_extensions().box_shadow().len(),
            plugins = config.plugins().len(),
            "loaded theme config"
        );
        Ok(config)
    }

    /// Reads a config file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Malformed`] on field `<file>` for an unrecognized extension
    /// - [`ConfigError::Load`] if the file cannot be read
    /// - [`ConfigError::Malformed`] with the file attached for content problems
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            ConfigError::malformed(
                FILE_FIELD,
                format!(
                    "has an unrecognized extension (expected one of: {})",
                    CONFIG_EXTENSIONS.join(", ")
                ),
            )
            .in_file(path)
        })?;

        debug!(path = %path.display(), format = %format, "reading theme config");

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_str_with_format(&text, format).map_err(|e| e.in_file(path))
    }

    /// Locates and reads the config file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when no candidate exists, otherwise the
    /// errors of [`ThemeConfig::from_file`].
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let path = locate_config(dir).ok_or_else(|| ConfigError::NotFound {
            dir: dir.to_path_buf(),
        })?;
        Self::from_file(path)
    }
}

fn decode(text: &str, format: ConfigFormat) -> Result<Value> {
    let decoded = match format {
        ConfigFormat::Yaml => serde_yaml::from_str::<Value>(text).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str::<Value>(text).map_err(|e| e.to_string()),
    };
    decoded.map_err(|e| ConfigError::malformed(ROOT, format!("is not valid {}: {}", format, e)))
}

fn parse_document(root: &Value) -> Result<ThemeConfig> {
    let map = expect_mapping(root, ROOT)?;
    check_keys(map, ROOT, TOP_LEVEL_KEYS)?;

    let content = ContentGlobs::parse(required(map, ROOT, "content")?, "content")?;
    let dark_mode = DarkModeStrategy::parse(required(map, ROOT, "darkMode")?, "darkMode")?;

    let theme = expect_mapping(required(map, ROOT, "theme")?, "theme")?;
    check_keys(theme, "theme", &["extend"])?;
    let extensions = ThemeExtensions::parse(required(theme, "theme", "extend")?, "theme.extend")?;

    let plugins = match optional(map, "plugins") {
        Some(value) => PluginRef::parse_list(value, "plugins")?,
        None => Vec::new(),
    };

    Ok(ThemeConfig::new(content, dark_mode, extensions, plugins))
}
