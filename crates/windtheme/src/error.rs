//! Error types for configuration loading.
//!
//! Every shape problem is reported as [`ConfigError::Malformed`], naming the
//! offending field by its dotted path (`theme.extend.colors.brand.450`). Loading is
//! all-or-nothing: no partially built record is ever returned.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error returned when a configuration cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required field is missing or a value violates its declared shape.
    #[error("malformed config{}: field '{field}' {message}", Location(path.as_deref()))]
    Malformed {
        /// Dotted path of the offending field.
        field: String,
        /// What was wrong with it.
        message: String,
        /// Source file, when the config was read from disk.
        path: Option<PathBuf>,
    },

    /// The config file could not be read.
    #[error("failed to load config {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    /// No config file was found in the searched directory.
    #[error("no config file found in {}", dir.display())]
    NotFound { dir: PathBuf },
}

impl ConfigError {
    pub(crate) fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Malformed {
            field: field.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Attaches the source file to a [`Malformed`](ConfigError::Malformed) error.
    pub(crate) fn in_file(self, file: &Path) -> Self {
        match self {
            ConfigError::Malformed {
                field,
                message,
                path: None,
            } => ConfigError::Malformed {
                field,
                message,
                path: Some(file.to_path_buf()),
            },
            other => other,
        }
    }

    /// Returns true for the shape-violation kind.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ConfigError::Malformed { .. })
    }

    /// Returns the offending field for shape violations.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Malformed { field, .. } => Some(field),
            _ => None,
        }
    }
}

struct Location<'a>(Option<&'a Path>);

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, " in {}", p.display()),
            None => Ok(()),
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
