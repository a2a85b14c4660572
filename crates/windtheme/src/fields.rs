//! Helpers for walking a decoded document while tracking field paths.
//!
//! YAML and JSON sources are both decoded into a [`serde_yaml::Value`] tree. Each
//! record type then pulls its fields out of that tree with these helpers, so that
//! any failure can name the dotted path of the field it happened in.

use serde_yaml::{Mapping, Value};

use crate::error::{ConfigError, Result};

/// Field name used for errors about the document as a whole.
pub(crate) const ROOT: &str = "<document>";

/// Joins a parent path and a key: `join("theme", "extend")` is `theme.extend`.
pub(crate) fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() || parent == ROOT {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Renders a mapping key as text. Numbers and booleans are accepted because YAML
/// reads unquoted `50:` as an integer key.
pub(crate) fn key_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Short description of a value's kind, for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

pub(crate) fn expect_mapping<'a>(value: &'a Value, field: &str) -> Result<&'a Mapping> {
    value.as_mapping().ok_or_else(|| {
        ConfigError::malformed(field, format!("must be a mapping, got {}", kind(value)))
    })
}

pub(crate) fn expect_sequence<'a>(value: &'a Value, field: &str) -> Result<&'a [Value]> {
    value.as_sequence().map(Vec::as_slice).ok_or_else(|| {
        ConfigError::malformed(field, format!("must be a list, got {}", kind(value)))
    })
}

pub(crate) fn expect_str<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| {
        ConfigError::malformed(field, format!("must be a string, got {}", kind(value)))
    })
}

/// Looks up an optional key. A null value counts as absent.
pub(crate) fn optional<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

/// Looks up a required key, failing with the joined field path when it is absent.
pub(crate) fn required<'a>(map: &'a Mapping, parent: &str, key: &str) -> Result<&'a Value> {
    optional(map, key).ok_or_else(|| ConfigError::malformed(join(parent, key), "is required"))
}

/// Rejects any key not listed in `allowed`.
pub(crate) fn check_keys(map: &Mapping, parent: &str, allowed: &[&str]) -> Result<()> {
    for key in map.keys() {
        let name = key_name(key).ok_or_else(|| {
            ConfigError::malformed(parent, format!("has a non-text key ({})", kind(key)))
        })?;
        if !allowed.contains(&name.as_str()) {
            return Err(ConfigError::malformed(
                join(parent, &name),
                format!("is not a recognized field (expected one of: {})", allowed.join(", ")),
            ));
        }
    }
    Ok(())
}

/// Token names become part of generated class names (`shadow-soft`, `bg-brand-500`),
/// so they are limited to ASCII letters, digits, `-` and `_`.
pub(crate) fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
