//! Plugin references.
//!
//! The record only names plugins; loading and running them is the consuming
//! tool's job. Two forms are accepted:
//!
//! ```yaml
//! plugins:
//!   - "@tailwindcss/forms"
//!   - name: "@tailwindcss/typography"
//!     options:
//!       className: prose
//! ```
//!
//! The form a reference was written in is kept, so a record writes back the
//! same shape it was read from.

use serde::Serialize;
use serde_yaml::Value;

use crate::error::{ConfigError, Result};
use crate::fields::{check_keys, expect_sequence, expect_str, join, kind, optional, required};

/// A reference to a generator plugin.
///
/// Built through [`PluginRef::named`] or [`PluginRef::configured`], or read from
/// a config document. The name is always non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PluginRef(Form);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum Form {
    Name(String),
    Configured {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<serde_json::Value>,
    },
}

impl PluginRef {
    /// A plugin referenced by name only, written as a bare string.
    ///
    /// # Errors
    ///
    /// Fails if `name` is blank.
    pub fn named(name: impl Into<String>) -> Result<Self> {
        let name = plugin_name(&name.into(), "plugins")?;
        Ok(PluginRef(Form::Name(name)))
    }

    /// A plugin referenced by name with options, written as a mapping.
    ///
    /// A `null` options value is the same as no options.
    ///
    /// # Errors
    ///
    /// Fails if `name` is blank.
    pub fn configured(name: impl Into<String>, options: serde_json::Value) -> Result<Self> {
        let name = plugin_name(&name.into(), "plugins.name")?;
        let options = Some(options).filter(|v| !v.is_null());
        Ok(PluginRef(Form::Configured { name, options }))
    }

    pub fn name(&self) -> &str {
        match &self.0 {
            Form::Name(name) | Form::Configured { name, .. } => name,
        }
    }

    pub fn options(&self) -> Option<&serde_json::Value> {
        match &self.0 {
            Form::Name(_) => None,
            Form::Configured { options, .. } => options.as_ref(),
        }
    }

    /// Returns true if the reference was written as a mapping.
    pub fn is_configured(&self) -> bool {
        matches!(self.0, Form::Configured { .. })
    }

    fn parse(value: &Value, field: &str) -> Result<Self> {
        match value {
            Value::String(name) => Ok(PluginRef(Form::Name(plugin_name(name, field)?))),
            Value::Mapping(map) => {
                check_keys(map, field, &["name", "options"])?;
                let name_field = join(field, "name");
                let name = expect_str(required(map, field, "name")?, &name_field)?;
                let name = plugin_name(name, &name_field)?;

                let options = optional(map, "options")
                    .map(|v| {
                        serde_json::to_value(v).map_err(|e| {
                            ConfigError::malformed(
                                join(field, "options"),
                                format!("cannot be represented as plain data: {}", e),
                            )
                        })
                    })
                    .transpose()?;

                Ok(PluginRef(Form::Configured { name, options }))
            }
            other => Err(ConfigError::malformed(
                field,
                format!("must be a plugin name or a mapping with 'name', got {}", kind(other)),
            )),
        }
    }

    /// Reads the `plugins` list. Order is preserved.
    pub(crate) fn parse_list(value: &Value, field: &str) -> Result<Vec<Self>> {
        expect_sequence(value, field)?
            .iter()
            .enumerate()
            .map(|(i, item)| PluginRef::parse(item, &format!("{}.{}", field, i)))
            .collect()
    }
}

fn plugin_name(name: &str, field: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::malformed(field, "must be a non-empty plugin name"));
    }
    Ok(name.to_string())
}
