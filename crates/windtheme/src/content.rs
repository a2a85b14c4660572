//! Content globs: which source files the class scanner should read.
//!
//! Patterns use the familiar glob dialect of frontend tooling:
//!
//! - `*` matches within one path segment, `**` across segments
//! - `{js,ts}` alternation
//! - `[abc]` character classes
//! - a leading `./` is accepted and means "relative to the project root"
//!
//! Patterns are syntax-checked with `globset` when the config is loaded. The
//! [`ContentMatcher`] compiled from them answers "would the scanner read this
//! path?" without touching the file system.

use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use serde::{Serialize, Serializer};
use serde_yaml::Value;

use crate::error::{ConfigError, Result};
use crate::fields::{expect_sequence, kind};

/// One validated content pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentGlob {
    pattern: String,
    glob: Glob,
}

impl ContentGlob {
    /// Validates a pattern.
    ///
    /// # Errors
    ///
    /// Returns the reason as text when the pattern is blank or not valid glob syntax.
    pub fn new(pattern: impl Into<String>) -> std::result::Result<Self, String> {
        let pattern = pattern.into();
        let stripped = strip_current_dir(&pattern);
        if stripped.trim().is_empty() {
            return Err("must be a non-empty glob pattern".to_string());
        }

        let glob = GlobBuilder::new(stripped)
            .literal_separator(true)
            .build()
            .map_err(|e| format!("is not a valid glob: {}", e.kind()))?;

        Ok(Self { pattern, glob })
    }

    /// The pattern as written in the config.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn glob(&self) -> &Glob {
        &self.glob
    }
}

impl Serialize for ContentGlob {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.pattern)
    }
}

/// The ordered, non-empty `content` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentGlobs(Vec<ContentGlob>);

impl ContentGlobs {
    /// Validates a list of patterns, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for an empty list or any invalid pattern,
    /// naming it as `content.<index>`.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let globs = patterns
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                ContentGlob::new(p)
                    .map_err(|message| ConfigError::malformed(format!("content.{}", i), message))
            })
            .collect::<Result<Vec<_>>>()?;

        if globs.is_empty() {
            return Err(ConfigError::malformed(
                "content",
                "must list at least one glob pattern",
            ));
        }
        Ok(Self(globs))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentGlob> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a list built by [`ContentGlobs::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The patterns as written, in order.
    pub fn patterns(&self) -> Vec<&str> {
        self.0.iter().map(ContentGlob::as_str).collect()
    }

    /// Compiles all patterns into a single matcher.
    ///
    /// # Errors
    ///
    /// Fails only if the combined set exceeds the regex engine's size limits.
    pub fn matcher(&self) -> Result<ContentMatcher> {
        let mut builder = GlobSetBuilder::new();
        for glob in &self.0 {
            builder.add(glob.glob.clone());
        }
        let set = builder
            .build()
            .map_err(|e| ConfigError::malformed("content", format!("cannot be compiled: {}", e)))?;

        Ok(ContentMatcher {
            set,
            patterns: self.0.iter().map(|g| g.pattern.clone()).collect(),
        })
    }

    pub(crate) fn parse(value: &Value, field: &str) -> Result<Self> {
        let items = expect_sequence(value, field)?;

        let mut patterns = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let text = item.as_str().ok_or_else(|| {
                ConfigError::malformed(
                    format!("{}.{}", field, i),
                    format!("must be a glob string, got {}", kind(item)),
                )
            })?;
            patterns.push(text);
        }

        ContentGlobs::new(patterns)
    }
}

impl<'a> IntoIterator for &'a ContentGlobs {
    type Item = &'a ContentGlob;
    type IntoIter = std::slice::Iter<'a, ContentGlob>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compiled form of [`ContentGlobs`].
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    set: GlobSet,
    patterns: Vec<String>,
}

impl ContentMatcher {
    /// Returns true if any content pattern matches `path`.
    ///
    /// Paths are project-relative; a leading `./` is ignored.
    pub fn is_match<P: AsRef<Path>>(&self, path: P) -> bool {
        self.set.is_match(normalize(path.as_ref()))
    }

    /// Returns the patterns matching `path`, in config order.
    pub fn matching_patterns<P: AsRef<Path>>(&self, path: P) -> Vec<&str> {
        self.set
            .matches(normalize(path.as_ref()))
            .into_iter()
            .map(|i| self.patterns[i].as_str())
            .collect()
    }
}

fn strip_current_dir(pattern: &str) -> &str {
    let mut rest = pattern;
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn globs() -> ContentGlobs {
        ContentGlobs::new(["./index.html", "./src/**/*.{js,ts,jsx,tsx}"]).unwrap()
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn test_keeps_order_and_source_text() {
        assert_eq!(
            globs().patterns(),
            vec!["./index.html", "./src/**/*.{js,ts,jsx,tsx}"]
        );
    }

    #[test]
    fn test_rejects_empty_list() {
        let err = ContentGlobs::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.field(), Some("content"));
    }

    #[test]
    fn test_rejects_blank_pattern() {
        let err = ContentGlobs::new(["./index.html", "  "]).unwrap_err();
        assert_eq!(err.field(), Some("content.1"));
    }

    #[test]
    fn test_rejects_bare_current_dir() {
        assert!(ContentGlob::new("./").is_err());
        assert!(ContentGlob::new("././").is_err());
        let err = ContentGlobs::new(["./index.html", "./"]).unwrap_err();
        assert_eq!(err.field(), Some("content.1"));
    }

    #[test]
    fn test_rejects_bad_syntax() {
        assert!(ContentGlob::new("src/**/*.{js,ts").is_err());
        assert!(ContentGlob::new("src/[a-").is_err());
    }

    #[test]
    fn test_parse_rejects_non_strings() {
        let value: Value = serde_yaml::from_str("[\"./index.html\", 42]").unwrap();
        let err = ContentGlobs::parse(&value, "content").unwrap_err();
        assert_eq!(err.field(), Some("content.1"));
    }

    #[test]
    fn test_parse_rejects_scalar() {
        let value: Value = serde_yaml::from_str("\"./src/**/*.ts\"").unwrap();
        let err = ContentGlobs::parse(&value, "content").unwrap_err();
        assert_eq!(err.field(), Some("content"));
    }

    // =========================================================================
    // Matching
    // =========================================================================

    #[test]
    fn test_matcher_matches_sources() {
        let matcher = globs().matcher().unwrap();
        assert!(matcher.is_match("index.html"));
        assert!(matcher.is_match("./index.html"));
        assert!(matcher.is_match("src/App.tsx"));
        assert!(matcher.is_match("src/components/deep/Button.jsx"));
        assert!(matcher.is_match("./src/main.ts"));
    }

    #[test]
    fn test_matcher_rejects_others() {
        let matcher = globs().matcher().unwrap();
        assert!(!matcher.is_match("src/styles.css"));
        assert!(!matcher.is_match("public/index.html"));
        assert!(!matcher.is_match("test/app.ts"));
    }

    #[test]
    fn test_single_star_stays_in_segment() {
        let matcher = ContentGlobs::new(["src/*.ts"]).unwrap().matcher().unwrap();
        assert!(matcher.is_match("src/a.ts"));
        assert!(!matcher.is_match("src/nested/a.ts"));
    }

    #[test]
    fn test_matching_patterns() {
        let matcher = ContentGlobs::new(["src/**/*.ts", "src/app/*"])
            .unwrap()
            .matcher()
            .unwrap();
        assert_eq!(
            matcher.matching_patterns("src/app/main.ts"),
            vec!["src/**/*.ts", "src/app/*"]
        );
        assert!(matcher.matching_patterns("README.md").is_empty());
    }
}
