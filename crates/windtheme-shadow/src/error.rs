//! Error types for shadow parsing.

use cssparser::{BasicParseErrorKind, ParseError, ParseErrorKind};
use thiserror::Error;

/// Error returned when a `box-shadow` value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShadowError {
    /// The value was empty or only whitespace.
    #[error("shadow value is empty")]
    Empty,

    /// A layer did not match the `box-shadow` grammar.
    #[error("invalid shadow layer {layer} at line {line}, column {column}: {message}")]
    Syntax {
        /// One-based index of the comma-separated layer.
        layer: usize,
        /// One-based line of the offending token.
        line: u32,
        /// One-based column of the offending token.
        column: u32,
        /// What was wrong.
        message: String,
    },
}

impl ShadowError {
    pub(crate) fn from_parse(err: ParseError<'_, LayerError>, layer: usize) -> Self {
        let message = match err.kind {
            ParseErrorKind::Custom(LayerError(message)) => message,
            ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
                format!("unexpected token {:?}", token)
            }
            ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
                "unexpected end of input".to_string()
            }
            ParseErrorKind::Basic(other) => format!("{:?}", other),
        };

        ShadowError::Syntax {
            layer,
            line: err.location.line + 1,
            column: err.location.column,
            message,
        }
    }
}

/// Custom error payload raised from inside the cssparser callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LayerError(pub(crate) String);

impl LayerError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        LayerError(message.into())
    }
}
