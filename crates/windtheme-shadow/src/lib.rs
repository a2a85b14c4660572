//! CSS `box-shadow` value parser for theme shadow tokens.
//!
//! Theme configurations declare shadow presets as raw CSS strings:
//!
//! ```yaml
//! boxShadow:
//!   soft: 0 10px 30px rgba(15, 23, 42, 0.08)
//!   card: 0 8px 22px rgba(15, 23, 42, 0.08)
//! ```
//!
//! This crate checks that such a string is a well-formed `box-shadow` value and
//! exposes its structure. Tokenizing is done by `cssparser`, the tokenizer used by
//! Firefox, so comments, escapes and whitespace behave exactly as in a stylesheet.
//!
//! # Grammar
//!
//! A value is one or more comma-separated layers. Each layer holds, in any order:
//!
//! - the `inset` keyword, at most once
//! - two to four contiguous lengths: offset-x, offset-y, blur, spread
//! - exactly one color (see [`ShadowColor`])
//!
//! Blur may not be negative. Unitless lengths are only allowed for zero. The `none`
//! keyword is not accepted: a shadow token always describes a visible shadow.
//!
//! # Example
//!
//! ```rust
//! use windtheme_shadow::{BoxShadow, ShadowColor};
//!
//! let shadow = BoxShadow::parse("0 10px 30px rgba(15, 23, 42, 0.08)").unwrap();
//! let layer = &shadow.layers()[0];
//!
//! assert!(!layer.inset);
//! assert_eq!(layer.offset_y.value, 10.0);
//! assert_eq!(layer.blur.map(|b| b.value), Some(30.0));
//! assert!(matches!(layer.color, ShadowColor::Rgba { r: 15, g: 23, b: 42, .. }));
//!
//! assert!(BoxShadow::parse("10px rgba(0, 0, 0, 0.1)").is_err());
//! ```

mod color;
mod error;
mod length;

use std::fmt;
use std::str::FromStr;

use cssparser::{ParseError, Parser, ParserInput, Token};

pub use color::ShadowColor;
pub use error::ShadowError;
pub use length::{Length, LengthUnit};

use error::LayerError;

/// One comma-separated layer of a `box-shadow` value.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowLayer {
    pub inset: bool,
    pub offset_x: Length,
    pub offset_y: Length,
    pub blur: Option<Length>,
    pub spread: Option<Length>,
    pub color: ShadowColor,
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            write!(f, "inset ")?;
        }
        write!(f, "{} {}", self.offset_x, self.offset_y)?;
        if let Some(blur) = self.blur {
            write!(f, " {}", blur)?;
        }
        if let Some(spread) = self.spread {
            write!(f, " {}", spread)?;
        }
        write!(f, " {}", self.color)
    }
}

/// A parsed `box-shadow` value.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShadow {
    layers: Vec<ShadowLayer>,
}

impl BoxShadow {
    /// Parses a `box-shadow` value.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::Empty`] for a blank value and [`ShadowError::Syntax`]
    /// naming the failing layer for anything that does not match the grammar.
    pub fn parse(value: &str) -> Result<Self, ShadowError> {
        if value.trim().is_empty() {
            return Err(ShadowError::Empty);
        }

        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);

        let mut layer = 0usize;
        let layers = parser
            .parse_comma_separated(|input| {
                layer += 1;
                parse_layer(input)
            })
            .map_err(|err| ShadowError::from_parse(err, layer))?;

        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[ShadowLayer] {
        &self.layers
    }

    /// Returns true if any layer is drawn inside the box.
    pub fn has_inset(&self) -> bool {
        self.layers.iter().any(|l| l.inset)
    }
}

impl FromStr for BoxShadow {
    type Err = ShadowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoxShadow::parse(s)
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        Ok(())
    }
}

fn parse_layer<'i>(input: &mut Parser<'i, '_>) -> Result<ShadowLayer, ParseError<'i, LayerError>> {
    let mut inset = false;
    let mut lengths: Vec<Length> = Vec::with_capacity(4);
    let mut color: Option<ShadowColor> = None;
    let mut lengths_closed = false;

    while !input.is_exhausted() {
        let location = input.current_source_location();
        let token = input.next()?.clone();

        if let Some(length) = Length::from_token(&token, input)? {
            if lengths_closed {
                return Err(location.new_custom_error(LayerError::new(
                    "shadow lengths must be contiguous",
                )));
            }
            if lengths.len() == 4 {
                return Err(location.new_custom_error(LayerError::new(
                    "a shadow takes at most four lengths",
                )));
            }
            lengths.push(length);
            continue;
        }

        if !lengths.is_empty() {
            lengths_closed = true;
        }

        match token {
            Token::Ident(ref ident) if ident.eq_ignore_ascii_case("inset") => {
                if inset {
                    return Err(location
                        .new_custom_error(LayerError::new("'inset' may only appear once")));
                }
                inset = true;
            }
            Token::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => {
                return Err(location.new_custom_error(LayerError::new(
                    "'none' is not a shadow token value",
                )));
            }
            _ => match ShadowColor::from_token(&token, input)? {
                Some(parsed) => {
                    if color.is_some() {
                        return Err(location.new_custom_error(LayerError::new(
                            "a shadow layer takes a single color",
                        )));
                    }
                    color = Some(parsed);
                }
                None => {
                    return Err(location.new_custom_error(LayerError::new(format!(
                        "unexpected {:?}",
                        token
                    ))))
                }
            },
        }
    }

    if lengths.len() < 2 {
        return Err(input.new_custom_error(LayerError::new(
            "a shadow needs horizontal and vertical offsets",
        )));
    }
    let color = color.ok_or_else(|| input.new_custom_error(LayerError::new("missing color")))?;

    let blur = lengths.get(2).copied();
    if matches!(blur, Some(b) if b.value < 0.0) {
        return Err(input.new_custom_error(LayerError::new("blur radius cannot be negative")));
    }

    Ok(ShadowLayer {
        inset,
        offset_x: lengths[0],
        offset_y: lengths[1],
        blur,
        spread: lengths.get(3).copied(),
        color,
    })
}
