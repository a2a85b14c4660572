//! Lengths used for shadow offsets, blur and spread.

use std::fmt;

use cssparser::{ParseError, Parser, Token};

use crate::error::LayerError;

/// CSS length unit accepted in a shadow value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Ex,
    Ch,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Cm,
    Mm,
    Q,
    In,
    Pt,
    Pc,
}

impl LengthUnit {
    /// Looks up a unit by its CSS spelling, ignoring ASCII case.
    pub fn from_css(unit: &str) -> Option<Self> {
        let unit = match unit.to_ascii_lowercase().as_str() {
            "px" => LengthUnit::Px,
            "em" => LengthUnit::Em,
            "rem" => LengthUnit::Rem,
            "ex" => LengthUnit::Ex,
            "ch" => LengthUnit::Ch,
            "vw" => LengthUnit::Vw,
            "vh" => LengthUnit::Vh,
            "vmin" => LengthUnit::Vmin,
            "vmax" => LengthUnit::Vmax,
            "cm" => LengthUnit::Cm,
            "mm" => LengthUnit::Mm,
            "q" => LengthUnit::Q,
            "in" => LengthUnit::In,
            "pt" => LengthUnit::Pt,
            "pc" => LengthUnit::Pc,
            _ => return None,
        };
        Some(unit)
    }

    /// Returns the canonical CSS spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Ex => "ex",
            LengthUnit::Ch => "ch",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Q => "Q",
            LengthUnit::In => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
        }
    }
}

/// A CSS length. Unitless zero is stored as `0px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Converts a token into a length, or returns `None` if the token is not one.
    ///
    /// Dimension tokens with a non-length unit are an error rather than `None`,
    /// since nothing else in a shadow value can carry a unit.
    pub(crate) fn from_token<'i>(
        token: &Token<'i>,
        input: &Parser<'i, '_>,
    ) -> Result<Option<Self>, ParseError<'i, LayerError>> {
        match token {
            Token::Dimension { value, .. } if !value.is_finite() => Err(input.new_custom_error(
                LayerError::new("length is out of range"),
            )),
            Token::Dimension { value, unit, .. } => match LengthUnit::from_css(unit) {
                Some(unit) => Ok(Some(Length::new(*value, unit))),
                None => Err(input.new_custom_error(LayerError::new(format!(
                    "'{}' is not a length unit",
                    unit
                )))),
            },
            Token::Number { value, .. } if *value == 0.0 => Ok(Some(Length::px(0.0))),
            Token::Number { value, .. } => Err(input.new_custom_error(LayerError::new(format!(
                "length {} is missing a unit",
                value
            )))),
            _ => Ok(None),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            write!(f, "0")
        } else {
            write!(f, "{}{}", self.value, self.unit.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_lookup_ignores_case() {
        assert_eq!(LengthUnit::from_css("PX"), Some(LengthUnit::Px));
        assert_eq!(LengthUnit::from_css("rem"), Some(LengthUnit::Rem));
        assert_eq!(LengthUnit::from_css("deg"), None);
    }

    fn parse_one(css: &str) -> Result<Option<Length>, String> {
        let mut input = cssparser::ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let token = parser.next().unwrap().clone();
        Length::from_token(&token, &parser).map_err(|e| format!("{:?}", e.kind))
    }

    #[test]
    fn test_from_token() {
        assert_eq!(parse_one("8px"), Ok(Some(Length::px(8.0))));
        assert_eq!(parse_one("0"), Ok(Some(Length::px(0.0))));
        assert_eq!(parse_one("black"), Ok(None));
        assert!(parse_one("4").is_err());
        assert!(parse_one("4deg").is_err());
    }

    #[test]
    fn test_from_token_rejects_overflow() {
        let err = parse_one("1e39px").unwrap_err();
        assert!(err.contains("out of range"));
        assert!(parse_one("-1e39px").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::px(10.0).to_string(), "10px");
        assert_eq!(Length::new(0.5, LengthUnit::Rem).to_string(), "0.5rem");
        assert_eq!(Length::px(-3.0).to_string(), "-3px");
        assert_eq!(Length::new(0.0, LengthUnit::Em).to_string(), "0");
    }
}
