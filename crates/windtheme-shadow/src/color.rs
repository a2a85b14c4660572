//! Color component of a shadow layer.
//!
//! Supports the color syntaxes that show up in design-token shadows:
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - Functions: `rgb()`, `rgba()`, `hsl()`, `hsla()`, with either legacy comma
//!   separators or the space-separated form with `/ alpha`
//! - Keywords: `transparent`, `currentcolor` and the CSS named colors
//!
//! Functional and hex colors are resolved to [`ShadowColor::Rgba`]. Out-of-range
//! channels are clamped, as browsers do.

use std::fmt;

use cssparser::{ParseError, Parser, Token};

use crate::error::LayerError;

/// CSS named colors plus the two special keywords.
const COLOR_KEYWORDS: &[&str] = &[
    "transparent", "currentcolor",
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];

/// Parsed shadow color.
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowColor {
    /// Resolved RGB channels with an alpha in `0.0..=1.0`.
    Rgba { r: u8, g: u8, b: u8, alpha: f32 },
    /// A named color or special keyword, stored lowercase.
    Keyword(String),
}

impl ShadowColor {
    /// Returns the alpha channel. Keywords other than `transparent` are opaque.
    pub fn alpha(&self) -> f32 {
        match self {
            ShadowColor::Rgba { alpha, .. } => *alpha,
            ShadowColor::Keyword(name) if name == "transparent" => 0.0,
            ShadowColor::Keyword(_) => 1.0,
        }
    }

    /// Returns true if `name` is a recognized color keyword.
    pub fn is_keyword(name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        COLOR_KEYWORDS.contains(&name.as_str())
    }

    /// Parses hex digits (without the `#`).
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color: #{}", hex));
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|d| d * 17);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let invalid = |_| format!("invalid hex color: #{}", hex);

        let (r, g, b, a) = match hex.len() {
            3 => (digit(0), digit(1), digit(2), Ok(255)),
            4 => (digit(0), digit(1), digit(2), digit(3)),
            6 => (pair(0), pair(2), pair(4), Ok(255)),
            8 => (pair(0), pair(2), pair(4), pair(6)),
            _ => {
                return Err(format!(
                    "invalid hex color: #{} (must be 3, 4, 6 or 8 digits)",
                    hex
                ))
            }
        };

        Ok(ShadowColor::Rgba {
            r: r.map_err(invalid)?,
            g: g.map_err(invalid)?,
            b: b.map_err(invalid)?,
            alpha: f32::from(a.map_err(invalid)?) / 255.0,
        })
    }

    /// Converts a token into a color, or returns `None` if the token cannot start one.
    ///
    /// For function tokens the arguments are consumed from `input`.
    pub(crate) fn from_token<'i>(
        token: &Token<'i>,
        input: &mut Parser<'i, '_>,
    ) -> Result<Option<Self>, ParseError<'i, LayerError>> {
        match token {
            Token::Hash(hex) | Token::IDHash(hex) => ShadowColor::from_hex(hex)
                .map(Some)
                .map_err(|message| input.new_custom_error(LayerError::new(message))),
            Token::Ident(name) if ShadowColor::is_keyword(name) => {
                Ok(Some(ShadowColor::Keyword(name.to_ascii_lowercase())))
            }
            Token::Function(name) => {
                let name = name.to_ascii_lowercase();
                input
                    .parse_nested_block(|args| parse_function(&name, args))
                    .map(Some)
            }
            _ => Ok(None),
        }
    }
}

impl fmt::Display for ShadowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadowColor::Rgba { r, g, b, alpha } if *alpha >= 1.0 => {
                write!(f, "rgb({}, {}, {})", r, g, b)
            }
            ShadowColor::Rgba { r, g, b, alpha } => {
                write!(f, "rgba({}, {}, {}, {})", r, g, b, alpha)
            }
            ShadowColor::Keyword(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Component {
    Number(f32),
    /// Percentage as a unit value (`50%` is `0.5`).
    Percentage(f32),
    /// Angle in degrees.
    Angle(f32),
}

fn parse_function<'i>(
    name: &str,
    input: &mut Parser<'i, '_>,
) -> Result<ShadowColor, ParseError<'i, LayerError>> {
    let mut components = Vec::with_capacity(4);
    let mut slash_at = None;

    while !input.is_exhausted() {
        let token = input.next()?.clone();
        match token {
            Token::Number { value, .. } => components.push(Component::Number(value)),
            Token::Percentage { unit_value, .. } => {
                components.push(Component::Percentage(unit_value))
            }
            Token::Dimension { value, ref unit, .. } => match angle_to_degrees(value, unit) {
                Some(deg) => components.push(Component::Angle(deg)),
                None => {
                    return Err(input.new_custom_error(LayerError::new(format!(
                        "unexpected unit '{}' in {}()",
                        unit,
                        name
                    ))))
                }
            },
            Token::Comma => {}
            Token::Delim('/') if slash_at.is_none() => slash_at = Some(components.len()),
            other => {
                return Err(input.new_custom_error(LayerError::new(format!(
                    "unexpected {:?} in {}()",
                    other, name
                ))))
            }
        }
    }

    if components.iter().any(|c| !c.is_finite()) {
        return Err(input.new_custom_error(LayerError::new(format!(
            "number out of range in {}()",
            name
        ))));
    }
    if components.len() != 3 && components.len() != 4 {
        return Err(input.new_custom_error(LayerError::new(format!(
            "{}() takes 3 or 4 components, got {}",
            name,
            components.len()
        ))));
    }
    if matches!(slash_at, Some(at) if at != 3) {
        return Err(input.new_custom_error(LayerError::new(format!(
            "'/' in {}() must precede the alpha component",
            name
        ))));
    }

    let alpha = match components.get(3) {
        Some(c) => alpha_value(*c).ok_or_else(|| {
            input.new_custom_error(LayerError::new(format!("invalid alpha in {}()", name)))
        })?,
        None => 1.0,
    };

    match name {
        "rgb" | "rgba" => {
            let mut channels = [0u8; 3];
            for (i, c) in components.iter().take(3).enumerate() {
                channels[i] = rgb_channel(*c).ok_or_else(|| {
                    input.new_custom_error(LayerError::new(format!(
                        "invalid channel {} in {}()",
                        i + 1,
                        name
                    )))
                })?;
            }
            Ok(ShadowColor::Rgba {
                r: channels[0],
                g: channels[1],
                b: channels[2],
                alpha,
            })
        }
        "hsl" | "hsla" => {
            let hue = match components[0] {
                Component::Number(deg) | Component::Angle(deg) => deg,
                Component::Percentage(_) => {
                    return Err(input.new_custom_error(LayerError::new(format!(
                        "hue in {}() cannot be a percentage",
                        name
                    ))))
                }
            };
            let (saturation, lightness) =
                match (unit_fraction(components[1]), unit_fraction(components[2])) {
                    (Some(s), Some(l)) => (s, l),
                    _ => {
                        return Err(input.new_custom_error(LayerError::new(format!(
                            "saturation and lightness in {}() cannot be angles",
                            name
                        ))))
                    }
                };
            let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
            Ok(ShadowColor::Rgba { r, g, b, alpha })
        }
        _ => Err(input.new_custom_error(LayerError::new(format!(
            "unknown color function {}()",
            name
        )))),
    }
}

impl Component {
    fn is_finite(self) -> bool {
        match self {
            Component::Number(v) | Component::Percentage(v) | Component::Angle(v) => v.is_finite(),
        }
    }
}

fn angle_to_degrees(value: f32, unit: &str) -> Option<f32> {
    match unit.to_ascii_lowercase().as_str() {
        "deg" => Some(value),
        "grad" => Some(value * 0.9),
        "rad" => Some(value.to_degrees()),
        "turn" => Some(value * 360.0),
        _ => None,
    }
}

fn rgb_channel(c: Component) -> Option<u8> {
    let value = match c {
        Component::Number(n) => n,
        Component::Percentage(p) => p * 255.0,
        Component::Angle(_) => return None,
    };
    Some(value.round().clamp(0.0, 255.0) as u8)
}

fn alpha_value(c: Component) -> Option<f32> {
    match c {
        Component::Number(n) | Component::Percentage(n) => Some(n.clamp(0.0, 1.0)),
        Component::Angle(_) => None,
    }
}

/// Saturation and lightness accept `50%` or the bare number `50`.
fn unit_fraction(c: Component) -> Option<f32> {
    let value = match c {
        Component::Percentage(p) => p,
        Component::Number(n) => n / 100.0,
        Component::Angle(_) => return None,
    };
    Some(value.clamp(0.0, 1.0))
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) / 360.0;

    if saturation == 0.0 {
        let v = (lightness * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };

    (channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoxShadow;

    // =========================================================================
    // Hex tests
    // =========================================================================

    #[test]
    fn test_hex_six_digits() {
        assert_eq!(
            ShadowColor::from_hex("0f172a").unwrap(),
            ShadowColor::Rgba {
                r: 15,
                g: 23,
                b: 42,
                alpha: 1.0
            }
        );
    }

    #[test]
    fn test_hex_short_forms() {
        assert_eq!(
            ShadowColor::from_hex("f80").unwrap(),
            ShadowColor::Rgba {
                r: 255,
                g: 136,
                b: 0,
                alpha: 1.0
            }
        );
        match ShadowColor::from_hex("0000").unwrap() {
            ShadowColor::Rgba { alpha, .. } => assert_eq!(alpha, 0.0),
            other => panic!("Expected Rgba, got {:?}", other),
        }
    }

    #[test]
    fn test_hex_eight_digits_has_alpha() {
        match ShadowColor::from_hex("00000080").unwrap() {
            ShadowColor::Rgba { alpha, .. } => assert!((alpha - 128.0 / 255.0).abs() < 1e-6),
            other => panic!("Expected Rgba, got {:?}", other),
        }
    }

    #[test]
    fn test_hex_invalid() {
        assert!(ShadowColor::from_hex("ff").is_err());
        assert!(ShadowColor::from_hex("fffff").is_err());
        assert!(ShadowColor::from_hex("gggggg").is_err());
    }

    // =========================================================================
    // Keyword tests
    // =========================================================================

    #[test]
    fn test_keywords() {
        assert!(ShadowColor::is_keyword("transparent"));
        assert!(ShadowColor::is_keyword("RebeccaPurple"));
        assert!(!ShadowColor::is_keyword("inset"));
        assert!(!ShadowColor::is_keyword("none"));
    }

    #[test]
    fn test_keyword_alpha() {
        assert_eq!(ShadowColor::Keyword("transparent".into()).alpha(), 0.0);
        assert_eq!(ShadowColor::Keyword("black".into()).alpha(), 1.0);
    }

    // =========================================================================
    // Conversion tests
    // =========================================================================

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
        assert_eq!(hsl_to_rgb(42.0, 0.0, 1.0), (255, 255, 255));
    }

    #[test]
    fn test_hsl_rejects_angles_outside_hue() {
        for css in ["0 1px hsl(0, 50deg, 50%)", "0 1px hsl(0 50% 1turn)"] {
            assert!(BoxShadow::parse(css).is_err(), "{}", css);
        }
        assert!(BoxShadow::parse("0 1px hsl(90deg, 50%, 50%)").is_ok());
    }

    #[test]
    fn test_function_rejects_overflow() {
        assert!(BoxShadow::parse("0 1px hsl(1e39, 50%, 50%)").is_err());
        assert!(BoxShadow::parse("0 1px rgb(1e39, 0, 0)").is_err());
    }

    #[test]
    fn test_display() {
        let opaque = ShadowColor::Rgba {
            r: 1,
            g: 2,
            b: 3,
            alpha: 1.0,
        };
        assert_eq!(opaque.to_string(), "rgb(1, 2, 3)");

        let translucent = ShadowColor::Rgba {
            r: 15,
            g: 23,
            b: 42,
            alpha: 0.08,
        };
        assert_eq!(translucent.to_string(), "rgba(15, 23, 42, 0.08)");
    }
}
