//! Color palettes keyed by the ten fixed shade steps.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_yaml::Value;

use crate::error::{ConfigError, Result};
use crate::fields::{expect_mapping, key_name, kind};

/// One of the ten fixed palette steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeKey {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl ShadeKey {
    /// All shade steps, lightest first.
    pub const ALL: [ShadeKey; 10] = [
        ShadeKey::S50,
        ShadeKey::S100,
        ShadeKey::S200,
        ShadeKey::S300,
        ShadeKey::S400,
        ShadeKey::S500,
        ShadeKey::S600,
        ShadeKey::S700,
        ShadeKey::S800,
        ShadeKey::S900,
    ];

    /// The numeric step as written in a config (`50`, `100`, ... `900`).
    pub fn value(self) -> u16 {
        match self {
            ShadeKey::S50 => 50,
            other => 100 * other.index() as u16,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        ShadeKey::ALL.into_iter().find(|k| k.value() == value)
    }

    /// Looks up a shade by its key text. Only the canonical spelling matches:
    /// `"50"` is a shade key, `"050"` and `"+50"` are not.
    pub fn from_key(key: &str) -> Option<Self> {
        ShadeKey::ALL.into_iter().find(|k| k.value().to_string() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u16> for ShadeKey {
    type Error = u16;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        ShadeKey::from_value(value).ok_or(value)
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for ShadeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.value())
    }
}

/// A `#RRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#` followed by exactly six hex digits, in either case.
    ///
    /// Shorthand (`#fff`) and alpha (`#ffffff80`) forms are rejected: palette
    /// entries are full opaque colors.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("'{}' must start with '#'", s))?;

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("'{}' is not a #RRGGBB hex color", s));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| format!("'{}' is not a #RRGGBB hex color", s))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A complete palette: one color for every [`ShadeKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    shades: [HexColor; 10],
}

impl Palette {
    /// Builds a palette from colors listed lightest first.
    pub fn new(shades: [HexColor; 10]) -> Self {
        Self { shades }
    }

    pub fn get(&self, shade: ShadeKey) -> HexColor {
        self.shades[shade.index()]
    }

    /// Iterates shades lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, HexColor)> + '_ {
        ShadeKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Reads a palette mapping. Every shade must be present exactly once.
    pub(crate) fn parse(value: &Value, field: &str) -> Result<Self> {
        let map = expect_mapping(value, field)?;
        let mut shades: [Option<HexColor>; 10] = [None; 10];

        for (key, color) in map {
            let name = key_name(key).ok_or_else(|| {
                ConfigError::malformed(field, format!("has a non-numeric shade key ({})", kind(key)))
            })?;
            let shade_field = format!("{}.{}", field, name);

            let shade = ShadeKey::from_key(&name).ok_or_else(|| {
                ConfigError::malformed(
                    &shade_field,
                    "is not a shade key (expected one of: 50, 100, 200, 300, 400, 500, 600, 700, 800, 900)",
                )
            })?;

            let text = color.as_str().ok_or_else(|| {
                ConfigError::malformed(
                    &shade_field,
                    format!("must be a hex color string, got {}", kind(color)),
                )
            })?;
            let hex =
                HexColor::parse(text).map_err(|message| ConfigError::malformed(&shade_field, message))?;

            let slot = &mut shades[shade.index()];
            if slot.is_some() {
                return Err(ConfigError::malformed(shade_field, "is defined more than once"));
            }
            *slot = Some(hex);
        }

        let missing: Vec<String> = ShadeKey::ALL
            .into_iter()
            .filter(|k| shades[k.index()].is_none())
            .map(|k| k.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::malformed(
                field,
                format!("is missing shade(s) {}", missing.join(", ")),
            ));
        }

        let mut out = [HexColor::new(0, 0, 0); 10];
        for (slot, shade) in out.iter_mut().zip(shades) {
            if let Some(hex) = shade {
                *slot = hex;
            }
        }
        Ok(Self::new(out))
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ShadeKey::ALL.len()))?;
        for (shade, color) in self.iter() {
            map.serialize_entry(&shade, &color)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    const TEAL: &str = r##"
        50: "#f0fdf9"
        100: "#ccfbef"
        200: "#99f6e0"
        300: "#5eead4"
        400: "#2dd4bf"
        500: "#14b8a6"
        600: "#0d9488"
        700: "#0f766e"
        800: "#115e59"
        900: "#134e4a"
    "##;

    // =========================================================================
    // ShadeKey
    // =========================================================================

    #[test]
    fn test_shade_values() {
        let values: Vec<u16> = ShadeKey::ALL.iter().map(|k| k.value()).collect();
        assert_eq!(values, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
    }

    #[test]
    fn test_shade_from_value() {
        assert_eq!(ShadeKey::from_value(500), Some(ShadeKey::S500));
        assert_eq!(ShadeKey::from_value(450), None);
        assert_eq!(ShadeKey::try_from(0u16), Err(0));
        assert_eq!(ShadeKey::try_from(950u16), Err(950));
    }

    // =========================================================================
    // HexColor
    // =========================================================================

    #[test]
    fn test_hex_parse() {
        assert_eq!(HexColor::parse("#14b8a6").unwrap().rgb(), (20, 184, 166));
        assert_eq!(HexColor::parse("#14B8A6").unwrap().rgb(), (20, 184, 166));
    }

    #[test]
    fn test_hex_rejects_other_forms() {
        assert!(HexColor::parse("14b8a6").is_err());
        assert!(HexColor::parse("#fff").is_err());
        assert!(HexColor::parse("#14b8a6ff").is_err());
        assert!(HexColor::parse("#14b8ag").is_err());
        assert!(HexColor::parse("#").is_err());
        assert!(HexColor::parse("teal").is_err());
    }

    #[test]
    fn test_hex_display_lowercase() {
        assert_eq!(HexColor::parse("#0D9488").unwrap().to_string(), "#0d9488");
    }

    // =========================================================================
    // Palette parsing
    // =========================================================================

    #[test]
    fn test_parse_full_palette() {
        let palette = Palette::parse(&yaml(TEAL), "colors.brand").unwrap();
        assert_eq!(palette.get(ShadeKey::S500).to_string(), "#14b8a6");
        assert_eq!(palette.get(ShadeKey::S50).to_string(), "#f0fdf9");
        assert_eq!(palette.iter().count(), 10);
    }

    #[test]
    fn test_parse_string_keys() {
        let json: Value = serde_json::from_str(
            r##"{"50":"#000000","100":"#000000","200":"#000000","300":"#000000","400":"#000000",
                "500":"#111111","600":"#000000","700":"#000000","800":"#000000","900":"#000000"}"##,
        )
        .unwrap();
        let palette = Palette::parse(&json, "colors.gray").unwrap();
        assert_eq!(palette.get(ShadeKey::S500).rgb(), (17, 17, 17));
    }

    #[test]
    fn test_parse_rejects_unknown_shade() {
        let text = format!("{}\n        450: \"#123456\"", TEAL);
        let err = Palette::parse(&yaml(&text), "colors.brand").unwrap_err();
        assert_eq!(err.field(), Some("colors.brand.450"));
    }

    #[test]
    fn test_shade_from_key_is_exact() {
        assert_eq!(ShadeKey::from_key("50"), Some(ShadeKey::S50));
        assert_eq!(ShadeKey::from_key("900"), Some(ShadeKey::S900));
        for key in ["050", "+50", "0050", "50.0", " 50", "5e1", ""] {
            assert_eq!(ShadeKey::from_key(key), None, "key {:?}", key);
        }
    }

    #[test]
    fn test_parse_rejects_non_canonical_shade_spelling() {
        for key in ["050", "+50", "0050"] {
            let text = TEAL.replace("50: \"#f0fdf9\"", &format!("\"{}\": \"#f0fdf9\"", key));
            let err = Palette::parse(&yaml(&text), "colors.brand").unwrap_err();
            assert_eq!(err.field(), Some(format!("colors.brand.{}", key).as_str()));
        }
    }

    #[test]
    fn test_parse_rejects_missing_shade() {
        let text = TEAL.replace("        900: \"#134e4a\"\n", "");
        let err = Palette::parse(&yaml(&text), "colors.brand").unwrap_err();
        assert_eq!(err.field(), Some("colors.brand"));
        assert!(err.to_string().contains("900"));
    }

    #[test]
    fn test_parse_rejects_bad_color() {
        let text = TEAL.replace("#14b8a6", "#14b8a");
        let err = Palette::parse(&yaml(&text), "colors.brand").unwrap_err();
        assert_eq!(err.field(), Some("colors.brand.500"));
    }

    #[test]
    fn test_parse_rejects_duplicate_shade() {
        let text = format!("{}\n        \"500\": \"#000000\"", TEAL);
        let err = Palette::parse(&yaml(&text), "colors.brand").unwrap_err();
        assert_eq!(err.field(), Some("colors.brand.500"));
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        let err = Palette::parse(&yaml("\"#14b8a6\""), "colors.brand").unwrap_err();
        assert_eq!(err.field(), Some("colors.brand"));
    }
}
