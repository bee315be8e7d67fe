use std::str::FromStr;

use cosmic::iced::Color;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `#rgb`, `#rrggbb`, or `#rrggbbaa`.
static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("unrecognized tag color `{0}`")]
    Unrecognized(String),
    #[error("malformed hex color `{0}`")]
    MalformedHex(String),
}

/// The fixed design-system palette for tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetColor {
    Magenta,
    Red,
    Volcano,
    Orange,
    Gold,
    Lime,
    Green,
    Cyan,
    Blue,
    GeekBlue,
    Purple,
}

impl PresetColor {
    pub const ALL: &'static [Self] = &[
        Self::Magenta,
        Self::Red,
        Self::Volcano,
        Self::Orange,
        Self::Gold,
        Self::Lime,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::GeekBlue,
        Self::Purple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Magenta => "magenta",
            Self::Red => "red",
            Self::Volcano => "volcano",
            Self::Orange => "orange",
            Self::Gold => "gold",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::GeekBlue => "geekblue",
            Self::Purple => "purple",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "magenta" => Some(Self::Magenta),
            "red" => Some(Self::Red),
            "volcano" => Some(Self::Volcano),
            "orange" => Some(Self::Orange),
            "gold" => Some(Self::Gold),
            "lime" => Some(Self::Lime),
            "green" => Some(Self::Green),
            "cyan" => Some(Self::Cyan),
            "blue" => Some(Self::Blue),
            "geekblue" => Some(Self::GeekBlue),
            "purple" => Some(Self::Purple),
            _ => None,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Magenta => Color::from_rgb8(0xeb, 0x2f, 0x96),
            Self::Red => Color::from_rgb8(0xf5, 0x22, 0x2d),
            Self::Volcano => Color::from_rgb8(0xfa, 0x54, 0x1c),
            Self::Orange => Color::from_rgb8(0xfa, 0x8c, 0x16),
            Self::Gold => Color::from_rgb8(0xfa, 0xad, 0x14),
            Self::Lime => Color::from_rgb8(0xa0, 0xd9, 0x11),
            Self::Green => Color::from_rgb8(0x52, 0xc4, 0x1a),
            Self::Cyan => Color::from_rgb8(0x13, 0xc2, 0xc2),
            Self::Blue => Color::from_rgb8(0x16, 0x77, 0xff),
            Self::GeekBlue => Color::from_rgb8(0x2f, 0x54, 0xeb),
            Self::Purple => Color::from_rgb8(0x72, 0x2e, 0xd1),
        }
    }
}

/// Semantic status colors, aliases into the preset palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusColor {
    Success,
    Processing,
    Error,
    Warning,
}

impl StatusColor {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Processing => "processing",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "processing" => Some(Self::Processing),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    pub fn preset(&self) -> PresetColor {
        match self {
            Self::Success => PresetColor::Green,
            Self::Processing => PresetColor::Blue,
            Self::Error => PresetColor::Red,
            Self::Warning => PresetColor::Gold,
        }
    }
}

/// A tag color, classified at parse time: preset palette, semantic status,
/// or an arbitrary color applied as an inline fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TagColor {
    Preset(PresetColor),
    Status(StatusColor),
    Custom(Color),
}

impl TagColor {
    /// Arbitrary colors get an inline background; presets use the palette.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Background fill for the tag body.
    pub fn fill(&self) -> Color {
        match self {
            Self::Preset(preset) => preset.color(),
            Self::Status(status) => status.preset().color(),
            Self::Custom(color) => *color,
        }
    }

    /// Foreground that stays legible over [`fill`](Self::fill).
    pub fn text_color(&self) -> Color {
        let fill = self.fill();
        let luminance = 0.2126 * fill.r + 0.7152 * fill.g + 0.0722 * fill.b;
        if luminance > 0.6 {
            Color::from_rgb8(0x1c, 0x1c, 0x1c)
        } else {
            Color::WHITE
        }
    }
}

impl From<PresetColor> for TagColor {
    fn from(preset: PresetColor) -> Self {
        Self::Preset(preset)
    }
}

impl From<StatusColor> for TagColor {
    fn from(status: StatusColor) -> Self {
        Self::Status(status)
    }
}

impl From<Color> for TagColor {
    fn from(color: Color) -> Self {
        Self::Custom(color)
    }
}

impl FromStr for TagColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(preset) = PresetColor::from_name(&lower) {
            return Ok(Self::Preset(preset));
        }
        if let Some(status) = StatusColor::from_name(&lower) {
            return Ok(Self::Status(status));
        }
        if lower.starts_with('#') {
            return parse_hex(&lower).map(Self::Custom);
        }
        Err(ColorError::Unrecognized(s.to_string()))
    }
}

fn parse_hex(s: &str) -> Result<Color, ColorError> {
    if !HEX_COLOR.is_match(s) {
        return Err(ColorError::MalformedHex(s.to_string()));
    }
    let digits = &s[1..];

    // #rgb expands each digit, e.g. #f60 -> #ff6600
    let expanded;
    let digits = if digits.len() == 3 {
        expanded = digits
            .chars()
            .flat_map(|c| [c, c])
            .collect::<String>();
        expanded.as_str()
    } else {
        digits
    };

    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap();
    let (r, g, b) = (byte(0), byte(2), byte(4));
    if digits.len() == 8 {
        Ok(Color::from_rgba8(r, g, b, f32::from(byte(6)) / 255.0))
    } else {
        Ok(Color::from_rgb8(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_name_round_trip() {
        for preset in PresetColor::ALL {
            assert_eq!(PresetColor::from_name(preset.name()), Some(*preset));
        }
    }

    #[test]
    fn parse_preset() {
        let color: TagColor = "green".parse().unwrap();
        assert_eq!(color, TagColor::Preset(PresetColor::Green));
        assert!(!color.is_custom());
        assert_eq!(color.fill(), PresetColor::Green.color());
    }

    #[test]
    fn parse_status() {
        let color: TagColor = "success".parse().unwrap();
        assert_eq!(color, TagColor::Status(StatusColor::Success));
        assert_eq!(color.fill(), PresetColor::Green.color());
    }

    #[test]
    fn parse_is_case_insensitive() {
        let color: TagColor = " GeekBlue ".parse().unwrap();
        assert_eq!(color, TagColor::Preset(PresetColor::GeekBlue));
    }

    #[test]
    fn parse_custom_hex() {
        let color: TagColor = "#ff6600".parse().unwrap();
        assert!(color.is_custom());
        assert_eq!(color.fill(), Color::from_rgb8(0xff, 0x66, 0x00));
    }

    #[test]
    fn parse_short_hex_expands() {
        let color: TagColor = "#f60".parse().unwrap();
        assert_eq!(color.fill(), Color::from_rgb8(0xff, 0x66, 0x00));
    }

    #[test]
    fn parse_hex_with_alpha() {
        let color: TagColor = "#ff660080".parse().unwrap();
        let fill = color.fill();
        assert!((fill.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn reject_unknown_name() {
        let err = "chartreuse".parse::<TagColor>().unwrap_err();
        assert_eq!(err, ColorError::Unrecognized("chartreuse".into()));
    }

    #[test]
    fn reject_malformed_hex() {
        let err = "#12345".parse::<TagColor>().unwrap_err();
        assert_eq!(err, ColorError::MalformedHex("#12345".into()));
    }

    #[test]
    fn text_color_flips_on_light_fills() {
        let on_gold = TagColor::Preset(PresetColor::Gold).text_color();
        let on_purple = TagColor::Preset(PresetColor::Purple).text_color();
        assert_ne!(on_gold, Color::WHITE);
        assert_eq!(on_purple, Color::WHITE);
    }
}
