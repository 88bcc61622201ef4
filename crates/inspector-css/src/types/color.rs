//! Color values as the inspector edits them.
//!
//! Colors keep the notation they were authored in. An `rgb()` color written
//! with percentage channels stays a percentage color, and a percentage alpha
//! stays a percentage when printed again, even though `alpha` itself is
//! always stored as a 0-1 fraction.

use cssparser::ToCss;

/// An `rgb()`/`rgba()` color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColorRgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    /// Alpha as a fraction between 0 and 1.
    pub alpha: f64,
    /// Alpha was written as a percentage.
    pub percentage_alpha: bool,
    /// Channels were written as percentages.
    pub percentages_used: bool,
}

impl CssColorRgb {
    pub fn new(
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
        percentage_alpha: bool,
        percentages_used: bool,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            percentage_alpha,
            percentages_used,
        }
    }
}

/// An `hsl()`/`hsla()` color. Hue is in degrees, saturation and lightness
/// are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColorHsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
    pub percentage_alpha: bool,
}

impl CssColorHsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64, percentage_alpha: bool) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
            percentage_alpha,
        }
    }
}

/// A `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` color, kept as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssColorHex {
    pub hex: String,
}

/// A named color such as `rebeccapurple`, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssColorKeyword {
    pub keyword: String,
}

/// Any color the inspector can edit.
#[derive(Debug, Clone, PartialEq)]
pub enum CssColor {
    Hex(CssColorHex),
    Keyword(CssColorKeyword),
    Rgb(CssColorRgb),
    Hsl(CssColorHsl),
}

impl CssColor {
    /// Resolve the color to 8-bit RGBA channels.
    pub fn to_rgba8(&self) -> Option<[u8; 4]> {
        let parsed: csscolorparser::Color = self.to_css_string().parse().ok()?;
        Some(parsed.to_rgba8())
    }
}

impl From<CssColorRgb> for CssColor {
    fn from(color: CssColorRgb) -> Self {
        CssColor::Rgb(color)
    }
}

impl From<CssColorHsl> for CssColor {
    fn from(color: CssColorHsl) -> Self {
        CssColor::Hsl(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_to_rgba8() {
        let hex = CssColor::Hex(CssColorHex {
            hex: "#ff0000".to_string(),
        });
        assert_eq!(hex.to_rgba8(), Some([255, 0, 0, 255]));

        let keyword = CssColor::Keyword(CssColorKeyword {
            keyword: "blue".to_string(),
        });
        assert_eq!(keyword.to_rgba8(), Some([0, 0, 255, 255]));

        let rgb = CssColor::from(CssColorRgb::new(0.0, 128.0, 0.0, 1.0, false, false));
        assert_eq!(rgb.to_rgba8(), Some([0, 128, 0, 255]));
    }
}
