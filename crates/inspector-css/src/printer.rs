//! Writing parsed values back as CSS text.
//!
//! Every value type implements [`cssparser::ToCss`], so `to_css_string()` is
//! available on all of them. Colors are printed in the notation they were
//! parsed from.

use std::fmt::{self, Write};

use cssparser::ToCss;

use crate::properties::{BorderComponent, CssBoxShadow, LengthPercentageOrKeyword, LineWidth};
use crate::types::{
    CssColor, CssColorHex, CssColorHsl, CssColorKeyword, CssColorRgb, CssKeyword, CssLayer,
    CssNumber, ParsedCurlyBrace, ParsedDoubleBar,
};

/// Write a number without floating point noise.
///
/// Values outside the `f32` range, infinities included, are clamped the way
/// `cssparser` clamps the numbers it reads.
fn write_number<W: Write>(value: f64, dest: &mut W) -> fmt::Result {
    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(f32::MIN as f64, f32::MAX as f64)
    };
    // Past 1e9 an f64 has no digits left at the sixth decimal
    let rounded = if value.abs() < 1e9 {
        (value * 1_000_000.0).round() / 1_000_000.0
    } else {
        value
    };
    // Avoid printing `-0`
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    write!(dest, "{}", rounded)
}

/// Write items separated by single spaces.
fn write_space_separated<'a, T, W>(items: impl IntoIterator<Item = &'a T>, dest: &mut W) -> fmt::Result
where
    T: ToCss + 'a,
    W: Write,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            dest.write_char(' ')?;
        }
        item.to_css(dest)?;
    }
    Ok(())
}

impl ToCss for CssNumber {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        write_number(self.value, dest)?;
        if let Some(unit) = self.unit {
            dest.write_str(unit.as_str())?;
        }
        Ok(())
    }
}

impl<T: AsRef<str>> ToCss for CssKeyword<T> {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(self.as_str())
    }
}

/// Write the alpha of a color, as authored.
fn write_alpha<W: Write>(alpha: f64, percentage: bool, dest: &mut W) -> fmt::Result {
    if percentage {
        write_number(alpha * 100.0, dest)?;
        dest.write_char('%')
    } else {
        write_number(alpha, dest)
    }
}

impl ToCss for CssColorRgb {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        let has_alpha = self.alpha != 1.0 || self.percentage_alpha;
        dest.write_str(if has_alpha { "rgba(" } else { "rgb(" })?;

        for (i, channel) in [self.red, self.green, self.blue].into_iter().enumerate() {
            if i > 0 {
                dest.write_str(", ")?;
            }
            write_number(channel, dest)?;
            if self.percentages_used {
                dest.write_char('%')?;
            }
        }

        if has_alpha {
            dest.write_str(", ")?;
            write_alpha(self.alpha, self.percentage_alpha, dest)?;
        }
        dest.write_char(')')
    }
}

impl ToCss for CssColorHsl {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        let has_alpha = self.alpha != 1.0 || self.percentage_alpha;
        dest.write_str(if has_alpha { "hsla(" } else { "hsl(" })?;

        write_number(self.hue, dest)?;
        dest.write_str(", ")?;
        write_number(self.saturation, dest)?;
        dest.write_str("%, ")?;
        write_number(self.lightness, dest)?;
        dest.write_char('%')?;

        if has_alpha {
            dest.write_str(", ")?;
            write_alpha(self.alpha, self.percentage_alpha, dest)?;
        }
        dest.write_char(')')
    }
}

impl ToCss for CssColorHex {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(&self.hex)
    }
}

impl ToCss for CssColorKeyword {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(&self.keyword)
    }
}

impl ToCss for CssColor {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            CssColor::Hex(color) => color.to_css(dest),
            CssColor::Keyword(color) => color.to_css(dest),
            CssColor::Rgb(color) => color.to_css(dest),
            CssColor::Hsl(color) => color.to_css(dest),
        }
    }
}

impl<T: ToCss> ToCss for ParsedCurlyBrace<T> {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        write_space_separated(self.iter(), dest)
    }
}

impl<T: ToCss> ToCss for ParsedDoubleBar<T> {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        write_space_separated(self.iter(), dest)
    }
}

impl ToCss for LengthPercentageOrKeyword {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            LengthPercentageOrKeyword::Keyword(keyword) => keyword.to_css(dest),
            LengthPercentageOrKeyword::Number(number) => number.to_css(dest),
        }
    }
}

impl ToCss for LineWidth {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            LineWidth::Length(length) => length.to_css(dest),
            LineWidth::Keyword(keyword) => keyword.to_css(dest),
        }
    }
}

impl ToCss for BorderComponent {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            BorderComponent::Width(width) => width.to_css(dest),
            BorderComponent::Style(style) => style.to_css(dest),
            BorderComponent::Color(color) => color.to_css(dest),
        }
    }
}

impl ToCss for CssBoxShadow {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        if self.inset {
            dest.write_str("inset ")?;
        }
        let lengths = [
            Some(&self.offset_x),
            Some(&self.offset_y),
            self.blur_radius.as_ref(),
            self.spread_radius.as_ref(),
        ];
        write_space_separated(lengths.into_iter().flatten(), dest)?;
        if let Some(color) = &self.color {
            dest.write_char(' ')?;
            color.to_css(dest)?;
        }
        Ok(())
    }
}

/// Write layers as a comma-separated value. Disabled layers become comments.
///
/// ```
/// use inspector_css::printer::layers_to_css_string;
/// use inspector_css::types::{CssKeyword, CssLayer};
///
/// let layers = vec![
///     CssLayer::new(CssKeyword::new("a"), true),
///     CssLayer::new(CssKeyword::new("b"), false),
///     CssLayer::new(CssKeyword::new("c"), true),
/// ];
/// assert_eq!(layers_to_css_string(&layers), "a, /* b */ c");
/// ```
pub fn layers_to_css<T: ToCss, W: Write>(layers: &[CssLayer<T>], dest: &mut W) -> fmt::Result {
    for (i, layer) in layers.iter().enumerate() {
        if i > 0 {
            dest.write_char(' ')?;
        }
        if layer.enabled {
            layer.value.to_css(dest)?;
            if layers[i + 1..].iter().any(|later| later.enabled) {
                dest.write_char(',')?;
            }
        } else {
            dest.write_str("/* ")?;
            layer.value.to_css(dest)?;
            dest.write_str(" */")?;
        }
    }
    Ok(())
}

/// [`layers_to_css`] into a new string.
pub fn layers_to_css_string<T: ToCss>(layers: &[CssLayer<T>]) -> String {
    let mut css = String::new();
    // Writing to a String cannot fail
    let _ = layers_to_css(layers, &mut css);
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LengthUnit;

    #[test]
    fn numbers() {
        assert_eq!(CssNumber::length(12.0, LengthUnit::Px).to_css_string(), "12px");
        assert_eq!(CssNumber::percent(33.5).to_css_string(), "33.5%");
        assert_eq!(CssNumber::unitless(0.1 + 0.2).to_css_string(), "0.3");
        assert_eq!(CssNumber::unitless(-0.0000001).to_css_string(), "0");
        assert_eq!(CssNumber::length(1.0, LengthUnit::Q).to_css_string(), "1Q");
    }

    #[test]
    fn numbers_stay_finite() {
        let huge = CssNumber::length(f64::INFINITY, LengthUnit::Px).to_css_string();
        assert_eq!(huge, format!("{}px", f32::MAX as f64));
        assert!(crate::lexer::type_matches("length", &huge).is_ok());

        assert_eq!(CssNumber::unitless(f64::NAN).to_css_string(), "0");
        assert_eq!(
            CssNumber::unitless(-f64::INFINITY).to_css_string(),
            format!("{}", f32::MIN as f64)
        );
    }

    #[test]
    fn rgb_notation() {
        let rgb = CssColorRgb::new(10.0, 20.0, 30.0, 1.0, false, true);
        assert_eq!(rgb.to_css_string(), "rgb(10%, 20%, 30%)");

        let rgba = CssColorRgb::new(0.0, 0.0, 0.0, 0.5, true, false);
        assert_eq!(rgba.to_css_string(), "rgba(0, 0, 0, 50%)");

        let rgba = CssColorRgb::new(0.0, 0.0, 0.0, 0.5, false, false);
        assert_eq!(rgba.to_css_string(), "rgba(0, 0, 0, 0.5)");

        let opaque = CssColorRgb::new(0.0, 0.0, 0.0, 1.0, true, false);
        assert_eq!(opaque.to_css_string(), "rgba(0, 0, 0, 100%)");
    }

    #[test]
    fn hsl_notation() {
        let hsl = CssColorHsl::new(200.0, 50.0, 25.0, 1.0, false);
        assert_eq!(hsl.to_css_string(), "hsl(200, 50%, 25%)");

        let hsla = CssColorHsl::new(200.0, 50.0, 25.0, 0.25, false);
        assert_eq!(hsla.to_css_string(), "hsla(200, 50%, 25%, 0.25)");
    }

    #[test]
    fn repetitions() {
        let padding = ParsedCurlyBrace::new(vec![
            CssNumber::length(1.0, LengthUnit::Px),
            CssNumber::percent(5.0),
        ]);
        assert_eq!(padding.to_css_string(), "1px 5%");

        let border = ParsedDoubleBar::new(vec![
            BorderComponent::Style(CssKeyword::new("solid")),
            BorderComponent::Width(LineWidth::Keyword(CssKeyword::new("thin"))),
        ]);
        assert_eq!(border.to_css_string(), "solid thin");
    }

    #[test]
    fn box_shadow() {
        let shadow = CssBoxShadow {
            inset: true,
            offset_x: CssNumber::unitless(0.0),
            offset_y: CssNumber::length(2.0, LengthUnit::Px),
            blur_radius: None,
            spread_radius: None,
            color: Some(CssColor::Keyword(CssColorKeyword {
                keyword: "red".to_string(),
            })),
        };
        assert_eq!(shadow.to_css_string(), "inset 0 2px red");
    }

    #[test]
    fn layers() {
        let disabled_last = vec![
            CssLayer::new(CssKeyword::new("a"), true),
            CssLayer::new(CssKeyword::new("b"), false),
        ];
        assert_eq!(layers_to_css_string(&disabled_last), "a /* b */");

        let disabled_first = vec![
            CssLayer::new(CssKeyword::new("a"), false),
            CssLayer::new(CssKeyword::new("b"), true),
        ];
        assert_eq!(layers_to_css_string(&disabled_first), "/* a */ b");

        let empty: Vec<CssLayer<CssKeyword>> = vec![];
        assert_eq!(layers_to_css_string(&empty), "");
    }
}
