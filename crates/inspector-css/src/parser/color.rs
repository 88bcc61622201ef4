//! Color parsers.
//!
//! `rgb()` and `hsl()` colors are read from lexer matches. Hex and named
//! colors are read from their raw token text with [`parse_color`].

use super::combinators::parse_alternative;
use super::error::{ParseError, ParseResult};
use super::primitives::{parse_alpha_value, parse_hue, parse_number, parse_percentage};
use crate::lexer::{LexerElement, LexerMatch, is_named_color};
use crate::types::{CssColor, CssColorHex, CssColorHsl, CssColorKeyword, CssColorRgb, CssNumber};

/// The component syntaxes of an `rgb()` match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RgbComponent {
    Percentage,
    Number,
    AlphaValue,
}

impl RgbComponent {
    fn from_syntax(name: &str) -> Option<Self> {
        match name {
            "percentage" => Some(RgbComponent::Percentage),
            "number" => Some(RgbComponent::Number),
            "alpha-value" => Some(RgbComponent::AlphaValue),
            _ => None,
        }
    }
}

/// The component syntaxes of an `hsl()` match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HslComponent {
    Hue,
    Percentage,
    AlphaValue,
}

impl HslComponent {
    fn from_syntax(name: &str) -> Option<Self> {
        match name {
            "hue" => Some(HslComponent::Hue),
            "percentage" => Some(HslComponent::Percentage),
            "alpha-value" => Some(HslComponent::AlphaValue),
            _ => None,
        }
    }
}

/// The component kind of a child match, if it has one.
fn component_kind<K>(child: &LexerElement, from_syntax: fn(&str) -> Option<K>) -> Option<K> {
    child
        .as_match()
        .and_then(LexerMatch::type_name)
        .and_then(from_syntax)
}

/// Parse an alpha value, converting a percentage to a fraction. Returns the
/// alpha and whether it was written as a percentage.
fn parse_fractional_alpha(element: &LexerElement) -> ParseResult<(CssNumber, bool)> {
    let alpha = parse_alpha_value(element)?;
    if alpha.is_percent() {
        Ok((CssNumber::unitless(alpha.value / 100.0), true))
    } else {
        Ok((alpha, false))
    }
}

/// Parse an `<rgb()>` or `<rgba()>` match.
///
/// Components that fail to parse are skipped. At least three must remain; a
/// fourth is the alpha, which defaults to 1.
pub fn parse_rgb_color(element: &LexerElement) -> ParseResult<CssColorRgb> {
    let Some(m) = element
        .as_match()
        .filter(|m| m.is_named_type(&["rgb()", "rgba()"]))
    else {
        return Err(ParseError::description("Match is not an rgb(a) color"));
    };

    let mut percentages_used = false;
    let mut percentage_alpha = false;
    let mut components = Vec::with_capacity(4);

    for child in &m.children {
        let Some(kind) = component_kind(child, RgbComponent::from_syntax) else {
            continue;
        };
        let parsed = match kind {
            // The grammar keeps channel notation uniform, so the last one seen wins
            RgbComponent::Percentage => {
                percentages_used = true;
                parse_percentage(child)
            }
            RgbComponent::Number => {
                percentages_used = false;
                parse_number(child)
            }
            RgbComponent::AlphaValue => parse_fractional_alpha(child).map(|(alpha, percent)| {
                percentage_alpha = percent;
                alpha
            }),
        };
        if let Ok(component) = parsed {
            components.push(component.value);
        }
    }

    match components.as_slice() {
        [red, green, blue, rest @ ..] => Ok(CssColorRgb::new(
            *red,
            *green,
            *blue,
            rest.first().copied().unwrap_or(1.0),
            percentage_alpha,
            percentages_used,
        )),
        _ => Err(ParseError::description("Match is not an rgb(a) color")),
    }
}

/// Parse an `<hsl()>` or `<hsla()>` match.
///
/// The hue must be unitless or in degrees.
pub fn parse_hsl_color(element: &LexerElement) -> ParseResult<CssColorHsl> {
    let Some(m) = element
        .as_match()
        .filter(|m| m.is_named_type(&["hsl()", "hsla()"]))
    else {
        return Err(ParseError::description("Match is not an hsl(a) color"));
    };

    let mut percentage_alpha = false;
    let mut components = Vec::with_capacity(4);

    for child in &m.children {
        let Some(kind) = component_kind(child, HslComponent::from_syntax) else {
            continue;
        };
        let parsed = match kind {
            HslComponent::Hue => parse_hue(child),
            HslComponent::Percentage => parse_percentage(child),
            HslComponent::AlphaValue => parse_fractional_alpha(child).map(|(alpha, percent)| {
                percentage_alpha = percent;
                alpha
            }),
        };
        if let Ok(component) = parsed {
            components.push(component);
        }
    }

    match components.as_slice() {
        [hue, saturation, lightness, rest @ ..] if hue.is_degrees_or_unitless() => {
            Ok(CssColorHsl::new(
                hue.value,
                saturation.value,
                lightness.value,
                rest.first().map_or(1.0, |alpha| alpha.value),
                percentage_alpha,
            ))
        }
        [_, _, _, ..] => Err(ParseError::out_of_range(
            "hsl() hue must be in degrees or unitless",
        )),
        _ => Err(ParseError::description("Match is not an hsl(a) color")),
    }
}

fn parse_rgb_as_color(element: &LexerElement) -> ParseResult<CssColor> {
    parse_rgb_color(element).map(CssColor::Rgb)
}

fn parse_hsl_as_color(element: &LexerElement) -> ParseResult<CssColor> {
    parse_hsl_color(element).map(CssColor::Hsl)
}

/// Parse a `<color>` match.
///
/// Colors the grammar accepts but the inspector cannot edit, such as `hwb()`
/// or `currentcolor`, fail with [`ParseError::Unsupported`].
pub fn parse_lexed_color(element: &LexerElement) -> ParseResult<CssColor> {
    let Some(child) = element
        .as_match()
        .filter(|m| m.is_named_type(&["color"]) && m.children.len() == 1)
        .and_then(LexerMatch::first)
    else {
        return Err(ParseError::description("leaf is not color"));
    };

    let Some(leaf) = child.as_match() else {
        return Err(ParseError::unsupported(
            "color is valid, but not supported by the inspector",
        ));
    };

    if leaf.is_named_type(&["rgb()", "rgba()", "hsl()", "hsla()"]) {
        return parse_alternative(
            child,
            &[&parse_rgb_as_color, &parse_hsl_as_color],
            "Value is not an <rgb()>, <rgba()>, <hsl()>, or <hsla()> color",
        );
    }

    if leaf.is_named_type(&["hex-color", "named-color"]) {
        return match leaf.first_token() {
            Some(token) => parse_color(&token.token),
            None => Err(ParseError::index_not_present(0)),
        };
    }

    Err(ParseError::unsupported(
        "color is valid, but not supported by the inspector",
    ))
}

/// Parse a hex or named color literal such as `#ff000080` or `teal`.
///
/// Hex colors keep their authored text; named colors are lowercased.
pub fn parse_color(raw: &str) -> ParseResult<CssColor> {
    let raw = raw.trim();

    if let Some(digits) = raw.strip_prefix('#') {
        let valid = matches!(digits.len(), 3 | 4 | 6 | 8)
            && raw.parse::<csscolorparser::Color>().is_ok();
        return if valid {
            Ok(CssColor::Hex(CssColorHex {
                hex: raw.to_string(),
            }))
        } else {
            Err(ParseError::description(format!(
                "{} is not a valid hex color",
                raw
            )))
        };
    }

    if is_named_color(raw) && raw.parse::<csscolorparser::Color>().is_ok() {
        return Ok(CssColor::Keyword(CssColorKeyword {
            keyword: raw.to_ascii_lowercase(),
        }));
    }

    Err(ParseError::description(format!(
        "{} is not a valid color",
        raw
    )))
}
