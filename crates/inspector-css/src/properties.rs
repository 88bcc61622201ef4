//! Property-level parsing used by the inspector controls.
//!
//! Each function matches a raw value against the standard grammar for its
//! property and decomposes the match into typed values.
//!
//! # Example
//!
//! ```
//! use cssparser::ToCss;
//! use inspector_css::properties::{parse_box_shadow, parse_padding};
//!
//! let padding = parse_padding("4px 10%").unwrap();
//! assert_eq!(padding.len(), 2);
//!
//! let shadows = parse_box_shadow("1px 1px red, /* 0 0 4px blue */").unwrap();
//! assert!(shadows[0].enabled);
//! assert!(!shadows[1].enabled);
//! assert_eq!(shadows[1].value.to_css_string(), "0 0 4px blue");
//! ```

use crate::lexer::{
    CSS_WIDE_KEYWORDS, LexerElement, LexerMatch, LexerToken, property_matches, type_matches,
};
use crate::parser::{
    ParseError, ParseResult, parse_alpha_value, parse_alternative, parse_css_keyword,
    parse_css_valid_keyword, parse_curly_braces, parse_double_bar, parse_length,
    parse_length_percentage, parse_lexed_color, parse_whole_value, traverse_for_preparsed_layers,
};
use crate::types::{CssColor, CssKeyword, CssLayer, CssNumber, ParsedCurlyBrace, ParsedDoubleBar};

/// Keywords of `<line-width>`.
pub const LINE_WIDTH_KEYWORDS: &[&str] = &["thin", "medium", "thick"];

/// Keywords of `<line-style>`.
pub const LINE_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// A length, percentage or keyword such as `auto`.
#[derive(Debug, Clone, PartialEq)]
pub enum LengthPercentageOrKeyword {
    Keyword(CssKeyword),
    Number(CssNumber),
}

/// A `<line-width>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineWidth {
    Length(CssNumber),
    Keyword(CssKeyword<&'static str>),
}

/// One component of a `border` or `outline` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub enum BorderComponent {
    Width(LineWidth),
    Style(CssKeyword<&'static str>),
    Color(CssColor),
}

/// A single `box-shadow` layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CssBoxShadow {
    pub inset: bool,
    pub offset_x: CssNumber,
    pub offset_y: CssNumber,
    pub blur_radius: Option<CssNumber>,
    pub spread_radius: Option<CssNumber>,
    pub color: Option<CssColor>,
}

/// Fail with [`ParseError::Unsupported`] when an enabled layer of `value` is
/// `inherit`, `initial`, `unset` or `revert`. Every grammar accepts them, but
/// they have no typed value to edit.
fn reject_css_wide_keyword(value: &str) -> ParseResult<()> {
    let keyword = traverse_for_preparsed_layers(value)
        .into_iter()
        .filter(|layer| layer.enabled)
        .find(|layer| {
            CSS_WIDE_KEYWORDS
                .iter()
                .any(|keyword| layer.value.eq_ignore_ascii_case(keyword))
        });
    match keyword {
        Some(layer) => Err(ParseError::unsupported(format!(
            "{} is valid, but not supported by the inspector",
            layer.value
        ))),
        None => Ok(()),
    }
}

/// [`property_matches`] for values the property parsers can type.
fn property_children(name: &str, value: &str) -> ParseResult<Vec<LexerElement>> {
    reject_css_wide_keyword(value)?;
    property_matches(name, value, None)
}

/// Parse a single-color property such as `color` or `background-color`.
pub fn parse_color_property(name: &str, value: &str) -> ParseResult<CssColor> {
    let children = property_children(name, value)?;
    parse_whole_value(&children, parse_lexed_color)
}

/// Parse `opacity`. Percentages keep their unit.
pub fn parse_opacity(value: &str) -> ParseResult<CssNumber> {
    let children = property_children("opacity", value)?;
    parse_whole_value(&children, parse_alpha_value)
}

fn keyword_as_size(element: &LexerElement) -> ParseResult<LengthPercentageOrKeyword> {
    let keyword = match element {
        // `<absolute-size>` and `<relative-size>` wrap their keyword
        LexerElement::Match(m) if m.is_named_type(&["absolute-size", "relative-size"]) => m
            .first()
            .ok_or(ParseError::index_not_present(0))
            .and_then(parse_css_keyword)?,
        _ => parse_css_keyword(element)?,
    };
    Ok(LengthPercentageOrKeyword::Keyword(keyword))
}

fn length_percentage_as_size(element: &LexerElement) -> ParseResult<LengthPercentageOrKeyword> {
    parse_length_percentage(element).map(LengthPercentageOrKeyword::Number)
}

/// Parse a single size value: `width`, `height`, their `min-`/`max-`
/// variants, the insets, padding and margin sides, and `font-size`.
pub fn parse_size_property(name: &str, value: &str) -> ParseResult<LengthPercentageOrKeyword> {
    let children = property_children(name, value)?;
    parse_whole_value(&children, |element: &LexerElement| {
        parse_alternative(
            element,
            &[&length_percentage_as_size, &keyword_as_size],
            "Value is not a length, percentage or keyword",
        )
    })
}

/// Parse the `padding` shorthand.
pub fn parse_padding(value: &str) -> ParseResult<ParsedCurlyBrace<CssNumber>> {
    let children = property_children("padding", value)?;
    parse_curly_braces(&children, 1, 4, &[&parse_length_percentage])
}

/// Parse the `margin` shorthand.
pub fn parse_margin(value: &str) -> ParseResult<ParsedCurlyBrace<LengthPercentageOrKeyword>> {
    let children = property_children("margin", value)?;
    parse_curly_braces(
        &children,
        1,
        4,
        &[&length_percentage_as_size, &keyword_as_size],
    )
}

/// Parse the `border-radius` shorthand. Elliptical radii (`a / b`) are
/// reported as unsupported.
pub fn parse_border_radius(value: &str) -> ParseResult<ParsedCurlyBrace<CssNumber>> {
    let children = property_children("border-radius", value)?;
    if children.iter().any(|child| child.as_token().is_some_and(|token| token.token == "/")) {
        return Err(ParseError::unsupported(
            "elliptical border-radius is valid, but not supported by the inspector",
        ));
    }
    parse_curly_braces(&children, 1, 4, &[&parse_length_percentage])
}

fn parse_line_width(element: &LexerElement) -> ParseResult<BorderComponent> {
    let Some(child) = element
        .as_match()
        .filter(|m| m.is_named_type(&["line-width"]))
        .and_then(LexerMatch::first)
    else {
        return Err(ParseError::description("Match is not a <line-width>"));
    };

    let width = match child {
        LexerElement::Match(_) => LineWidth::Length(parse_length(child)?),
        LexerElement::Token(_) => LineWidth::Keyword(parse_css_valid_keyword(child, LINE_WIDTH_KEYWORDS)?),
    };
    Ok(BorderComponent::Width(width))
}

fn parse_line_style(element: &LexerElement) -> ParseResult<BorderComponent> {
    let Some(child) = element
        .as_match()
        .filter(|m| m.is_named_type(&["line-style"]))
        .and_then(LexerMatch::first)
    else {
        return Err(ParseError::description("Match is not a <line-style>"));
    };
    parse_css_valid_keyword(child, LINE_STYLES).map(BorderComponent::Style)
}

fn parse_border_color(element: &LexerElement) -> ParseResult<BorderComponent> {
    parse_lexed_color(element).map(BorderComponent::Color)
}

/// Parse the `border` or `outline` shorthand into its components, in the
/// order they were written.
pub fn parse_border(name: &str, value: &str) -> ParseResult<ParsedDoubleBar<BorderComponent>> {
    let children = property_children(name, value)?;
    parse_double_bar(
        &children,
        3,
        &[&parse_line_width, &parse_line_style, &parse_border_color],
    )
}

/// The color of a `border` shorthand, if it has one.
pub fn border_color_component(value: &str) -> ParseResult<Option<CssColor>> {
    reject_css_wide_keyword(value)?;
    let colors = property_matches("border", value, Some(&["color"]))?;
    colors.first().map(parse_lexed_color).transpose()
}

/// Parse a keyword-only property, accepting only keywords in `allowed`.
pub fn parse_keyword_property<'a>(
    name: &str,
    value: &str,
    allowed: &[&'a str],
) -> ParseResult<CssKeyword<&'a str>> {
    let children = property_children(name, value)?;
    parse_whole_value(&children, |element: &LexerElement| {
        parse_css_valid_keyword(element, allowed)
    })
}

/// Parse a comma-separated value layer by layer.
///
/// Each layer, enabled or commented out, goes through `parser`. An enabled
/// layer that fails fails the whole value; a disabled one is dropped.
pub fn parse_layers<T>(
    value: &str,
    parser: impl Fn(&str) -> ParseResult<T>,
) -> ParseResult<Vec<CssLayer<T>>> {
    let mut layers = vec![];
    for layer in traverse_for_preparsed_layers(value) {
        match parser(&layer.value) {
            Ok(parsed) => layers.push(CssLayer::new(parsed, layer.enabled)),
            Err(e) if !layer.enabled => {
                tracing::debug!("Dropping disabled layer '{}': {}", layer.value, e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(layers)
}

/// Parse one `<shadow>`.
pub fn parse_shadow(value: &str) -> ParseResult<CssBoxShadow> {
    let shadow = type_matches("shadow", value)?;

    let mut inset = false;
    let mut color = None;
    let mut lengths = Vec::with_capacity(4);
    for child in shadow.children {
        if child.as_token().and_then(LexerToken::keyword) == Some("inset") {
            inset = true;
        } else if child.is_named_type(&["length"]) {
            lengths.push(child);
        } else if child.is_named_type(&["color"]) {
            color = Some(parse_lexed_color(&child)?);
        }
    }

    let lengths = parse_curly_braces(&lengths, 2, 4, &[&parse_length])?.values;
    let [offset_x, offset_y, rest @ ..] = lengths.as_slice() else {
        return Err(ParseError::index_not_present(1));
    };
    Ok(CssBoxShadow {
        inset,
        offset_x: *offset_x,
        offset_y: *offset_y,
        blur_radius: rest.first().copied(),
        spread_radius: rest.get(1).copied(),
        color,
    })
}

/// Parse `box-shadow`.
///
/// `none` and the empty value give no layers. So does a value whose only
/// layers are comments that are not shadows, such as `/* note */`.
pub fn parse_box_shadow(value: &str) -> ParseResult<Vec<CssLayer<CssBoxShadow>>> {
    reject_css_wide_keyword(value)?;
    if value.trim().eq_ignore_ascii_case("none") {
        return Ok(vec![]);
    }
    parse_layers(value, parse_shadow)
}
