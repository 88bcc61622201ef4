//! Parsers for single lexer matches: keywords, numbers and dimensions.

use super::combinators::parse_alternative;
use super::error::{ParseError, ParseResult};
use crate::lexer::{LexerElement, LexerMatch, LexerToken, NodeType};
use crate::types::{AngleUnit, CssKeyword, CssNumber, LengthUnit};

/// The first token of a `<type>` match named `type_name`.
fn typed_token<'a>(element: &'a LexerElement, type_name: &str) -> Option<&'a LexerToken> {
    element
        .as_match()
        .filter(|m| m.is_named_type(&[type_name]))
        .and_then(LexerMatch::first_token)
}

/// Read the numeric text of a token. Values that overflow to infinity have
/// no CSS serialization and are rejected.
fn finite_value(text: &str, what: &str) -> ParseResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::out_of_range(format!(
            "{} is not a valid {} number",
            text, what
        ))),
    }
}

/// Parse a keyword token, returning the grammar keyword it matched.
pub fn parse_css_keyword(element: &LexerElement) -> ParseResult<CssKeyword> {
    element
        .as_token()
        .and_then(LexerToken::keyword)
        .map(|keyword| CssKeyword::new(keyword.to_string()))
        .ok_or_else(|| ParseError::description("Leaf is not a keyword"))
}

/// Parse a keyword token that must be one of `valid`.
pub fn parse_css_valid_keyword<T: Copy + AsRef<str>>(
    element: &LexerElement,
    valid: &[T],
) -> ParseResult<CssKeyword<T>> {
    let keyword = parse_css_keyword(element)?;
    valid
        .iter()
        .find(|entry| entry.as_ref() == keyword.value)
        .map(|entry| CssKeyword::new(*entry))
        .ok_or_else(|| ParseError::description(format!("{} is not valid keyword", keyword.value)))
}

/// Parse a `<number>` match. The result has no unit.
pub fn parse_number(element: &LexerElement) -> ParseResult<CssNumber> {
    let token = typed_token(element, "number")
        .filter(|token| token.node.kind == NodeType::Number)
        .ok_or_else(|| ParseError::description("Match is not a number"))?;
    finite_value(&token.node.value, "number").map(CssNumber::unitless)
}

/// Parse an `<angle>` match.
pub fn parse_angle(element: &LexerElement) -> ParseResult<CssNumber> {
    let (token, unit) = typed_token(element, "angle")
        .filter(|token| token.node.kind == NodeType::Dimension)
        .and_then(|token| Some((token, AngleUnit::from_css(token.node.unit.as_deref()?)?)))
        .ok_or_else(|| ParseError::description("Match is not an angle"))?;
    finite_value(&token.node.value, "angle").map(|value| CssNumber::angle(value, unit))
}

/// Parse a match holding a single percentage token.
///
/// The match's type name is not checked, so any single-token match of a
/// percentage is accepted.
pub fn parse_percentage(element: &LexerElement) -> ParseResult<CssNumber> {
    if let Some(m) = element.as_match()
        && let [child] = m.children.as_slice()
        && let Some(token) = child.as_token()
        && token.node.kind == NodeType::Percentage
    {
        return finite_value(&token.node.value, "percentage").map(CssNumber::percent);
    }
    Err(ParseError::description("leaf is not Percentage"))
}

/// Parse a `<length>` match.
///
/// A dimension needs one of the [`LengthUnit`]s. A bare `0` is the one
/// unitless length and is returned without a unit.
pub fn parse_length(element: &LexerElement) -> ParseResult<CssNumber> {
    let Some(m) = element.as_match() else {
        return Err(ParseError::description("leaf is not Dimension"));
    };
    let [child] = m.children.as_slice() else {
        return Err(ParseError::index_not_present(0));
    };

    if let Some(token) = child.as_token() {
        let node = &token.node;
        match node.kind {
            NodeType::Dimension => {
                if let Some(unit) = LengthUnit::from_css(node.unit.as_deref().unwrap_or("px")) {
                    return finite_value(&node.value, "length")
                        .map(|value| CssNumber::length(value, unit));
                }
            }
            NodeType::Number if node.value == "0" => return Ok(CssNumber::unitless(0.0)),
            _ => {}
        }
    }
    Err(ParseError::description("leaf is not Dimension"))
}

/// Parse a `<length-percentage>` match.
pub fn parse_length_percentage(element: &LexerElement) -> ParseResult<CssNumber> {
    match element.as_match().map(|m| m.children.as_slice()) {
        Some([child]) => parse_alternative(
            child,
            &[&parse_length, &parse_percentage],
            "Could not parse length-percentage",
        ),
        _ => Err(ParseError::description("Could not parse length-percentage")),
    }
}

/// Parse an `<alpha-value>` match. Percentages keep their `%` unit.
pub fn parse_alpha_value(element: &LexerElement) -> ParseResult<CssNumber> {
    match element.as_match().and_then(LexerMatch::first) {
        Some(child) => parse_alternative(
            child,
            &[&parse_number, &parse_percentage],
            "Match is not a valid number or percentage <alpha-value>",
        ),
        None => Err(ParseError::description(
            "Match is not a valid <alpha-value> lexer match",
        )),
    }
}

/// Parse a `<hue>` match: a bare number or an angle.
pub fn parse_hue(element: &LexerElement) -> ParseResult<CssNumber> {
    match element.as_match().and_then(LexerMatch::first) {
        Some(child) => parse_alternative(
            child,
            &[&parse_number, &parse_angle],
            "Match is not a valid number or angle <hue>",
        ),
        None => Err(ParseError::description(
            "Match is not a valid <hue> lexer match",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{property_matches, type_matches};
    use crate::types::CssNumberUnit;

    fn lexed(type_name: &str, value: &str) -> LexerElement {
        LexerElement::Match(type_matches(type_name, value).unwrap())
    }

    #[test]
    fn lengths_keep_their_unit() {
        for unit in LengthUnit::ALL {
            let value = format!("12.5{}", unit.as_str());
            let parsed = parse_length(&lexed("length", &value)).unwrap();
            assert_eq!(parsed, CssNumber::length(12.5, unit), "{}", value);
        }
    }

    #[test]
    fn zero_length_has_no_unit() {
        let parsed = parse_length(&lexed("length", "0")).unwrap();
        assert_eq!(parsed.value, 0.0);
        assert_eq!(parsed.unit, None);

        // Only the literal `0` counts as a unitless length
        assert_eq!(
            parse_length(&lexed("length", "0.0")),
            Err(ParseError::description("leaf is not Dimension"))
        );
    }

    #[test]
    fn length_needs_a_single_child() {
        let padding = property_matches("padding", "1px 2px", None).unwrap();
        let many = LexerElement::Match(LexerMatch {
            syntax: crate::lexer::MatchSyntax::Type("length".to_string()),
            children: padding,
        });
        assert_eq!(parse_length(&many), Err(ParseError::index_not_present(0)));
        assert!(parse_length(&lexed("angle", "1deg")).is_err());
    }

    #[test]
    fn numbers_and_angles() {
        assert_eq!(
            parse_number(&lexed("number", "1.5")),
            Ok(CssNumber::unitless(1.5))
        );
        assert!(parse_number(&lexed("percentage", "1.5%")).is_err());

        assert_eq!(
            parse_angle(&lexed("angle", "90deg")),
            Ok(CssNumber::angle(90.0, AngleUnit::Deg))
        );
        assert_eq!(
            parse_angle(&lexed("angle", "0.5turn")),
            Ok(CssNumber::angle(0.5, AngleUnit::Turn))
        );
        assert!(parse_angle(&lexed("number", "90")).is_err());
    }

    #[test]
    fn percentages() {
        let parsed = parse_percentage(&lexed("percentage", "50%")).unwrap();
        assert_eq!(parsed.value, 50.0);
        assert_eq!(parsed.unit, Some(CssNumberUnit::Percent));

        assert_eq!(
            parse_percentage(&lexed("length", "5px")),
            Err(ParseError::description("leaf is not Percentage"))
        );
    }

    #[test]
    fn overflowing_values_are_out_of_range() {
        assert_eq!(
            parse_length(&lexed("length", "1e400px")),
            Err(ParseError::out_of_range("1e400 is not a valid length number"))
        );
        assert!(matches!(
            parse_number(&lexed("number", "-1e400")),
            Err(ParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_angle(&lexed("angle", "1e999deg")),
            Err(ParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_percentage(&lexed("percentage", "1e400%")),
            Err(ParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn length_percentage_tries_length_first() {
        assert_eq!(
            parse_length_percentage(&lexed("length-percentage", "4em")),
            Ok(CssNumber::length(4.0, LengthUnit::Em))
        );
        assert_eq!(
            parse_length_percentage(&lexed("length-percentage", "10%")),
            Ok(CssNumber::percent(10.0))
        );
        assert_eq!(
            parse_length_percentage(&lexed("hue", "10deg")),
            Err(ParseError::description("Could not parse length-percentage"))
        );
    }

    #[test]
    fn alpha_and_hue() {
        assert_eq!(
            parse_alpha_value(&lexed("alpha-value", "0.25")),
            Ok(CssNumber::unitless(0.25))
        );
        assert_eq!(
            parse_alpha_value(&lexed("alpha-value", "25%")),
            Ok(CssNumber::percent(25.0))
        );
        assert_eq!(
            parse_hue(&lexed("hue", "200")),
            Ok(CssNumber::unitless(200.0))
        );
        assert_eq!(
            parse_hue(&lexed("hue", "1rad")),
            Ok(CssNumber::angle(1.0, AngleUnit::Rad))
        );
    }

    #[test]
    fn keywords() {
        let children = property_matches("width", "auto", None).unwrap();
        let keyword = parse_css_keyword(&children[0]).unwrap();
        assert_eq!(keyword.as_str(), "auto");

        let valid = parse_css_valid_keyword(&children[0], &["none", "auto"]).unwrap();
        assert_eq!(valid.value, "auto");

        assert_eq!(
            parse_css_valid_keyword(&children[0], &["none"]),
            Err(ParseError::description("auto is not valid keyword"))
        );

        let length = property_matches("width", "10px", None).unwrap();
        assert!(parse_css_keyword(&length[0]).is_err());
    }
}
