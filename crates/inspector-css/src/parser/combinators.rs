//! Combinators assembling value parsers.
//!
//! Every combinator is generic over the element it parses, so the same
//! building blocks work on lexer elements and on anything else a caller
//! wants to decompose. Results always keep the input order.

use super::error::{ParseError, ParseResult};
use crate::types::{ParsedCurlyBrace, ParsedDoubleBar};

/// A parser for one element.
pub type ElementParser<'p, I, T> = &'p dyn Fn(&I) -> ParseResult<T>;

/// Try each parser in order and return the first success.
///
/// Later parsers are not called once one succeeds. When every parser fails the
/// individual errors are discarded in favour of `description`.
///
/// # Example
///
/// ```
/// use inspector_css::parser::{parse_alternative, ParseError, ParseResult};
///
/// fn even(n: &i32) -> ParseResult<i32> {
///     if n % 2 == 0 { Ok(*n) } else { Err(ParseError::description("odd")) }
/// }
/// fn small(n: &i32) -> ParseResult<i32> {
///     if *n < 10 { Ok(-n) } else { Err(ParseError::description("big")) }
/// }
///
/// assert_eq!(parse_alternative(&4, &[&even, &small], "neither"), Ok(4));
/// assert_eq!(parse_alternative(&3, &[&even, &small], "neither"), Ok(-3));
/// assert!(parse_alternative(&13, &[&even, &small], "neither").is_err());
/// ```
pub fn parse_alternative<I: ?Sized, T>(
    input: &I,
    parsers: &[&dyn Fn(&I) -> ParseResult<T>],
    description: &str,
) -> ParseResult<T> {
    parsers
        .iter()
        .find_map(|parser| parser(input).ok())
        .ok_or_else(|| ParseError::description(description))
}

/// Parse a match that must consist of exactly one element.
pub fn parse_whole_value<I, T>(
    elements: &[I],
    parser: impl Fn(&I) -> ParseResult<T>,
) -> ParseResult<T> {
    match elements {
        [element] => parser(element),
        _ => Err(ParseError::description(format!(
            "Match of {} elements is not a single value",
            elements.len()
        ))),
    }
}

/// Parse between `min` and `max` elements, each with the first parser that
/// accepts it.
pub fn parse_curly_braces<I, T>(
    elements: &[I],
    min: usize,
    max: usize,
    parsers: &[ElementParser<'_, I, T>],
) -> ParseResult<ParsedCurlyBrace<T>> {
    if elements.len() < min || elements.len() > max {
        return Err(ParseError::description("Lexer element is not a match"));
    }

    elements
        .iter()
        .map(|element| parse_alternative(element, parsers, "Match is not valid curly brace value."))
        .collect::<ParseResult<Vec<_>>>()
        .map(ParsedCurlyBrace::new)
}

/// Parse the components of a `||` group: at least one and at most `max`.
pub fn parse_double_bar<I, T>(
    elements: &[I],
    max: usize,
    parsers: &[ElementParser<'_, I, T>],
) -> ParseResult<ParsedDoubleBar<T>> {
    if elements.is_empty() || elements.len() > max {
        return Err(ParseError::description("Lexer element is not a match"));
    }

    elements
        .iter()
        .map(|element| parse_alternative(element, parsers, "Match is not valid double bar value."))
        .collect::<ParseResult<Vec<_>>>()
        .map(ParsedDoubleBar::new)
}
