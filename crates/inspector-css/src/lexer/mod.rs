//! CSS value grammar matching.
//!
//! The [`Lexer`] validates raw property values against CSS grammar
//! definitions and produces match trees ([`LexerElement`]) that the value
//! parsers in [`crate::parser`] turn into typed values.
//!
//! # Example
//!
//! ```
//! use inspector_css::lexer::{property_matches, type_matches};
//!
//! let children = property_matches("padding", "4px 10%", None).unwrap();
//! assert_eq!(children.len(), 2);
//!
//! let color = type_matches("color", "rgb(10%, 0%, 0%)").unwrap();
//! assert!(color.children[0].is_named_type(&["rgb()"]));
//! ```

mod grammar;
mod matcher;
mod named_colors;
mod node;
mod syntax;
mod tree;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use grammar::{CSS_WIDE_KEYWORDS, NativeType};
pub use named_colors::{NAMED_COLORS, is_named_color};
pub use node::{CssNode, NodeType, SourcePosition, SourceSpan};
pub use syntax::{Combinator, Term, parse_definition};
pub use tree::{KeywordSyntax, LexerElement, LexerMatch, LexerToken, MatchSyntax};

use crate::parser::{ParseError, ParseResult};
use crate::{Error, Result};
use matcher::{MAX_ANY_ORDER_TERMS, Matcher};
use node::{Component, tokenize};

/// A type the lexer knows how to match.
#[derive(Debug, Clone)]
pub(crate) enum Definition {
    Native(NativeType),
    Syntax(Term),
}

/// An attribute value as stored on a document element.
///
/// Only text values can be matched against a grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    Text(&'a str),
    Number(f64),
    Boolean(bool),
    Null,
}

impl<'a> AttributeValue<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            AttributeValue::Text(text) => Some(*text),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for AttributeValue<'a> {
    fn from(value: &'a str) -> Self {
        AttributeValue::Text(value)
    }
}

impl<'a> From<&'a String> for AttributeValue<'a> {
    fn from(value: &'a String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<f64> for AttributeValue<'_> {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<bool> for AttributeValue<'_> {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl<'a> From<Option<&'a str>> for AttributeValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(AttributeValue::Null, AttributeValue::Text)
    }
}

/// A set of type and property grammars.
///
/// [`Lexer::standard`] knows the vocabulary the inspector edits. Additional
/// types and properties can be added with [`Lexer::define_type`] and
/// [`Lexer::define_property`].
#[derive(Debug, Clone)]
pub struct Lexer {
    types: HashMap<String, Definition>,
    properties: HashMap<String, Term>,
}

impl Lexer {
    /// Create a lexer that only knows the native types.
    pub fn new() -> Self {
        let types = NativeType::ALL
            .iter()
            .map(|native| (native.name().to_string(), Definition::Native(*native)))
            .collect();
        Self {
            types,
            properties: HashMap::new(),
        }
    }

    /// Create a lexer with the standard types and properties.
    pub fn standard() -> Self {
        let mut lexer = Self::new();
        for (name, definition) in grammar::TYPES {
            if let Err(e) = lexer.define_type(name, definition) {
                panic!("built-in type <{}> does not compile: {}", name, e);
            }
        }
        for (name, definition) in grammar::PROPERTIES {
            if let Err(e) = lexer.define_property(name, definition) {
                panic!("built-in property '{}' does not compile: {}", name, e);
            }
        }
        lexer
    }

    /// Define (or redefine) a type from a value definition.
    ///
    /// # Errors
    ///
    /// Fails when the definition is malformed or refers to an unknown type or
    /// property. A type may refer to itself.
    pub fn define_type(&mut self, name: &str, definition: &str) -> Result<()> {
        let name = name.to_ascii_lowercase();
        let term = self.compile(definition, Some(name.as_str()))?;
        self.types.insert(name, Definition::Syntax(term));
        Ok(())
    }

    /// Define (or redefine) a property from a value definition.
    ///
    /// # Errors
    ///
    /// Fails when the definition is malformed or refers to an unknown type or
    /// property.
    pub fn define_property(&mut self, name: &str, definition: &str) -> Result<()> {
        let term = self.compile(definition, None)?;
        self.properties.insert(name.to_ascii_lowercase(), term);
        Ok(())
    }

    fn compile(&self, definition: &str, defining: Option<&str>) -> Result<Term> {
        let term = parse_definition(definition)?;

        if term.widest_any_order_group() > MAX_ANY_ORDER_TERMS {
            return Err(Error::invalid_syntax(
                definition,
                format!(
                    "`&&` and `||` groups take at most {} terms",
                    MAX_ANY_ORDER_TERMS
                ),
            ));
        }

        let mut types = vec![];
        term.type_references(&mut types);
        if let Some(unknown) = types
            .into_iter()
            .find(|name| Some(*name) != defining && !self.types.contains_key(*name))
        {
            return Err(Error::UnknownType(unknown.to_string()));
        }

        let mut properties = vec![];
        property_references(&term, &mut properties);
        if let Some(unknown) = properties
            .into_iter()
            .find(|name| !self.properties.contains_key(*name))
        {
            return Err(Error::UnknownProperty(unknown.to_string()));
        }

        Ok(term)
    }

    /// Check if a property grammar is defined.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(&name.to_ascii_lowercase())
    }

    /// Check if a type is defined.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(&name.to_ascii_lowercase())
    }

    /// Match a value against a property grammar.
    ///
    /// CSS-wide keywords (`inherit`, `initial`, ...) are accepted for every
    /// property.
    pub fn match_property(&self, name: &str, value: &str) -> ParseResult<LexerMatch> {
        let property = name.to_ascii_lowercase();
        let Some(term) = self.properties.get(&property) else {
            tracing::debug!("Unknown CSS property: {}", name);
            return Err(ParseError::grammar(format!("Unknown property `{}`", name)));
        };

        let input = tokenize(value)?;
        let matcher = Matcher::new(self, value);
        let syntax = MatchSyntax::Property(property);

        if let Some(children) = css_wide_keyword(&matcher, &input) {
            return Ok(LexerMatch { syntax, children });
        }

        match matcher.match_all(term, &input) {
            Some(children) => {
                tracing::trace!("Matched '{}' against <'{}'>", value, name);
                Ok(LexerMatch { syntax, children })
            }
            None => {
                tracing::debug!("Value '{}' rejected by <'{}'>", value, name);
                Err(ParseError::grammar(format!(
                    "Mismatch: `{}` is not a valid <'{}'> value",
                    value.trim(),
                    name
                )))
            }
        }
    }

    /// Match a value against a type.
    pub fn match_type(&self, name: &str, value: &str) -> ParseResult<LexerMatch> {
        let type_name = name.to_ascii_lowercase();
        if !self.types.contains_key(&type_name) {
            tracing::debug!("Unknown CSS type: {}", name);
            return Err(ParseError::grammar(format!("Unknown type `<{}>`", name)));
        }

        let input = tokenize(value)?;
        let matcher = Matcher::new(self, value);
        let matched = matcher
            .match_all(&Term::Type(type_name), &input)
            .and_then(|mut elements| match elements.pop() {
                Some(LexerElement::Match(m)) if elements.is_empty() => Some(m),
                _ => None,
            });

        match matched {
            Some(m) => {
                tracing::trace!("Matched '{}' against <{}>", value, name);
                Ok(m)
            }
            None => {
                tracing::debug!("Value '{}' rejected by <{}>", value, name);
                Err(ParseError::grammar(format!(
                    "Mismatch: `{}` is not a valid <{}> value",
                    value.trim(),
                    name
                )))
            }
        }
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::standard()
    }
}

fn property_references<'a>(term: &'a Term, out: &mut Vec<&'a str>) {
    match term {
        Term::Property(name) => out.push(name),
        Term::Function { arguments, .. } => property_references(arguments, out),
        Term::Group { terms, .. } => terms.iter().for_each(|term| property_references(term, out)),
        Term::Repeat { term, .. } => property_references(term, out),
        Term::Keyword(_) | Term::Type(_) | Term::Literal(_) => {}
    }
}

fn css_wide_keyword(matcher: &Matcher<'_>, input: &[Component]) -> Option<Vec<LexerElement>> {
    let [component] = input else {
        return None;
    };
    let keyword = CSS_WIDE_KEYWORDS.iter().find(|keyword| {
        component
            .leaf()
            .is_some_and(|node| node.kind == NodeType::Identifier && node.value.eq_ignore_ascii_case(keyword))
    })?;
    matcher.match_all(&Term::Keyword(keyword.to_string()), input)
}

/// The shared standard lexer.
pub fn default_lexer() -> &'static Lexer {
    static LEXER: OnceLock<Lexer> = OnceLock::new();
    LEXER.get_or_init(Lexer::standard)
}

/// Match an attribute value against a property grammar of the standard
/// lexer, returning the children of the property match.
///
/// With a `filter`, only children whose syntax name (type name or keyword) is
/// listed are returned.
///
/// # Errors
///
/// Fails when the value is not text, the property is unknown, or the grammar
/// rejects the value.
pub fn property_matches<'a>(
    name: &str,
    value: impl Into<AttributeValue<'a>>,
    filter: Option<&[&str]>,
) -> ParseResult<Vec<LexerElement>> {
    let Some(text) = value.into().as_text() else {
        return Err(ParseError::grammar(format!(
            "Property {}'s value is not a string",
            name
        )));
    };

    let matched = default_lexer().match_property(name, text)?;
    let children = match filter {
        Some(filter) => matched
            .children
            .into_iter()
            .filter(|child| child.syntax_name().is_some_and(|name| filter.contains(&name)))
            .collect(),
        None => matched.children,
    };
    Ok(children)
}

/// Match a value against a type of the standard lexer.
pub fn type_matches(type_name: &str, value: &str) -> ParseResult<LexerMatch> {
    default_lexer().match_type(type_name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(element: &LexerElement) -> Vec<String> {
        match element {
            LexerElement::Token(token) => vec![token.token.clone()],
            LexerElement::Match(m) => m.children.iter().flat_map(tokens).collect(),
        }
    }

    #[test]
    fn standard_grammar_compiles() {
        let lexer = Lexer::standard();
        for (name, _) in grammar::TYPES {
            assert!(lexer.has_type(name), "missing type {}", name);
        }
        for (name, _) in grammar::PROPERTIES {
            assert!(lexer.has_property(name), "missing property {}", name);
        }
    }

    #[test]
    fn match_rgb_tree() {
        let color = type_matches("color", "rgb(10%, 0%, 0%)").unwrap();
        assert_eq!(color.type_name(), Some("color"));
        assert_eq!(color.children.len(), 1);

        let rgb = color.children[0].as_match().unwrap();
        assert_eq!(rgb.type_name(), Some("rgb()"));
        let names: Vec<_> = rgb.children.iter().map(|c| c.syntax_name()).collect();
        assert_eq!(
            names,
            vec![
                None,
                Some("percentage"),
                None,
                Some("percentage"),
                None,
                Some("percentage"),
                None
            ]
        );
        assert_eq!(rgb.first_token().unwrap().token, "rgb(");
        assert_eq!(
            tokens(&color.children[0]),
            vec!["rgb(", "10%", ",", "0%", ",", "0%", ")"]
        );
    }

    #[test]
    fn match_alpha_value() {
        let color = type_matches("color", "rgba(0, 0, 0, 50%)").unwrap();
        let rgba = color.children[0].as_match().unwrap();
        assert_eq!(rgba.type_name(), Some("rgba()"));
        assert!(rgba.children.iter().any(|c| c.is_named_type(&["alpha-value"])));

        let color = type_matches("color", "rgb(0 0 0 / 0.5)").unwrap();
        assert_eq!(tokens(&color.children[0]).len(), 7);
    }

    #[test]
    fn reject_mixed_and_short_colors() {
        assert!(type_matches("color", "rgb(1, 2)").is_err());
        assert!(type_matches("color", "rgb(10%, 2, 3)").is_err());
        assert!(type_matches("color", "#ggg").is_err());
    }

    #[test]
    fn match_keywords_and_lengths() {
        let children = property_matches("margin", "0 auto", None).unwrap();
        assert_eq!(children.len(), 2);
        assert!(children[0].is_named_type(&["length-percentage"]));
        let auto = children[1].as_token().unwrap();
        assert_eq!(auto.keyword(), Some("auto"));
        assert_eq!(auto.token, "auto");

        assert!(property_matches("margin", "1px 2px 3px 4px 5px", None).is_err());
        assert!(property_matches("width", "AUTO", None).is_ok());
    }

    #[test]
    fn match_any_order() {
        for value in ["1px solid red", "red 1px solid", "solid", "dashed thick"] {
            assert!(property_matches("border", value, None).is_ok(), "{}", value);
        }
        assert!(property_matches("border", "solid solid", None).is_err());

        let colors = property_matches("border", "2px dotted #00f", Some(&["color"])).unwrap();
        assert_eq!(colors.len(), 1);
        assert!(colors[0].is_named_type(&["color"]));
    }

    #[test]
    fn match_comma_lists() {
        let children =
            property_matches("box-shadow", "1px 2px red, inset 0 0 4px 2px #000", None).unwrap();
        let shadows: Vec<_> = children
            .iter()
            .filter(|c| c.is_named_type(&["shadow"]))
            .collect();
        assert_eq!(shadows.len(), 2);
        assert!(children.iter().any(|c| c.as_token().is_some_and(|t| t.token == ",")));

        assert!(property_matches("box-shadow", "1px 2px red,", None).is_err());
        assert!(property_matches("box-shadow", "none", None).is_ok());
    }

    #[test]
    fn css_wide_keywords() {
        let children = property_matches("box-shadow", "inherit", None).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].syntax_name(), Some("inherit"));
    }

    #[test]
    fn value_must_be_text() {
        let err = property_matches("width", 12.0, None).unwrap_err();
        assert_eq!(err.to_string(), "Property width's value is not a string");
        assert!(property_matches("width", Option::<&str>::None, None).is_err());
        assert!(property_matches("width", true, None).is_err());
    }

    #[test]
    fn unknown_names() {
        assert!(matches!(
            property_matches("not-a-property", "1px", None),
            Err(ParseError::Grammar(_))
        ));
        assert!(type_matches("not-a-type", "1px").is_err());
    }

    #[test]
    fn mismatch_message() {
        let err = property_matches("opacity", "red", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Mismatch: `red` is not a valid <'opacity'> value"
        );
    }

    #[test]
    fn define_custom_grammar() {
        let mut lexer = Lexer::standard();
        lexer
            .define_type("size-pair", "<length-percentage>{2}")
            .unwrap();
        lexer
            .define_property("scroll-padding-block", "<size-pair> | auto")
            .unwrap();
        assert!(lexer.match_property("scroll-padding-block", "1px 2%").is_ok());
        assert!(lexer.match_property("scroll-padding-block", "1px").is_err());

        assert!(matches!(
            lexer.define_type("bad", "<nope>"),
            Err(Error::UnknownType(name)) if name == "nope"
        ));
        assert!(matches!(
            lexer.define_property("bad", "<'nope'>"),
            Err(Error::UnknownProperty(_))
        ));
        assert!(matches!(
            lexer.define_property("bad", "[ a"),
            Err(Error::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn any_order_groups_are_bounded() {
        let keywords = |count: usize| {
            (0..count)
                .map(|i| format!("k{}", i))
                .collect::<Vec<_>>()
        };
        let mut lexer = Lexer::standard();

        let widest = keywords(MAX_ANY_ORDER_TERMS).join(" || ");
        assert!(lexer.define_property("widest", &widest).is_ok());
        assert!(lexer.match_property("widest", "k63 k0").is_ok());

        let too_wide = format!("f( {} )", keywords(MAX_ANY_ORDER_TERMS + 1).join(" && "));
        assert!(matches!(
            lexer.define_property("too-wide", &too_wide),
            Err(Error::InvalidSyntax { .. })
        ));
        assert!(!lexer.has_property("too-wide"));
    }

    #[test]
    fn tokenizer_errors_are_grammar_errors() {
        let err = property_matches("width", "calc(1px) {", None).unwrap_err();
        assert!(matches!(err, ParseError::Grammar(_)));
    }
}
