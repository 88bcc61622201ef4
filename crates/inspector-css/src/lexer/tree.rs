//! Match trees produced by the [`Lexer`](super::Lexer).
//!
//! A successful match is a tree of [`LexerElement`]s. Every `<type>` or
//! `<'property'>` the grammar went through becomes a [`LexerMatch`] holding the
//! elements it matched, and every consumed token becomes a [`LexerToken`] leaf.
//! Keywords keep the grammar keyword they matched; function names, closing
//! parentheses and separators carry no syntax.
//!
//! For `rgb(10%, 0%, 0%)` matched against `<color>` the tree reads:
//!
//! ```text
//! <color>
//! └── <rgb()>
//!     ├── "rgb("
//!     ├── <percentage> ── "10%"
//!     ├── ","
//!     ├── <percentage> ── "0%"
//!     ├── ","
//!     ├── <percentage> ── "0%"
//!     └── ")"
//! ```

use super::node::CssNode;

/// The syntax a [`LexerMatch`] was produced by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchSyntax {
    /// A property grammar, `<'name'>`.
    Property(String),
    /// A type, `<name>`.
    Type(String),
}

impl MatchSyntax {
    pub fn name(&self) -> &str {
        match self {
            MatchSyntax::Property(name) | MatchSyntax::Type(name) => name,
        }
    }
}

/// The grammar keyword a token matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeywordSyntax {
    pub name: String,
}

/// A leaf of the match tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerToken {
    /// Set when the token matched a grammar keyword.
    pub syntax: Option<KeywordSyntax>,
    /// The raw text consumed.
    pub token: String,
    pub node: CssNode,
}

impl LexerToken {
    /// The grammar keyword this token matched, if any.
    pub fn keyword(&self) -> Option<&str> {
        self.syntax.as_ref().map(|syntax| syntax.name.as_str())
    }
}

/// An internal node of the match tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerMatch {
    pub syntax: MatchSyntax,
    pub children: Vec<LexerElement>,
}

impl LexerMatch {
    /// Check if this is a `<type>` match for one of `names`.
    pub fn is_named_type(&self, names: &[&str]) -> bool {
        self.type_name().is_some_and(|name| names.contains(&name))
    }

    /// The type name, when this match came from a `<type>`.
    pub fn type_name(&self) -> Option<&str> {
        match &self.syntax {
            MatchSyntax::Type(name) => Some(name),
            MatchSyntax::Property(_) => None,
        }
    }

    pub fn first(&self) -> Option<&LexerElement> {
        self.children.first()
    }

    /// The first child, when it is a token.
    pub fn first_token(&self) -> Option<&LexerToken> {
        self.first().and_then(LexerElement::as_token)
    }
}

/// A node of the match tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerElement {
    Match(LexerMatch),
    Token(LexerToken),
}

impl LexerElement {
    pub fn as_match(&self) -> Option<&LexerMatch> {
        match self {
            LexerElement::Match(m) => Some(m),
            LexerElement::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&LexerToken> {
        match self {
            LexerElement::Token(token) => Some(token),
            LexerElement::Match(_) => None,
        }
    }

    /// Check if this is a `<type>` match for one of `names`.
    pub fn is_named_type(&self, names: &[&str]) -> bool {
        self.as_match().is_some_and(|m| m.is_named_type(names))
    }

    /// The name carried by this element's syntax: a type or property name for
    /// matches, the keyword for keyword tokens.
    pub fn syntax_name(&self) -> Option<&str> {
        match self {
            LexerElement::Match(m) => Some(m.syntax.name()),
            LexerElement::Token(token) => token.keyword(),
        }
    }
}

impl From<LexerMatch> for LexerElement {
    fn from(m: LexerMatch) -> Self {
        LexerElement::Match(m)
    }
}

impl From<LexerToken> for LexerElement {
    fn from(token: LexerToken) -> Self {
        LexerElement::Token(token)
    }
}
