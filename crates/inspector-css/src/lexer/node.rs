//! Value tokenization using the `cssparser` crate.
//!
//! A raw property value is read into a flat list of [`Component`]s. Functions
//! keep their arguments nested; whitespace and comments are dropped. Every
//! leaf carries a [`CssNode`] with its source span so that match results can
//! point back at the exact text they consumed.

use crate::parser::{ParseError, ParseResult};
use cssparser::{ParseError as CssParseError, ParseErrorKind, Parser, ParserInput, Token};

/// The type tag of a low-level syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Number,
    Dimension,
    Percentage,
    Identifier,
    Hash,
    String,
    Url,
    Function,
    Operator,
}

/// A position in the source value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourcePosition {
    /// Byte offset into the value.
    pub offset: usize,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

/// The span of source text a node was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

/// A low-level syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssNode {
    pub kind: NodeType,
    /// Literal numeric text for numbers, dimensions and percentages; the name
    /// for identifiers and functions; the content for hashes, strings and
    /// urls; the character for operators.
    pub value: String,
    /// The unit of a dimension.
    pub unit: Option<String>,
    pub loc: SourceSpan,
}

impl CssNode {
    fn new(kind: NodeType, value: impl Into<String>, loc: SourceSpan) -> Self {
        Self {
            kind,
            value: value.into(),
            unit: None,
            loc,
        }
    }
}

/// A component value of a tokenized property value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Component {
    Leaf(CssNode),
    Function {
        name: CssNode,
        arguments: Vec<Component>,
        close: CssNode,
    },
}

impl Component {
    pub(crate) fn leaf(&self) -> Option<&CssNode> {
        match self {
            Component::Leaf(node) => Some(node),
            Component::Function { .. } => None,
        }
    }

    /// Check if this is the operator `op`.
    pub(crate) fn is_operator(&self, op: char) -> bool {
        self.leaf().is_some_and(|node| {
            node.kind == NodeType::Operator && node.value.chars().eq(std::iter::once(op))
        })
    }

    pub(crate) fn span(&self) -> SourceSpan {
        match self {
            Component::Leaf(node) => node.loc,
            Component::Function { name, close, .. } => SourceSpan {
                start: name.loc.start,
                end: close.loc.end,
            },
        }
    }
}

/// Deepest function nesting a value may have.
const MAX_NESTING: usize = 64;

/// Tokenize a property value.
pub(crate) fn tokenize(value: &str) -> ParseResult<Vec<Component>> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    read_components(&mut parser, 0).map_err(|e| {
        let message = match e.kind {
            ParseErrorKind::Custom(message) => message,
            ParseErrorKind::Basic(kind) => format!("{:?}", kind),
        };
        ParseError::grammar(format!(
            "{} at line {}, column {}",
            message,
            e.location.line + 1,
            e.location.column
        ))
    })
}

fn location(parser: &Parser<'_, '_>) -> SourcePosition {
    let loc = parser.current_source_location();
    SourcePosition {
        offset: parser.position().byte_index(),
        line: loc.line + 1,
        column: loc.column,
    }
}

/// Read component values until the parser (or the current nested block) is
/// exhausted. `depth` is the number of enclosing functions.
fn read_components<'i>(
    parser: &mut Parser<'i, '_>,
    depth: usize,
) -> std::result::Result<Vec<Component>, CssParseError<'i, String>> {
    let mut components = vec![];

    loop {
        // Skip whitespace and comments
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let start = location(parser);
        let start_position = parser.position();
        let token = parser.next()?.clone();
        let literal = parser.slice_from(start_position);
        let loc = SourceSpan {
            start,
            end: location(parser),
        };

        let component = match token {
            Token::Number { .. } => Component::Leaf(CssNode::new(NodeType::Number, literal, loc)),
            Token::Percentage { .. } => Component::Leaf(CssNode::new(
                NodeType::Percentage,
                literal.strip_suffix('%').unwrap_or(literal),
                loc,
            )),
            Token::Dimension { value, unit, .. } => {
                let number = match literal.strip_suffix(&*unit) {
                    Some(number) => number.to_string(),
                    None => value.to_string(),
                };
                let mut node = CssNode::new(NodeType::Dimension, number, loc);
                node.unit = Some(String::from(&*unit));
                Component::Leaf(node)
            }
            Token::Ident(name) => Component::Leaf(CssNode::new(NodeType::Identifier, &*name, loc)),
            Token::Hash(hash) | Token::IDHash(hash) => {
                Component::Leaf(CssNode::new(NodeType::Hash, &*hash, loc))
            }
            Token::QuotedString(text) => {
                Component::Leaf(CssNode::new(NodeType::String, &*text, loc))
            }
            Token::UnquotedUrl(url) => Component::Leaf(CssNode::new(NodeType::Url, &*url, loc)),
            Token::Delim(c) => Component::Leaf(CssNode::new(NodeType::Operator, c.to_string(), loc)),
            Token::Comma => Component::Leaf(CssNode::new(NodeType::Operator, ",", loc)),
            Token::Colon => Component::Leaf(CssNode::new(NodeType::Operator, ":", loc)),
            Token::Function(name) => {
                if depth >= MAX_NESTING {
                    return Err(parser.new_custom_error(format!(
                        "Functions nested deeper than {} levels",
                        MAX_NESTING
                    )));
                }
                let name = CssNode::new(NodeType::Function, &*name, loc);
                let arguments =
                    parser.parse_nested_block(|block| read_components(block, depth + 1))?;
                let end = location(parser);
                let close_start = SourcePosition {
                    offset: end.offset.saturating_sub(1),
                    line: end.line,
                    column: end.column.saturating_sub(1),
                };
                let close = CssNode::new(
                    NodeType::Operator,
                    ")",
                    SourceSpan {
                        start: close_start,
                        end,
                    },
                );
                Component::Function {
                    name,
                    arguments,
                    close,
                }
            }
            Token::ParenthesisBlock | Token::SquareBracketBlock | Token::CurlyBracketBlock => {
                return Err(parser.new_custom_error(format!("Unexpected block '{}'", literal)));
            }
            other => {
                return Err(parser.new_custom_error(format!("Unexpected token {:?}", other)));
            }
        };
        components.push(component);
    }

    Ok(components)
}
