//! Value parsers.
//!
//! Parsers take lexer matches (see [`crate::lexer`]) and produce the typed
//! values in [`crate::types`]. Every parser returns a [`ParseResult`]; no
//! parser panics on bad input.

mod color;
mod combinators;
mod error;
mod layers;
mod primitives;

pub use color::{parse_color, parse_hsl_color, parse_lexed_color, parse_rgb_color};
pub use combinators::{
    ElementParser, parse_alternative, parse_curly_braces, parse_double_bar, parse_whole_value,
};
pub use error::{ParseError, ParseResult};
pub use layers::{PreparsedLayer, css_value_only_contains_comments, traverse_for_preparsed_layers};
pub use primitives::{
    parse_alpha_value, parse_angle, parse_css_keyword, parse_css_valid_keyword, parse_hue,
    parse_length, parse_length_percentage, parse_number, parse_percentage,
};
