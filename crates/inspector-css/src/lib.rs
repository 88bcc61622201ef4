//! CSS value parsing and serialization for the design inspector.
//!
//! This crate turns raw property values into typed values that inspector
//! controls can edit, and writes them back as CSS text:
//!
//! - **Lexer**: matches values against CSS value grammars ([`lexer`])
//! - **Parsers**: turn match trees into typed values ([`parser`])
//! - **Properties**: ready-made parsers per property ([`properties`])
//! - **Printer**: serializes typed values with [`cssparser::ToCss`] ([`printer`])
//!
//! Authoring details survive a round trip: percentage channels and alpha
//! values stay percentages, and layers disabled with a comment stay disabled.
//!
//! # Example
//!
//! ```
//! use inspector_css::prelude::*;
//!
//! let color = parse_color_property("color", "rgba(255, 0, 0, 50%)").unwrap();
//! let CssColor::Rgb(rgb) = &color else { panic!("expected rgb()") };
//! assert_eq!(rgb.alpha, 0.5);
//! assert!(rgb.percentage_alpha);
//! assert_eq!(color.to_css_string(), "rgba(255, 0, 0, 50%)");
//! ```

pub mod lexer;
pub mod parser;
pub mod printer;
pub mod properties;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::lexer::{Lexer, LexerElement, LexerMatch, LexerToken, property_matches, type_matches};
    pub use crate::parser::{
        ParseError, ParseResult, PreparsedLayer, css_value_only_contains_comments,
        parse_lexed_color, traverse_for_preparsed_layers,
    };
    pub use crate::printer::layers_to_css_string;
    pub use crate::properties::{
        BorderComponent, CssBoxShadow, LengthPercentageOrKeyword, LineWidth, parse_border,
        parse_border_radius, parse_box_shadow, parse_color_property, parse_keyword_property,
        parse_layers, parse_margin, parse_opacity, parse_padding, parse_size_property,
    };
    pub use crate::types::{
        AngleUnit, CssColor, CssColorHex, CssColorHsl, CssColorKeyword, CssColorRgb, CssKeyword,
        CssLayer, CssNumber, CssNumberUnit, LengthUnit, ParsedCurlyBrace, ParsedDoubleBar,
    };
    pub use cssparser::ToCss;
}
