//! Built-in grammar: native types and the standard definitions.

use super::named_colors::is_named_color;
use super::node::{Component, CssNode, NodeType};
use crate::types::{AngleUnit, LengthUnit};

/// Keywords every property accepts.
pub const CSS_WIDE_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert"];

/// Types matched directly against a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    Number,
    Integer,
    Percentage,
    Length,
    Angle,
    HexColor,
    NamedColor,
    Url,
}

impl NativeType {
    pub const ALL: [NativeType; 8] = [
        NativeType::Number,
        NativeType::Integer,
        NativeType::Percentage,
        NativeType::Length,
        NativeType::Angle,
        NativeType::HexColor,
        NativeType::NamedColor,
        NativeType::Url,
    ];

    /// The type name as written in value definitions.
    pub fn name(&self) -> &'static str {
        match self {
            NativeType::Number => "number",
            NativeType::Integer => "integer",
            NativeType::Percentage => "percentage",
            NativeType::Length => "length",
            NativeType::Angle => "angle",
            NativeType::HexColor => "hex-color",
            NativeType::NamedColor => "named-color",
            NativeType::Url => "url",
        }
    }

    /// Check if a single component is a value of this type.
    pub(crate) fn matches(&self, component: &Component) -> bool {
        match (self, component) {
            (NativeType::Url, Component::Function { name, arguments, .. }) => {
                name.value.eq_ignore_ascii_case("url")
                    && matches!(arguments.as_slice(), [Component::Leaf(node)] if node.kind == NodeType::String)
            }
            (_, Component::Leaf(node)) => self.matches_node(node),
            (_, Component::Function { .. }) => false,
        }
    }

    fn matches_node(&self, node: &CssNode) -> bool {
        match self {
            NativeType::Number => node.kind == NodeType::Number,
            NativeType::Integer => {
                node.kind == NodeType::Number && node.value.parse::<i64>().is_ok()
            }
            NativeType::Percentage => node.kind == NodeType::Percentage,
            NativeType::Length => match node.kind {
                NodeType::Dimension => node
                    .unit
                    .as_deref()
                    .is_some_and(|unit| LengthUnit::from_css(unit).is_some()),
                // Unitless zero is a length
                NodeType::Number => node.value.parse::<f64>().is_ok_and(|value| value == 0.0),
                _ => false,
            },
            NativeType::Angle => {
                node.kind == NodeType::Dimension
                    && node
                        .unit
                        .as_deref()
                        .is_some_and(|unit| AngleUnit::from_css(unit).is_some())
            }
            NativeType::HexColor => {
                node.kind == NodeType::Hash
                    && matches!(node.value.len(), 3 | 4 | 6 | 8)
                    && node.value.chars().all(|c| c.is_ascii_hexdigit())
            }
            NativeType::NamedColor => {
                node.kind == NodeType::Identifier && is_named_color(&node.value)
            }
            NativeType::Url => node.kind == NodeType::Url,
        }
    }
}

/// Standard type definitions, in dependency order.
pub const TYPES: &[(&str, &str)] = &[
    ("length-percentage", "<length> | <percentage>"),
    ("alpha-value", "<number> | <percentage>"),
    ("hue", "<number> | <angle>"),
    (
        "rgb()",
        "rgb( <percentage>{3} [ / <alpha-value> ]? ) | \
         rgb( <number>{3} [ / <alpha-value> ]? ) | \
         rgb( <percentage>#{3} [ , <alpha-value> ]? ) | \
         rgb( <number>#{3} [ , <alpha-value> ]? )",
    ),
    (
        "rgba()",
        "rgba( <percentage>{3} [ / <alpha-value> ]? ) | \
         rgba( <number>{3} [ / <alpha-value> ]? ) | \
         rgba( <percentage>#{3} [ , <alpha-value> ]? ) | \
         rgba( <number>#{3} [ , <alpha-value> ]? )",
    ),
    (
        "hsl()",
        "hsl( <hue> <percentage> <percentage> [ / <alpha-value> ]? ) | \
         hsl( <hue> , <percentage> , <percentage> [ , <alpha-value> ]? )",
    ),
    (
        "hsla()",
        "hsla( <hue> <percentage> <percentage> [ / <alpha-value> ]? ) | \
         hsla( <hue> , <percentage> , <percentage> [ , <alpha-value> ]? )",
    ),
    (
        "hwb()",
        "hwb( [ <hue> | none ] [ <percentage> | none ] [ <percentage> | none ] [ / [ <alpha-value> | none ] ]? )",
    ),
    (
        "lab()",
        "lab( [ <percentage> | <number> | none ]{3} [ / [ <alpha-value> | none ] ]? )",
    ),
    (
        "lch()",
        "lch( [ <percentage> | <number> | none ]{2} [ <hue> | none ] [ / [ <alpha-value> | none ] ]? )",
    ),
    (
        "oklab()",
        "oklab( [ <percentage> | <number> | none ]{3} [ / [ <alpha-value> | none ] ]? )",
    ),
    (
        "oklch()",
        "oklch( [ <percentage> | <number> | none ]{2} [ <hue> | none ] [ / [ <alpha-value> | none ] ]? )",
    ),
    (
        "color",
        "<rgb()> | <rgba()> | <hsl()> | <hsla()> | <hwb()> | <lab()> | <lch()> | <oklab()> | <oklch()> | \
         <hex-color> | <named-color> | currentcolor",
    ),
    ("line-width", "<length> | thin | medium | thick"),
    (
        "line-style",
        "none | hidden | dotted | dashed | solid | double | groove | ridge | inset | outset",
    ),
    ("shadow", "inset? && <length>{2,4} && <color>?"),
    (
        "absolute-size",
        "xx-small | x-small | small | medium | large | x-large | xx-large | xxx-large",
    ),
    ("relative-size", "larger | smaller"),
    ("font-weight-absolute", "normal | bold | <number>"),
];

const SIZE: &str = "auto | <length-percentage> | min-content | max-content | fit-content";
const MAX_SIZE: &str = "none | <length-percentage> | min-content | max-content | fit-content";
const INSET: &str = "auto | <length-percentage>";
const MARGIN_SIDE: &str = "<length-percentage> | auto";

/// Standard property definitions.
pub const PROPERTIES: &[(&str, &str)] = &[
    ("color", "<color>"),
    ("background-color", "<color>"),
    ("border-color", "<color>{1,4}"),
    ("outline-color", "<color>"),
    ("opacity", "<alpha-value>"),
    ("width", SIZE),
    ("height", SIZE),
    ("min-width", SIZE),
    ("min-height", SIZE),
    ("max-width", MAX_SIZE),
    ("max-height", MAX_SIZE),
    ("top", INSET),
    ("right", INSET),
    ("bottom", INSET),
    ("left", INSET),
    ("padding", "<length-percentage>{1,4}"),
    ("padding-top", "<length-percentage>"),
    ("padding-right", "<length-percentage>"),
    ("padding-bottom", "<length-percentage>"),
    ("padding-left", "<length-percentage>"),
    ("margin", "[ <length-percentage> | auto ]{1,4}"),
    ("margin-top", MARGIN_SIDE),
    ("margin-right", MARGIN_SIDE),
    ("margin-bottom", MARGIN_SIDE),
    ("margin-left", MARGIN_SIDE),
    (
        "border-radius",
        "<length-percentage>{1,4} [ / <length-percentage>{1,4} ]?",
    ),
    ("border-width", "<line-width>{1,4}"),
    ("border-style", "<line-style>{1,4}"),
    ("border", "<line-width> || <line-style> || <color>"),
    ("outline", "<line-width> || <line-style> || <color>"),
    ("box-shadow", "none | <shadow>#"),
    ("background-image", "[ none | <url> ]#"),
    (
        "font-size",
        "<absolute-size> | <relative-size> | <length-percentage>",
    ),
    ("font-weight", "<font-weight-absolute> | bolder | lighter"),
    (
        "display",
        "block | inline | inline-block | flex | inline-flex | grid | inline-grid | flow-root | \
         contents | table | list-item | none",
    ),
    ("position", "static | relative | absolute | fixed | sticky"),
    (
        "text-align",
        "start | end | left | right | center | justify | match-parent",
    ),
    (
        "flex-direction",
        "row | row-reverse | column | column-reverse",
    ),
    ("gap", "[ <length-percentage> | normal ]{1,2}"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::node::tokenize;

    fn first(value: &str) -> Component {
        tokenize(value).unwrap().remove(0)
    }

    #[test]
    fn length_accepts_unitless_zero() {
        assert!(NativeType::Length.matches(&first("12px")));
        assert!(NativeType::Length.matches(&first("0")));
        assert!(NativeType::Length.matches(&first("0.0")));
        assert!(!NativeType::Length.matches(&first("3")));
        assert!(!NativeType::Length.matches(&first("12deg")));
    }

    #[test]
    fn hex_colors_need_valid_digits() {
        assert!(NativeType::HexColor.matches(&first("#fff")));
        assert!(NativeType::HexColor.matches(&first("#00ff0080")));
        assert!(!NativeType::HexColor.matches(&first("#ff")));
        assert!(!NativeType::HexColor.matches(&first("#ggg")));
    }

    #[test]
    fn urls() {
        assert!(NativeType::Url.matches(&first("url(a.png)")));
        assert!(NativeType::Url.matches(&first("url(\"a.png\")")));
        assert!(!NativeType::Url.matches(&first("image(\"a.png\")")));
    }

    #[test]
    fn integers_and_angles() {
        assert!(NativeType::Integer.matches(&first("400")));
        assert!(!NativeType::Integer.matches(&first("1.5")));
        assert!(NativeType::Angle.matches(&first("0.25turn")));
        assert!(!NativeType::Angle.matches(&first("25%")));
    }
}
