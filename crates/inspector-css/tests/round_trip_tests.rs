//! Parse, print and re-parse tests.

use inspector_css::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_color_round_trip() {
    init_tracing();

    for value in [
        "rgb(10%, 20%, 30%)",
        "rgb(10, 20, 30)",
        "rgba(0,0,0,50%)",
        "rgba(0, 0, 0, 0.5)",
        "rgb(255 0 0 / 25%)",
        "rgba(0, 0, 0, 100%)",
        "hsl(200 50% 50%)",
        "hsla(90deg, 10%, 20%, 0.4)",
        "#AbC",
        "#00ff0080",
        "teal",
    ] {
        let parsed = parse_color_property("color", value)
            .unwrap_or_else(|e| panic!("failed to parse {}: {}", value, e));
        let printed = parsed.to_css_string();

        assert!(
            type_matches("color", &printed).is_ok(),
            "{} printed as invalid color {}",
            value,
            printed
        );
        let reparsed = parse_color_property("color", &printed).unwrap();
        assert_eq!(parsed, reparsed, "{} -> {}", value, printed);
    }
}

#[test]
fn test_color_flags_survive() {
    let printed = parse_color_property("color", "rgba(10%, 20%, 30%, 50%)")
        .unwrap()
        .to_css_string();
    assert_eq!(printed, "rgba(10%, 20%, 30%, 50%)");

    let CssColor::Rgb(rgb) = parse_color_property("color", &printed).unwrap() else {
        panic!("expected an rgb() color");
    };
    assert!(rgb.percentages_used);
    assert!(rgb.percentage_alpha);
    assert_eq!(rgb.alpha, 0.5);
}

#[test]
fn test_colors_resolve_to_rgba() {
    let rgb = parse_color_property("color", "rgb(100%, 0%, 0%)").unwrap();
    assert_eq!(rgb.to_rgba8(), Some([255, 0, 0, 255]));

    let hsl = parse_color_property("color", "hsl(120, 100%, 50%)").unwrap();
    assert_eq!(hsl.to_rgba8(), Some([0, 255, 0, 255]));
}

#[test]
fn test_length_round_trip() {
    init_tracing();

    for value in ["1px", "1px 2.5em", "1px 2.5em 0", "1px 2.5em 0 10%"] {
        let padding = parse_padding(value).unwrap();
        assert_eq!(padding.to_css_string(), value);
    }

    let margin = parse_margin("0 auto").unwrap();
    assert_eq!(margin.to_css_string(), "0 auto");

    let width = parse_size_property("width", "33.333333%").unwrap();
    assert_eq!(width.to_css_string(), "33.333333%");
    assert_eq!(parse_size_property("width", &width.to_css_string()), Ok(width));
}

#[test]
fn test_overflowing_lengths_are_rejected() {
    init_tracing();

    // The grammar accepts the value but it has no finite length
    assert!(type_matches("length", "1e400px").is_ok());
    assert!(parse_padding("1e400px").is_err());
    assert!(matches!(
        parse_opacity("1e400"),
        Err(ParseError::Description(_))
    ));

    let large = parse_padding("1e30px").unwrap().to_css_string();
    assert!(type_matches("length", &large).is_ok(), "{}", large);
}

#[test]
fn test_deeply_nested_functions_are_rejected() {
    let value = format!("{}{}", "a(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(
        property_matches("width", value.as_str(), None),
        Err(ParseError::Grammar(_))
    ));
}

#[test]
fn test_border_round_trip() {
    for value in ["1px solid red", "dashed", "thick rgb(0, 0, 255) double"] {
        let border = parse_border("border", value).unwrap();
        assert_eq!(border.to_css_string(), value);
    }
}

#[test]
fn test_box_shadow_round_trip() {
    init_tracing();

    let value = "1px 1px red, /* inset 0 0 4px 2px #000 */ 2px 2px";
    let shadows = parse_box_shadow(value).unwrap();
    assert_eq!(shadows.len(), 3);
    assert!(shadows[1].value.inset);
    assert!(!shadows[1].enabled);

    let printed = layers_to_css_string(&shadows);
    assert_eq!(printed, value);
    assert_eq!(parse_box_shadow(&printed).unwrap(), shadows);
}

#[test]
fn test_unsupported_is_distinct() {
    let unsupported = parse_color_property("color", "hwb(120 10% 10%)").unwrap_err();
    assert!(unsupported.is_unsupported());

    let invalid = parse_color_property("color", "rgb(1, 2)").unwrap_err();
    assert!(!invalid.is_unsupported());
    assert!(matches!(invalid, ParseError::Grammar(_)));
}

#[test]
fn test_css_wide_keywords_match_every_property() {
    for property in ["color", "padding", "box-shadow", "display"] {
        let children = property_matches(property, "initial", None).unwrap();
        assert_eq!(children.len(), 1, "{}", property);
    }
}
