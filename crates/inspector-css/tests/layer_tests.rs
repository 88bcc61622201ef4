//! Layer splitting tests.

use inspector_css::prelude::*;

fn enabled_flags(layers: &[PreparsedLayer]) -> Vec<bool> {
    layers.iter().map(|layer| layer.enabled).collect()
}

#[test]
fn test_enabled_layers() {
    let layers = traverse_for_preparsed_layers("url(a.png), url(b.png)");
    assert_eq!(
        layers,
        vec![
            PreparsedLayer::new("url(a.png)", true),
            PreparsedLayer::new("url(b.png)", true),
        ]
    );
}

#[test]
fn test_commented_layer_between_enabled_layers() {
    let layers = traverse_for_preparsed_layers("url(a.png) /* off */, url(b.png)");
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[0].value, "url(a.png)");
    assert_eq!(layers[1].value, "off");
    assert_eq!(layers[2].value, "url(b.png)");
    assert_eq!(enabled_flags(&layers), vec![true, false, true]);
}

#[test]
fn test_only_comments() {
    assert!(css_value_only_contains_comments("/* nothing here */"));
    assert!(css_value_only_contains_comments("/* a */ /* b */"));
    assert!(!css_value_only_contains_comments("red, /* note */"));
}

#[test]
fn test_layers_through_grammar() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let images = parse_layers("url(a.png), /* url(b.png) */ none", |layer| {
        property_matches("background-image", layer, None).map(|_| layer.to_string())
    })
    .unwrap();

    let values: Vec<_> = images
        .iter()
        .map(|layer| (layer.value.as_str(), layer.enabled))
        .collect();
    assert_eq!(
        values,
        vec![("url(a.png)", true), ("url(b.png)", false), ("none", true)]
    );
}

#[test]
fn test_failing_disabled_layer_is_dropped() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let shadows = parse_box_shadow("1px 1px red, /* a note */").unwrap();
    assert_eq!(shadows.len(), 1);
    assert!(shadows[0].enabled);

    assert!(parse_box_shadow("1px 1px red, bogus").is_err());
}
