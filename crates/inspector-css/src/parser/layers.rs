//! Splitting comma-separated values into layers.
//!
//! Multi-value properties such as `background-image` or `box-shadow` can have
//! individual layers turned off by wrapping them in a comment:
//!
//! ```text
//! url(a.png) /* url(b.png) */, url(c.png)
//! ```
//!
//! The grammar drops comments, so layers are found with a small scanner
//! before any matching happens.

/// One layer of a comma-separated value, before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparsedLayer {
    /// The trimmed layer text.
    pub value: String,
    /// `false` when the layer was inside a comment.
    pub enabled: bool,
}

impl PreparsedLayer {
    pub fn new(value: impl Into<String>, enabled: bool) -> Self {
        Self {
            value: value.into(),
            enabled,
        }
    }
}

struct LayerScanner {
    layers: Vec<PreparsedLayer>,
    current: String,
    in_comment: bool,
}

impl LayerScanner {
    fn new() -> Self {
        Self {
            layers: vec![],
            current: String::new(),
            in_comment: false,
        }
    }

    /// Push the current text as a layer. Empty text is skipped unless `keep_empty`.
    fn flush(&mut self, keep_empty: bool) {
        let value = self.current.trim();
        if keep_empty || !value.is_empty() {
            self.layers
                .push(PreparsedLayer::new(value, !self.in_comment));
        }
        self.current.clear();
    }

    fn scan(mut self, value: &str) -> Vec<PreparsedLayer> {
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.flush(false);
                    self.in_comment = true;
                }
                '*' if self.in_comment && chars.peek() == Some(&'/') => {
                    chars.next();
                    // A closed comment is always a layer, even when empty
                    self.flush(true);
                    self.in_comment = false;
                }
                ',' if self.in_comment => {}
                ',' => self.flush(false),
                c => self.current.push(c),
            }
        }

        self.flush(false);
        self.layers
    }
}

/// Split a value into its comma-separated layers.
///
/// Layers wrapped in `/* */` are returned disabled. Commas inside a comment
/// do not separate layers.
///
/// # Example
///
/// ```
/// use inspector_css::parser::{traverse_for_preparsed_layers, PreparsedLayer};
///
/// let layers = traverse_for_preparsed_layers("url(a.png) /* off */, url(b.png)");
/// assert_eq!(
///     layers,
///     vec![
///         PreparsedLayer::new("url(a.png)", true),
///         PreparsedLayer::new("off", false),
///         PreparsedLayer::new("url(b.png)", true),
///     ]
/// );
/// ```
pub fn traverse_for_preparsed_layers(value: &str) -> Vec<PreparsedLayer> {
    LayerScanner::new().scan(value)
}

/// Check if a value has no enabled layers.
pub fn css_value_only_contains_comments(value: &str) -> bool {
    traverse_for_preparsed_layers(value)
        .iter()
        .all(|layer| !layer.enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers(value: &str) -> Vec<(String, bool)> {
        traverse_for_preparsed_layers(value)
            .into_iter()
            .map(|layer| (layer.value, layer.enabled))
            .collect()
    }

    #[test]
    fn split_enabled_layers() {
        assert_eq!(
            layers("url(a.png), url(b.png)"),
            vec![
                ("url(a.png)".to_string(), true),
                ("url(b.png)".to_string(), true)
            ]
        );
    }

    #[test]
    fn split_on_comment_boundaries() {
        assert_eq!(
            layers("url(a.png) /* off */, url(b.png)"),
            vec![
                ("url(a.png)".to_string(), true),
                ("off".to_string(), false),
                ("url(b.png)".to_string(), true)
            ]
        );
    }

    #[test]
    fn commas_inside_comments_are_kept_together() {
        assert_eq!(
            layers("/* 1px 1px red, 2px 2px blue */"),
            vec![("1px 1px red 2px 2px blue".to_string(), false)]
        );
    }

    #[test]
    fn lone_slashes_and_stars_are_text() {
        assert_eq!(
            layers("a / b * c */ d"),
            vec![("a / b * c */ d".to_string(), true)]
        );
    }

    #[test]
    fn empty_comment_is_a_layer() {
        assert_eq!(layers("red /**/"), vec![
            ("red".to_string(), true),
            (String::new(), false)
        ]);
    }

    #[test]
    fn unterminated_comment_is_disabled() {
        assert_eq!(
            layers("red, /* blue"),
            vec![("red".to_string(), true), ("blue".to_string(), false)]
        );
    }

    #[test]
    fn only_comments() {
        assert!(css_value_only_contains_comments("/* nothing here */"));
        assert!(css_value_only_contains_comments(""));
        assert!(!css_value_only_contains_comments("red, /* note */"));
        assert!(!css_value_only_contains_comments("red"));
    }
}
