//! Parsed layers of comma-separated values.

/// One layer of a multi-value property, parsed.
///
/// Disabled layers are kept so that printing the value writes them back as
/// comments.
#[derive(Debug, Clone, PartialEq)]
pub struct CssLayer<T> {
    pub value: T,
    pub enabled: bool,
}

impl<T> CssLayer<T> {
    pub fn new(value: T, enabled: bool) -> Self {
        Self { value, enabled }
    }

    /// Transform the layer value, keeping the enabled state.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CssLayer<U> {
        CssLayer {
            value: f(self.value),
            enabled: self.enabled,
        }
    }
}
