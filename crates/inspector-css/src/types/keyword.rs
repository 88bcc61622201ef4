//! Keyword values.

/// A single keyword value.
///
/// Unrestricted keywords carry the keyword text as a `String`. Keywords parsed
/// against an allow-list carry the matching allow-list entry instead, so a
/// caller can use its own enum or `&'static str` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CssKeyword<T = String> {
    pub value: T,
}

impl<T> CssKeyword<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: AsRef<str>> CssKeyword<T> {
    pub fn as_str(&self) -> &str {
        self.value.as_ref()
    }
}
