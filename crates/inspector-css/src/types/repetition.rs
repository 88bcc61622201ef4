//! Results of repeated sub-grammars.

/// A `{min,max}` repetition, in source order.
///
/// `padding: 4px 8px` parses to two values; the order is significant because
/// printing must reproduce it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCurlyBrace<T> {
    pub values: Vec<T>,
}

impl<T> ParsedCurlyBrace<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

/// A `||` repetition: each component appears at most once, in any order.
/// Components stay in the order they were written.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDoubleBar<T> {
    pub values: Vec<T>,
}

impl<T> ParsedDoubleBar<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}
