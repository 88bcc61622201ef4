//! Value parsing errors.

/// Result type alias for value parsers.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Why a value could not be turned into a typed CSS value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value does not conform to the grammar it was matched against.
    #[error("{0}")]
    Grammar(String),

    /// The grammar accepted the value but its match did not have the shape a
    /// parser expects.
    #[error("{0}")]
    Description(String),

    /// The match did not have an element at the expected index.
    #[error("Array index {0} not present")]
    IndexNotPresent(usize),

    /// The value is well formed but its content is not usable.
    #[error("{0}")]
    OutOfRange(String),

    /// Valid CSS that the inspector does not know how to edit.
    #[error("{0}")]
    Unsupported(String),
}

impl ParseError {
    /// Create a grammar rejection error.
    pub fn grammar(message: impl Into<String>) -> Self {
        Self::Grammar(message.into())
    }

    /// Create a shape-mismatch error with a description.
    pub fn description(message: impl Into<String>) -> Self {
        Self::Description(message.into())
    }

    /// Create a missing-index error.
    pub fn index_not_present(index: usize) -> Self {
        Self::IndexNotPresent(index)
    }

    /// Create a semantic-range error.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    /// Create an unsupported-value error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    /// Check if the value was valid CSS the inspector declines to edit.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ParseError::Unsupported(_))
    }
}
