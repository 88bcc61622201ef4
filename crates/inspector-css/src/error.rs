//! Error types for grammar configuration.

/// Result type alias for lexer configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a [`Lexer`](crate::lexer::Lexer).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value definition could not be compiled.
    #[error("Invalid syntax definition '{definition}': {message}")]
    InvalidSyntax { definition: String, message: String },

    /// A definition referenced a type the lexer does not know.
    #[error("Unknown type '<{0}>'")]
    UnknownType(String),

    /// A definition referenced a property the lexer does not know.
    #[error("Unknown property '<'{0}'>'")]
    UnknownProperty(String),
}

impl Error {
    /// Create a syntax definition error.
    pub fn invalid_syntax(definition: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            definition: definition.into(),
            message: message.into(),
        }
    }
}
