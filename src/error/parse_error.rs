use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// The current token does not match what the grammar requires here.
    UnexpectedToken {
        /// The kind of token the grammar rule required.
        expected: TokenKind,
        /// The kind of token actually found.
        found:    TokenKind,
    },
    /// Reached the end of input while a grammar rule still needed a token.
    UnexpectedEndOfInput {
        /// The kind of token the grammar rule required.
        expected: TokenKind,
    },
    /// Found extra tokens after a complete expression.
    TrailingInput {
        /// The first unconsumed token.
        found: TokenKind,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "Expected {expected} but found {found}.")
            },

            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Unexpected end of input while looking for {expected}.")
            },

            Self::TrailingInput { found } => {
                write!(f, "Extra input after expression: found {found}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
