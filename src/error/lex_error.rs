#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning a line of input.
pub enum LexError {
    /// Encountered a character that matches no recognized token shape.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character within the input line.
        position:  usize,
    },
    /// An integer literal was too large to be represented.
    LiteralTooLarge {
        /// Byte offset of the first digit of the literal.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f,
                       "Error at position {position}: Unrecognized character '{character}'.")
            },

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Integer literal is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
