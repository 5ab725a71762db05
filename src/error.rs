/// Lexical errors.
///
/// Defines all error types that can occur while scanning raw input into
/// tokens. Lexical errors cover unrecognized characters and integer literals
/// that exceed the representable range.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while consuming the token sequence.
/// Parse errors include mismatched tokens, premature end of input, and extra
/// tokens left over after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while combining numeric
/// results, such as division by zero or integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure the pipeline can surface for an input line.
///
/// Each variant wraps the error type of one pipeline stage, so a single
/// `Result<i64, Error>` can carry a failure from any of them. The `From`
/// impls let `?` thread stage-specific errors through without manual
/// conversion.
pub enum Error {
    /// The lexer rejected the raw input.
    Lex(LexError),
    /// The parser rejected the token sequence.
    Parse(ParseError),
    /// Evaluation of an otherwise well-formed expression failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
