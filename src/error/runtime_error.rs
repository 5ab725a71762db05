#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while combining numeric results.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// An arithmetic operation overflowed the 64-bit integer range.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Arithmetic overflow."),
        }
    }
}

impl std::error::Error for RuntimeError {}
