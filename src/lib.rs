//! # calcr
//!
//! calcr is an interactive interpreter for integer arithmetic expressions.
//! It scans, parses, and evaluates one line at a time, supporting addition,
//! subtraction, multiplication, truncating division, unary sign, and
//! parenthesized sub-expressions with the usual precedence rules.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{lexer::Lexer, parser::Parser},
};

/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// line of input. It standardizes error reporting and carries structured
/// information about failures: the offending character for lexical errors,
/// and the expected and found token kinds for parse errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps them in a single [`error::Error`] type for the public API.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, the parser, and the evaluator to
/// provide a complete pipeline from a raw line of text to an integer result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one line of input and returns the resulting integer.
///
/// This is the public entry point of the pipeline. Each call instantiates a
/// fresh lexer bound to `line` and a fresh parser on top of it, so repeated
/// calls with the same line always yield identical results; no state
/// persists between lines.
///
/// # Errors
/// Returns an [`Error`] when the line is rejected by any stage: an
/// unrecognized character, a token sequence that does not match the grammar,
/// or an arithmetic failure such as division by zero.
///
/// # Examples
/// ```
/// use calcr::evaluate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
///
/// // Parentheses override precedence.
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20);
///
/// // Division by zero is reported, not computed.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(line: &str) -> Result<i64, Error> {
    let lexer = Lexer::new(line);
    let mut parser = Parser::new(lexer)?;

    parser.parse()
}
