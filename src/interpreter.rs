/// The evaluator module gives each grammar rule its numeric meaning.
///
/// The evaluator defines the arithmetic operators and combines sub-results
/// using checked 64-bit integer arithmetic. It is kept separate from the
/// parser because its decisions, truncating division, the division-by-zero
/// check, and the overflow policy, are independent of how the input is
/// parsed.
///
/// # Responsibilities
/// - Defines the [`evaluator::BinaryOperator`] type shared with the parser.
/// - Combines operands with checked addition, subtraction, multiplication,
///   division, and negation.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes a line of input for further parsing.
///
/// The lexer (tokenizer) owns a character cursor over the raw input line and
/// produces a stream of tokens on demand, one per call. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping whitespace.
/// - Accumulates multi-digit integer literals with checked arithmetic.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module consumes tokens and evaluates on the fly.
///
/// The parser processes the token stream produced by the lexer with a single
/// token of lookahead, checking the input against the expression grammar and
/// folding each operation into a running result as soon as it is parsed. No
/// syntax tree is materialized; the call stack of the mutually recursive
/// rule methods mirrors the grammar nesting exactly.
///
/// # Responsibilities
/// - Validates the token sequence against the grammar, reporting which kind
///   was expected and which was found on a mismatch.
/// - Enforces operator precedence and left-associativity.
/// - Produces the final integer result for the line.
pub mod parser;
