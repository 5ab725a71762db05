use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::{self, BinaryOperator},
        lexer::{Lexer, Token, TokenKind},
    },
};

/// Result type used by the parser.
///
/// Parsing functions return either a value of type `T` or an [`Error`] from
/// any pipeline stage: the lexer runs underneath the parser, and evaluation
/// is folded into the recursive-descent walk itself.
pub type ParseResult<T> = Result<T, Error>;

/// A recursive-descent parser that evaluates as it goes.
///
/// The parser pulls tokens lazily from a [`Lexer`] and keeps exactly one
/// token of lookahead, the `current` token. No syntax tree is built: each
/// grammar rule folds its sub-results into a running value immediately,
/// which makes every operator chain left-associative without further
/// bookkeeping. The grammar, from lowest to highest precedence:
///
/// ```text
///     expression := term ( ("+" | "-") term )*
///     term       := factor ( ("*" | "/") factor )*
///     factor     := ("+" | "-") factor
///                 | INTEGER
///                 | "(" expression ")"
/// ```
///
/// At any stable point, `current` is either [`Token::Eof`] or a token that
/// has not yet been incorporated into a result.
pub struct Parser<'a> {
    /// Token source for the line being parsed.
    lexer:   Lexer<'a>,
    /// The single token of lookahead.
    current: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `lexer` and fetches the first token to
    /// initialize the lookahead.
    ///
    /// # Errors
    /// Propagates a [`crate::error::LexError`] if the line's first token is
    /// already malformed.
    pub fn new(mut lexer: Lexer<'a>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses and evaluates one complete expression spanning the whole line.
    ///
    /// This is the top-level entry point. After the expression, the
    /// lookahead must be [`Token::Eof`]; anything left over (such as an
    /// unmatched `)`) is an error rather than silently ignored.
    ///
    /// # Errors
    /// Any [`Error`] raised while scanning, parsing, or combining results,
    /// plus [`ParseError::TrailingInput`] for unconsumed tokens.
    ///
    /// # Example
    /// ```
    /// use calcr::interpreter::{lexer::Lexer, parser::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("2 + 3 * 4")).unwrap();
    /// assert_eq!(parser.parse().unwrap(), 14);
    /// ```
    pub fn parse(&mut self) -> ParseResult<i64> {
        let result = self.expression()?;

        if self.current != Token::Eof {
            return Err(ParseError::TrailingInput { found: self.current.kind() }.into());
        }

        Ok(result)
    }

    /// Parses an addition and subtraction chain.
    ///
    /// Grammar: `expression := term ( ("+" | "-") term )*`
    fn expression(&mut self) -> ParseResult<i64> {
        let mut result = self.term()?;

        while let Some(op) = token_to_binary_operator(&self.current)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            self.consume(self.current.kind())?;
            let right = self.term()?;
            result = evaluator::eval_binary_op(op, result, right)?;
        }

        Ok(result)
    }

    /// Parses a multiplication and division chain.
    ///
    /// Grammar: `term := factor ( ("*" | "/") factor )*`
    fn term(&mut self) -> ParseResult<i64> {
        let mut result = self.factor()?;

        while let Some(op) = token_to_binary_operator(&self.current)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            self.consume(self.current.kind())?;
            let right = self.factor()?;
            result = evaluator::eval_binary_op(op, result, right)?;
        }

        Ok(result)
    }

    /// Parses a factor: a signed factor, an integer literal, or a
    /// parenthesized sub-expression.
    ///
    /// Grammar: `factor := ("+" | "-") factor | INTEGER | "(" expression ")"`
    ///
    /// The parenthesized form is the grammar's sole recursion point back
    /// into [`Parser::expression`], so nesting depth is bounded only by the
    /// call stack.
    fn factor(&mut self) -> ParseResult<i64> {
        match self.current {
            Token::Plus => {
                self.consume(TokenKind::Plus)?;
                self.factor()
            },

            Token::Minus => {
                self.consume(TokenKind::Minus)?;
                let value = self.factor()?;
                Ok(evaluator::eval_negate(value)?)
            },

            Token::LParen => {
                self.consume(TokenKind::LParen)?;
                let value = self.expression()?;
                self.consume(TokenKind::RParen)?;
                Ok(value)
            },

            Token::Integer(value) => {
                self.consume(TokenKind::Integer)?;
                Ok(value)
            },

            _ => Err(self.unexpected(TokenKind::Integer)),
        }
    }

    /// Checks the lookahead against `expected` and, on a match, refills it
    /// with the lexer's next token.
    fn consume(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.current.kind() == expected {
            self.current = self.lexer.next_token()?;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Builds the error for a lookahead that does not satisfy the grammar,
    /// distinguishing a wrong token from a missing one.
    fn unexpected(&self, expected: TokenKind) -> Error {
        if self.current == Token::Eof {
            ParseError::UnexpectedEndOfInput { expected }.into()
        } else {
            ParseError::UnexpectedToken { expected,
                                          found: self.current.kind() }.into()
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the four
/// infix operators, and `None` for all other tokens.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
