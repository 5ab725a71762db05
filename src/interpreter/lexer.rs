use tracing::trace;

use crate::error::LexError;

/// Result type used by the lexer.
///
/// Lexing functions return either a value of type `T` or a [`LexError`]
/// describing why the input line was rejected.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Integer(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Marks the end of the input line; no more tokens follow.
    Eof,
}

impl Token {
    /// Returns the payload-free kind of this token.
    ///
    /// The kind is what the parser compares against the grammar; the payload
    /// of a [`Token::Integer`] is only read once the kind has matched.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Eof => TokenKind::Eof,
        }
    }
}

/// The kind of a [`Token`], without any literal payload.
///
/// Used by the parser to state which token a grammar rule requires, and in
/// parse errors to report expected and found kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of the input line.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "an integer"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Scans one line of input into tokens, one token at a time.
///
/// The lexer owns a cursor over the line: a byte offset and the character at
/// that offset (`None` once the line is exhausted). Tokens are produced
/// lazily on demand via [`Lexer::next_token`]; the sequence is finite,
/// deterministic for a given line, and terminated by [`Token::Eof`].
pub struct Lexer<'a> {
    /// The input line being scanned, e.g. `"3+5"`.
    text:    &'a str,
    /// Byte offset of the cursor within `text`.
    pos:     usize,
    /// The character at `pos`, or `None` past the end of the line.
    current: Option<char>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with its cursor at the start of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text,
               pos: 0,
               current: text.chars().next() }
    }

    /// Produces the next token from the input line.
    ///
    /// Whitespace between tokens is skipped and never produces a token. Once
    /// the line is exhausted this returns [`Token::Eof`]; calling it again
    /// keeps returning [`Token::Eof`].
    ///
    /// Every produced token is reported on the `tracing` diagnostic channel
    /// at `TRACE` level.
    ///
    /// # Errors
    /// - [`LexError::UnrecognizedCharacter`] if the character under the
    ///   cursor matches no token shape. The cursor is left on the offending
    ///   character; scanning the rest of the line is not attempted.
    /// - [`LexError::LiteralTooLarge`] if an integer literal does not fit in
    ///   an `i64`.
    ///
    /// # Example
    /// ```
    /// use calcr::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("12 + 3");
    /// assert_eq!(lexer.next_token().unwrap(), Token::Integer(12));
    /// assert_eq!(lexer.next_token().unwrap(), Token::Plus);
    /// assert_eq!(lexer.next_token().unwrap(), Token::Integer(3));
    /// assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    /// ```
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace();

        let token = match self.current {
            None => Token::Eof,

            Some(c) if c.is_ascii_digit() => Token::Integer(self.integer()?),

            Some('+') => {
                self.advance();
                Token::Plus
            },
            Some('-') => {
                self.advance();
                Token::Minus
            },
            Some('*') => {
                self.advance();
                Token::Star
            },
            Some('/') => {
                self.advance();
                Token::Slash
            },
            Some('(') => {
                self.advance();
                Token::LParen
            },
            Some(')') => {
                self.advance();
                Token::RParen
            },

            Some(character) => {
                return Err(LexError::UnrecognizedCharacter { character,
                                                             position: self.pos });
            },
        };

        trace!(?token, "produced token");

        Ok(token)
    }

    /// Consumes the maximal run of consecutive digits and returns the
    /// accumulated decimal value.
    ///
    /// Accumulation is checked: a literal that does not fit in an `i64`
    /// fails with [`LexError::LiteralTooLarge`] instead of wrapping.
    fn integer(&mut self) -> LexResult<i64> {
        let start = self.pos;
        let mut value = 0_i64;

        while let Some(c) = self.current
              && let Some(digit) = c.to_digit(10)
        {
            value = value.checked_mul(10)
                         .and_then(|v| v.checked_add(i64::from(digit)))
                         .ok_or(LexError::LiteralTooLarge { position: start })?;
            self.advance();
        }

        Ok(value)
    }

    /// Moves the cursor one character forward and refreshes the current
    /// character.
    fn advance(&mut self) {
        if let Some(c) = self.current {
            self.pos += c.len_utf8();
            self.current = self.text[self.pos..].chars().next();
        }
    }

    /// Skips a run of whitespace characters, if any.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current
              && c.is_whitespace()
        {
            self.advance();
        }
    }
}
