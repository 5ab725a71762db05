use calcr::{
    error::{Error, LexError, ParseError, RuntimeError},
    evaluate,
    interpreter::lexer::TokenKind,
};

fn assert_evaluates(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(result) => assert_eq!(result, expected, "{src:?} evaluated to {result}"),
        Err(e) => panic!("{src:?} failed to evaluate: {e}"),
    }
}

fn assert_fails(src: &str) -> Error {
    match evaluate(src) {
        Ok(result) => panic!("{src:?} evaluated to {result} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn single_literals() {
    assert_evaluates("3", 3);
    assert_evaluates("0", 0);
    assert_evaluates(" 42 ", 42);
    assert_evaluates("9223372036854775807", i64::MAX);
}

#[test]
fn addition_and_subtraction() {
    assert_evaluates("3+5", 8);
    assert_evaluates("7 - 5", 2);
    assert_evaluates("5 + 9 - 2", 12);
    assert_evaluates("0-10", -10);
}

#[test]
fn multiplication_and_division() {
    assert_evaluates("6*7", 42);
    assert_evaluates("84 / 2", 42);
    assert_evaluates("2 * 3 * 4", 24);
}

#[test]
fn left_associativity() {
    assert_evaluates("10-3-2", 5);
    assert_evaluates("20/4/5", 1);
    assert_evaluates("100-50-25-5", 20);
}

#[test]
fn division_truncates_towards_zero() {
    assert_evaluates("7/2", 3);
    assert_evaluates("-7/2", -3);
    assert_evaluates("1/3", 0);
}

#[test]
fn precedence() {
    assert_evaluates("2+3*4", 14);
    assert_evaluates("(2+3)*4", 20);
    assert_evaluates("14 + 2 * 3 - 6 / 2", 17);
    assert_evaluates("2 + 7 * 4", 30);
}

#[test]
fn parentheses_and_nesting() {
    assert_evaluates("((1+2))*3", 9);
    assert_evaluates("7 + 3 * (10 / (12 / (3 + 1) - 1))", 22);
    assert_evaluates("(((7)))", 7);
}

#[test]
fn deep_nesting() {
    let depth = 256;
    let src = format!("{}1+1{}", "(".repeat(depth), ")".repeat(depth));
    assert_evaluates(&src, 2);
}

#[test]
fn whitespace_is_insignificant() {
    assert_evaluates("  3 +   4  ", 7);
    assert_evaluates("3+4", 7);
    assert_evaluates("\t10 /\t2", 5);
}

#[test]
fn unary_sign() {
    assert_evaluates("-3+5", 2);
    assert_evaluates("2*-3", -6);
    assert_evaluates("--5", 5);
    assert_evaluates("+7", 7);
    assert_evaluates("5 - - 2", 7);
    assert_evaluates("-(2+3)", -5);
}

#[test]
fn division_by_zero() {
    assert_eq!(assert_fails("5/0"),
               Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(assert_fails("1/(2-2)"),
               Error::Runtime(RuntimeError::DivisionByZero));
}

#[test]
fn missing_operand() {
    assert_eq!(assert_fails("3+"),
               Error::Parse(ParseError::UnexpectedEndOfInput { expected: TokenKind::Integer }));
    assert_eq!(assert_fails(""),
               Error::Parse(ParseError::UnexpectedEndOfInput { expected: TokenKind::Integer }));
}

#[test]
fn mismatched_tokens() {
    assert_eq!(assert_fails("3+)"),
               Error::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                          found:    TokenKind::RParen, }));
    assert_eq!(assert_fails("(1+2"),
               Error::Parse(ParseError::UnexpectedEndOfInput { expected: TokenKind::RParen }));
}

#[test]
fn trailing_input_is_rejected() {
    assert_eq!(assert_fails("3+4)"),
               Error::Parse(ParseError::TrailingInput { found: TokenKind::RParen }));
    assert_eq!(assert_fails("1 2"),
               Error::Parse(ParseError::TrailingInput { found: TokenKind::Integer }));
}

#[test]
fn unrecognized_characters() {
    assert_eq!(assert_fails("3#4"),
               Error::Lex(LexError::UnrecognizedCharacter { character: '#',
                                                            position:  1, }));
    assert_eq!(assert_fails("a+1"),
               Error::Lex(LexError::UnrecognizedCharacter { character: 'a',
                                                            position:  0, }));
}

#[test]
fn literal_overflow() {
    assert_eq!(assert_fails("9223372036854775808"),
               Error::Lex(LexError::LiteralTooLarge { position: 0 }));
}

#[test]
fn arithmetic_overflow() {
    assert_eq!(assert_fails("9223372036854775807+1"),
               Error::Runtime(RuntimeError::Overflow));
    assert_eq!(assert_fails("4000000000*4000000000"),
               Error::Runtime(RuntimeError::Overflow));
    assert_eq!(assert_fails("0-9223372036854775807-2"),
               Error::Runtime(RuntimeError::Overflow));
}

#[test]
fn evaluation_is_idempotent() {
    assert_eq!(evaluate("10-3-2").unwrap(), evaluate("10-3-2").unwrap());
    assert_eq!(assert_fails("5/0"), assert_fails("5/0"));
}
