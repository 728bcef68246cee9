//! End-to-end runs of a small arithmetic grammar through the public API.
//!
//! The grammar recognises runs of ASCII digits as `Number` and `+`/`-` as
//! `Operator`, skips spaces, and rejects everything else.

use pretty_assertions::assert_eq;
use steplex_core::char_set::{is_space, DIGITS};
use steplex_core::{Lexer, Scanner, Token, TokenKind, Transition};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Arith {
    Number,
    Operator,
}

type Step = Transition<Arith>;

fn expression(s: &mut Scanner<'_, Arith>) -> Step {
    s.accept_while(is_space);
    s.ignore();
    match s.peek() {
        None => Transition::Halt,
        Some(c) if c.is_ascii_digit() => Transition::Next(number),
        Some('+' | '-') => Transition::Next(operator),
        Some(c) => s.errorf(format_args!("unexpected {c:?}")),
    }
}

fn number(s: &mut Scanner<'_, Arith>) -> Step {
    s.accept_run(DIGITS);
    s.emit(Arith::Number);
    Transition::Next(expression)
}

fn operator(s: &mut Scanner<'_, Arith>) -> Step {
    s.accept("+-");
    s.emit(Arith::Operator);
    Transition::Next(expression)
}

fn pairs(tokens: impl IntoIterator<Item = Token<'static, Arith>>) -> Vec<(TokenKind<Arith>, String)> {
    tokens
        .into_iter()
        .map(|t| (t.kind, t.text.into_owned()))
        .collect()
}

#[test]
fn numbers_and_operators() {
    let mut lexer = Lexer::new("12+34", expression);
    let mut tokens = Vec::new();
    for _ in 0..5 {
        tokens.push(lexer.next_token());
    }
    assert_eq!(
        pairs(tokens),
        vec![
            (TokenKind::Lexeme(Arith::Number), "12".to_string()),
            (TokenKind::Lexeme(Arith::Operator), "+".to_string()),
            (TokenKind::Lexeme(Arith::Number), "34".to_string()),
            (TokenKind::EndOfInput, String::new()),
            (TokenKind::EndOfInput, String::new()),
        ]
    );
}

#[test]
fn empty_input_is_immediately_eof() {
    let mut lexer = Lexer::new("", expression);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::EndOfInput);
    assert_eq!(token.text, "");
}

#[test]
fn unrecognised_character_is_a_terminal_error() {
    let mut lexer = Lexer::new("#", expression);
    let first = lexer.next_token();
    assert_eq!(first.kind, TokenKind::Error);
    assert_eq!(first.text, "unexpected '#'");
    assert_eq!(first.to_string(), "Error: unexpected '#'");
    assert_eq!(lexer.next_token(), first);
    assert_eq!(lexer.next_token(), first);
}

#[test]
fn error_after_valid_prefix() {
    let lexer = Lexer::new("1 - 2 * 3", expression);
    assert_eq!(
        pairs(lexer),
        vec![
            (TokenKind::Lexeme(Arith::Number), "1".to_string()),
            (TokenKind::Lexeme(Arith::Operator), "-".to_string()),
            (TokenKind::Lexeme(Arith::Number), "2".to_string()),
            (TokenKind::Error, "unexpected '*'".to_string()),
        ]
    );
}

#[test]
fn trailing_digit_is_not_lost() {
    // The final code point of the input must be tokenized, not swallowed.
    let lexer = Lexer::new("1+2", expression);
    let texts: Vec<String> = lexer.map(|t| t.text.into_owned()).collect();
    assert_eq!(texts, vec!["1", "+", "2", ""]);
}

#[test]
fn display_rendering() {
    let mut lexer = Lexer::new("7", expression);
    assert_eq!(lexer.next_token().to_string(), "Number:\"7\"");
    assert_eq!(lexer.next_token().to_string(), "EOF");
}
