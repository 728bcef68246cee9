use pretty_assertions::assert_eq;

use super::*;
use crate::char_set::{is_alphanumeric, DIGITS};
use crate::token::TokenKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Number,
    Word,
    Comma,
}

type Step = Transition<Kind>;

fn collect(lexer: &mut Lexer<'_, Kind>) -> Vec<(TokenKind<Kind>, String)> {
    lexer
        .map(|token| (token.kind, token.text.into_owned()))
        .collect()
}

fn lexeme(kind: Kind, text: &str) -> (TokenKind<Kind>, String) {
    (TokenKind::Lexeme(kind), text.to_string())
}

fn eof() -> (TokenKind<Kind>, String) {
    (TokenKind::EndOfInput, String::new())
}

// === Steps used below ===

fn halt_immediately(_: &mut Scanner<'_, Kind>) -> Step {
    Transition::Halt
}

/// Words and numbers separated by commas; anything else is an error.
fn list(s: &mut Scanner<'_, Kind>) -> Step {
    match s.peek() {
        None => Transition::Halt,
        Some(',') => {
            s.next();
            s.emit(Kind::Comma);
            Transition::Next(list)
        }
        Some(c) if c.is_ascii_digit() => Transition::Next(number),
        Some(c) if is_alphanumeric(c) => Transition::Next(word),
        Some(c) => s.errorf(format_args!("unexpected {c:?}")),
    }
}

fn number(s: &mut Scanner<'_, Kind>) -> Step {
    s.accept_run(DIGITS);
    s.emit(Kind::Number);
    Transition::Next(list)
}

fn word(s: &mut Scanner<'_, Kind>) -> Step {
    s.accept_while(is_alphanumeric);
    s.emit(Kind::Word);
    Transition::Next(list)
}

/// Emits every character as its own token in a single step.
fn burst(s: &mut Scanner<'_, Kind>) -> Step {
    while s.next().is_some() {
        s.emit(Kind::Word);
    }
    Transition::Halt
}

/// Never moves the cursor and never emits.
fn spin(_: &mut Scanner<'_, Kind>) -> Step {
    Transition::Next(spin)
}

/// Reads one code point and hands over to `step_back`.
fn step_forward(s: &mut Scanner<'_, Kind>) -> Step {
    s.next();
    Transition::Next(step_back)
}

/// Undoes the read made by `step_forward`.
fn step_back(s: &mut Scanner<'_, Kind>) -> Step {
    s.backup();
    Transition::Next(step_forward)
}

/// Emits one token, then errors out in the same step.
fn emit_then_fail(s: &mut Scanner<'_, Kind>) -> Step {
    s.next();
    s.emit(Kind::Word);
    s.errorf("stopped")
}

// === Termination ===

#[test]
fn halting_initial_state_yields_eof() {
    let mut lexer = Lexer::new("", halt_immediately);
    assert!(lexer.next_token().is_eof());
}

#[test]
fn eof_repeats_forever() {
    let mut lexer = Lexer::new("1", list);
    assert_eq!(lexer.next_token().text, "1");
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EndOfInput);
        assert_eq!(token.text, "");
    }
}

#[test]
fn error_repeats_forever() {
    let mut lexer = Lexer::new("#", list);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert!(token.is_error());
        assert_eq!(token.text, "unexpected '#'");
    }
}

#[test]
fn queued_tokens_precede_error() {
    let mut lexer = Lexer::new("ab", emit_then_fail);
    assert_eq!(
        collect(&mut lexer),
        vec![
            lexeme(Kind::Word, "a"),
            (TokenKind::Error, "stopped".to_string()),
        ]
    );
}

// === Driving ===

#[test]
fn dispatch_chain_produces_tokens_in_order() {
    let mut lexer = Lexer::new("abc,12,x9", list);
    assert_eq!(
        collect(&mut lexer),
        vec![
            lexeme(Kind::Word, "abc"),
            lexeme(Kind::Comma, ","),
            lexeme(Kind::Number, "12"),
            lexeme(Kind::Comma, ","),
            lexeme(Kind::Word, "x9"),
            eof(),
        ]
    );
}

#[test]
fn burst_within_capacity_is_delivered() {
    let mut lexer = Lexer::new("ab", burst);
    assert_eq!(
        collect(&mut lexer),
        vec![lexeme(Kind::Word, "a"), lexeme(Kind::Word, "b"), eof()]
    );
}

#[test]
fn burst_beyond_capacity_errors() {
    let mut lexer = Lexer::new("abc", burst);
    let tokens = collect(&mut lexer);
    assert_eq!(tokens.len(), 3);
    assert_eq!(
        tokens[2],
        (
            TokenKind::Error,
            "pending token queue overflowed its capacity of 2 tokens".to_string()
        )
    );
}

#[test]
fn larger_capacity_admits_larger_bursts() {
    let Ok(config) = LexerConfig::default().with_queue_capacity(4) else {
        panic!("capacity 4 is valid");
    };
    let mut lexer = Lexer::with_config("abcd", burst, config);
    let tokens = collect(&mut lexer);
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[4], eof());
}

// === Stall guard ===

#[test]
fn spinning_step_is_cut_off() {
    let Ok(config) = LexerConfig::default().with_stall_limit(8) else {
        panic!("stall limit 8 is valid");
    };
    let mut lexer = Lexer::with_config("abc", spin, config);
    let token = lexer.next_token();
    assert!(token.is_error());
    assert_eq!(token.text, "lexer made no progress after 8 consecutive steps");
}

#[test]
fn read_then_backup_cycle_is_cut_off() {
    let Ok(config) = LexerConfig::default().with_stall_limit(8) else {
        panic!("stall limit 8 is valid");
    };
    let mut lexer = Lexer::with_config("ab", step_forward, config);
    let token = lexer.next_token();
    assert!(token.is_error());
    assert_eq!(token.text, "lexer made no progress after 8 consecutive steps");
    assert_eq!(lexer.next_token(), token);
}

#[test]
fn dispatch_steps_do_not_trip_stall_guard() {
    // `list` peeks without consuming before each token; with a limit of 2
    // that single idle step must not count as a stall.
    let Ok(config) = LexerConfig::default().with_stall_limit(2) else {
        panic!("stall limit 2 is valid");
    };
    let mut lexer = Lexer::with_config("a,b,c", list, config);
    let tokens = collect(&mut lexer);
    assert_eq!(tokens.last(), Some(&eof()));
    assert_eq!(tokens.len(), 6);
}

// === Iterator ===

#[test]
fn iterator_stops_after_sentinel() {
    let mut lexer = Lexer::new("7", list);
    assert_eq!(lexer.next().map(|t| t.is_terminal()), Some(false));
    assert_eq!(lexer.next().map(|t| t.is_eof()), Some(true));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
    // next_token keeps answering after the iterator is exhausted.
    assert!(lexer.next_token().is_eof());
}

#[test]
fn input_is_exposed() {
    let lexer = Lexer::new("abc", list);
    assert_eq!(lexer.input(), "abc");
}
