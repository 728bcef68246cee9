//! The driving loop.
//!
//! [`Lexer`] is a pull-driven generator. Each call to
//! [`next_token`](Lexer::next_token) runs state steps until a token is
//! available, then returns it. Execution picks up on the next call from
//! exactly where it stopped. A step always runs to completion, so the only
//! suspension point is the `next_token` boundary.
//!
//! # Termination
//!
//! The stream ends with exactly one kind of sentinel, `EndOfInput` or
//! `Error`. Once the queued tokens ahead of it have been delivered, every
//! later call returns a clone of that same sentinel. `EndOfInput` is
//! synthesised by the loop when the chain reaches [`Transition::Halt`]; the
//! halt marker itself is never invoked.
//!
//! A chain that keeps running without reaching new input or emitting is cut
//! off after [`LexerConfig::stall_limit`] consecutive steps with an `Error`.
//! Only forward movement counts: a step that backs up over what an earlier
//! step read has not advanced, so read/backup ping-pong cannot evade the
//! limit.

use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroU32;

use tracing::trace;

use crate::config::LexerConfig;
use crate::error::LexError;
use crate::scanner::Scanner;
use crate::state::{StateFn, Transition};
use crate::token::Token;

/// Tokenizer over one input, driven by a chain of state steps.
///
/// ```
/// use steplex_core::{char_set::DIGITS, Lexer, Scanner, TokenKind, Transition};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Kind { Number }
///
/// fn number(s: &mut Scanner<'_, Kind>) -> Transition<Kind> {
///     if s.accept_run(DIGITS) == 0 {
///         return Transition::Halt;
///     }
///     s.emit(Kind::Number);
///     Transition::Next(number)
/// }
///
/// let mut lexer = Lexer::new("42", number);
/// assert_eq!(lexer.next_token().kind, TokenKind::Lexeme(Kind::Number));
/// assert!(lexer.next_token().is_eof());
/// ```
pub struct Lexer<'a, K> {
    scanner: Scanner<'a, K>,
    state: Transition<K>,
    stall_limit: NonZeroU32,
    /// Consecutive steps that made no progress.
    idle_steps: u32,
    /// Furthest cursor position any step has ended at.
    furthest: usize,
    /// The iterator has already yielded the sentinel.
    fused: bool,
}

impl<'a, K: Clone + fmt::Debug> Lexer<'a, K> {
    /// Start tokenizing `input` with the default configuration.
    pub fn new(input: &'a str, initial: StateFn<K>) -> Self {
        Self::with_config(input, initial, LexerConfig::default())
    }

    pub fn with_config(input: &'a str, initial: StateFn<K>, config: LexerConfig) -> Self {
        trace!(len = input.len(), ?config, "lexer created");
        Self {
            scanner: Scanner::new(input, config.queue_capacity),
            state: Transition::Next(initial),
            stall_limit: config.stall_limit,
            idle_steps: 0,
            furthest: 0,
            fused: false,
        }
    }

    /// The input being tokenized.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.scanner.cursor().input()
    }

    /// Pull the next token.
    ///
    /// After a sentinel has been returned, keeps returning it.
    pub fn next_token(&mut self) -> Token<'a, K> {
        loop {
            if let Some(token) = self.scanner.pop_pending() {
                return token;
            }
            if let Some(token) = self.scanner.terminal() {
                return token.clone();
            }
            match self.state {
                Transition::Halt => self.scanner.finish(),
                Transition::Next(step) => self.run(step),
            }
        }
    }

    fn run(&mut self, step: StateFn<K>) {
        let before = self.scanner.progress();
        self.state = step(&mut self.scanner);
        trace!(next = ?self.state, pos = self.scanner.cursor().pos(), "step");

        if self.scanner.is_terminated() {
            self.state = Transition::Halt;
            return;
        }
        let pos = self.scanner.cursor().pos();
        let reached_new_input = pos > self.furthest;
        self.furthest = self.furthest.max(pos);
        if reached_new_input || self.scanner.progress() != before || self.state.is_halt() {
            self.idle_steps = 0;
            return;
        }
        self.idle_steps += 1;
        if self.idle_steps >= self.stall_limit.get() {
            self.scanner.fail(LexError::Stalled {
                steps: self.idle_steps,
            });
            self.state = Transition::Halt;
        }
    }
}

/// Yields every token up to and including the sentinel, then `None`.
impl<'a, K: Clone + fmt::Debug> Iterator for Lexer<'a, K> {
    type Item = Token<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        let token = self.next_token();
        self.fused = token.is_terminal();
        Some(token)
    }
}

impl<K: Clone + fmt::Debug> FusedIterator for Lexer<'_, K> {}

impl<K> fmt::Debug for Lexer<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("state", &self.state)
            .field("idle_steps", &self.idle_steps)
            .field("furthest", &self.furthest)
            .field("fused", &self.fused)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
