//! The handle state steps work through.
//!
//! A [`Scanner`] bundles the [`Cursor`] with the emission side of the
//! engine: the bounded pending queue and the terminal slot. Only state steps
//! ever see one. The token consumer talks to [`Lexer`](crate::Lexer)
//! instead.
//!
//! # Emission
//!
//! [`emit`](Scanner::emit) turns the pending window into a token and queues
//! it. Errors, whether raised by the grammar through
//! [`errorf`](Scanner::errorf) or detected by the engine, go to a separate
//! terminal slot that is delivered once the queue has drained. After that
//! slot is filled, all further emissions are dropped, so no ordinary token
//! can follow an `Error`.

use std::fmt;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::char_set::CharSet;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::queue::{PendingQueue, QueueFull};
use crate::state::Transition;
use crate::token::Token;

/// Snapshot used by the driving loop to tell whether a step did anything.
///
/// Every field only ever grows, so a changed snapshot cannot be undone by a
/// later step. The read position is not included because `backup` moves it
/// backwards; the loop tracks its high-water mark instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Progress {
    start: usize,
    emitted: usize,
    terminated: bool,
}

/// Cursor plus emission protocol, handed to each state step.
pub struct Scanner<'a, K> {
    cursor: Cursor<'a>,
    pending: PendingQueue<Token<'a, K>>,
    terminal: Option<Token<'a, K>>,
    /// Tokens emitted so far, for progress tracking.
    emitted: usize,
}

impl<'a, K: fmt::Debug> Scanner<'a, K> {
    pub(crate) fn new(input: &'a str, queue_capacity: NonZeroUsize) -> Self {
        Self::with_cursor(Cursor::new(input), queue_capacity)
    }

    pub(crate) fn with_cursor(cursor: Cursor<'a>, queue_capacity: NonZeroUsize) -> Self {
        Self {
            cursor,
            pending: PendingQueue::new(queue_capacity),
            terminal: None,
            emitted: 0,
        }
    }

    // === Cursor ===

    /// Read access to the underlying cursor.
    #[inline]
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// See [`Cursor::next`].
    #[allow(
        clippy::should_implement_trait,
        reason = "mirrors Cursor::next; a scanner is not an iterator"
    )]
    #[inline]
    pub fn next(&mut self) -> Option<char> {
        self.cursor.next()
    }

    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        self.cursor.peek()
    }

    #[inline]
    pub fn backup(&mut self) {
        self.cursor.backup();
    }

    #[inline]
    pub fn ignore(&mut self) {
        self.cursor.ignore();
    }

    #[inline]
    pub fn skip(&mut self) -> Option<char> {
        self.cursor.skip()
    }

    #[inline]
    pub fn accept(&mut self, set: impl CharSet) -> bool {
        self.cursor.accept(set)
    }

    #[inline]
    pub fn accept_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        self.cursor.accept_if(pred)
    }

    #[inline]
    pub fn accept_run(&mut self, set: impl CharSet) -> usize {
        self.cursor.accept_run(set)
    }

    #[inline]
    pub fn accept_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        self.cursor.accept_while(pred)
    }

    /// See [`Cursor::matches`]: advances and returns `true` on a match.
    #[inline]
    pub fn matches(&mut self, literal: &str) -> bool {
        self.cursor.matches(literal)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Text scanned since the last emit/ignore.
    #[inline]
    pub fn pending_text(&self) -> &'a str {
        self.cursor.pending().unwrap_or_default()
    }

    // === Emission ===

    /// Emit the pending window as a token of `kind`.
    ///
    /// Does nothing once a terminal token has been queued.
    pub fn emit(&mut self, kind: K) {
        if self.terminal.is_some() {
            trace!(?kind, "dropping emission after terminal token");
            return;
        }
        let Some(text) = self.cursor.take_pending() else {
            self.fail(LexError::UnexpectedEnd);
            return;
        };
        trace!(?kind, text, "emit");
        if let Err(QueueFull(rejected)) = self.pending.push(Token::lexeme(kind, text)) {
            debug!(text = %rejected.text, "pending queue rejected token");
            self.fail(LexError::QueueOverflow {
                capacity: self.pending.capacity(),
            });
            return;
        }
        self.emitted += 1;
    }

    /// Queue an `Error` token carrying `message` and end the step chain.
    ///
    /// Returns [`Transition::Halt`] so a step can `return s.errorf(...)`.
    /// Use `format_args!` for formatted messages.
    pub fn errorf(&mut self, message: impl fmt::Display) -> Transition<K> {
        self.fail(LexError::Custom(message.to_string()));
        Transition::Halt
    }

    /// Fill the terminal slot with an `Error` token, unless it is taken.
    pub(crate) fn fail(&mut self, error: LexError) {
        if self.terminal.is_some() {
            trace!(%error, "dropping error after terminal token");
            return;
        }
        debug!(%error, pos = self.cursor.pos(), "tokenization failed");
        self.terminal = Some(Token::error(error.to_string()));
    }

    // === Driving loop interface ===

    pub(crate) fn pop_pending(&mut self) -> Option<Token<'a, K>> {
        self.pending.pop()
    }

    pub(crate) fn terminal(&self) -> Option<&Token<'a, K>> {
        self.terminal.as_ref()
    }

    pub(crate) fn is_terminated(&self) -> bool {
        self.terminal.is_some()
    }

    /// Record normal completion, unless an error already ended the run.
    pub(crate) fn finish(&mut self) {
        if self.terminal.is_none() {
            trace!(pos = self.cursor.pos(), "end of input");
            self.terminal = Some(Token::end_of_input());
        }
    }

    pub(crate) fn progress(&self) -> Progress {
        Progress {
            start: self.cursor.start(),
            emitted: self.emitted,
            terminated: self.terminal.is_some(),
        }
    }
}
