//! Code-point cursor over an immutable input string.
//!
//! The cursor keeps two offsets into the input. `start` marks the beginning
//! of the pending window (scanned but not yet emitted), and `pos` marks the
//! next code point to read. Both are byte offsets and always sit on UTF-8
//! character boundaries, with `start <= pos <= input.len()`.
//!
//! # Backup
//!
//! Every read records the width of what it consumed so that exactly one
//! [`backup()`](Cursor::backup) can undo it. The record is cleared by the
//! backup itself and by anything that moves `start` ([`ignore()`](Cursor::ignore),
//! emission) or jumps `pos` ([`matches()`](Cursor::matches)). Backing up
//! without a record is a caller bug: it trips a debug assertion and is
//! otherwise a no-op, so `pos` can never land inside a code point or before
//! `start`.
//!
//! A read at end of input records a width of 0. Backing up after it is legal
//! and does nothing, which is what lets `accept_run` stop at end of input.

use tracing::trace;

use crate::char_set::CharSet;

/// Read position, pending-window start, and backup bookkeeping.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
    /// Width of the last read, if it may still be backed up.
    last_width: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0 with an empty pending window.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            last_width: None,
        }
    }

    /// The full input text.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the next code point to read.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte offset where the pending window begins.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Unread remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Text of the pending window, `input[start..pos]`.
    ///
    /// Returns `None` if the window does not describe a valid slice of the
    /// input, which only happens if the offset invariants were broken.
    #[inline]
    pub fn pending(&self) -> Option<&'a str> {
        self.input.get(self.start..self.pos)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Whether a [`backup()`](Self::backup) is currently allowed.
    #[inline]
    pub fn can_backup(&self) -> bool {
        self.last_width.is_some()
    }

    /// Consume and return the next code point, or `None` at end of input.
    ///
    /// The final code point of the input is returned like any other; `None`
    /// only comes back once `pos` has reached the end.
    #[allow(
        clippy::should_implement_trait,
        reason = "paired with backup(); a cursor is not an iterator"
    )]
    pub fn next(&mut self) -> Option<char> {
        let Some(c) = self.rest().chars().next() else {
            self.last_width = Some(0);
            trace!(pos = self.pos, "read end of input");
            return None;
        };
        let width = c.len_utf8();
        self.pos += width;
        self.last_width = Some(width);
        trace!(ch = ?c, pos = self.pos, "read");
        Some(c)
    }

    /// Return the next code point without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let c = self.next();
        self.backup();
        c
    }

    /// Step back over the last code point read.
    ///
    /// Allowed once per read. See the module docs for the exact contract.
    pub fn backup(&mut self) {
        debug_assert!(
            self.last_width.is_some(),
            "backup at {} without a preceding read (double backup?)",
            self.pos
        );
        if let Some(width) = self.last_width.take() {
            self.pos -= width;
        }
    }

    /// Drop the pending window; the scanned text is insignificant.
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.last_width = None;
    }

    /// Consume one code point and drop it together with the pending window.
    pub fn skip(&mut self) -> Option<char> {
        let c = self.next();
        self.ignore();
        c
    }

    /// Consume the next code point if it is a member of `set`.
    pub fn accept(&mut self, set: impl CharSet) -> bool {
        self.accept_if(|c| set.contains_char(c))
    }

    /// Consume the next code point if `pred` holds for it.
    pub fn accept_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.next() {
            Some(c) if pred(c) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Consume the longest run of members of `set`.
    ///
    /// Returns the number of code points consumed. Afterwards one backup
    /// has already been spent on the first non-member.
    pub fn accept_run(&mut self, set: impl CharSet) -> usize {
        self.accept_while(|c| set.contains_char(c))
    }

    /// Consume code points while `pred` holds.
    pub fn accept_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.next().is_some_and(&pred) {
            count += 1;
        }
        self.backup();
        count
    }

    /// Consume `literal` if the input continues with it verbatim.
    ///
    /// On a match the cursor moves past the literal and `true` is returned;
    /// otherwise nothing changes. A match cannot be backed up.
    pub fn matches(&mut self, literal: &str) -> bool {
        if !self.rest().starts_with(literal) {
            return false;
        }
        self.pos += literal.len();
        self.last_width = None;
        trace!(literal, pos = self.pos, "matched literal");
        true
    }

    /// Cursor with arbitrary offsets, for exercising broken-invariant paths.
    #[cfg(test)]
    pub(crate) fn with_offsets(input: &'a str, start: usize, pos: usize) -> Self {
        Self {
            input,
            start,
            pos,
            last_width: None,
        }
    }

    /// Take the pending window and start a new one at `pos`.
    ///
    /// Returns `None`, leaving the window untouched, if it is not a valid
    /// slice of the input.
    pub(crate) fn take_pending(&mut self) -> Option<&'a str> {
        let text = self.pending()?;
        self.ignore();
        Some(text)
    }
}
