//! Tokens and token kinds.
//!
//! A grammar supplies its own kind type `K`. The engine wraps it in
//! [`TokenKind`], which adds the two reserved sentinels, so a grammar kind
//! can never collide with them.

use std::borrow::Cow;
use std::fmt;

/// Characters of token text shown by `Display` before truncating.
const DISPLAY_LIMIT: usize = 50;

/// Category of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind<K> {
    /// A grammar-defined kind.
    Lexeme(K),
    /// No more tokens will be produced.
    EndOfInput,
    /// Tokenization failed; the token text says why. Nothing follows it.
    Error,
}

/// One lexical unit: a kind plus its text.
///
/// For [`TokenKind::Lexeme`] the text is exactly the input slice the step
/// consumed, borrowed from the input. For `Error` it is an owned diagnostic
/// message, and for `EndOfInput` it is empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a, K> {
    pub kind: TokenKind<K>,
    pub text: Cow<'a, str>,
}

impl<'a, K> Token<'a, K> {
    pub(crate) fn lexeme(kind: K, text: &'a str) -> Self {
        Self {
            kind: TokenKind::Lexeme(kind),
            text: Cow::Borrowed(text),
        }
    }

    pub(crate) fn end_of_input() -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            text: Cow::Borrowed(""),
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Error,
            text: Cow::Owned(message.into()),
        }
    }

    /// The grammar kind, or `None` for a sentinel.
    #[inline]
    pub fn lexeme_kind(&self) -> Option<&K> {
        match &self.kind {
            TokenKind::Lexeme(kind) => Some(kind),
            TokenKind::EndOfInput | TokenKind::Error => None,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error)
    }

    /// `EndOfInput` or `Error`: the stream ends here.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_eof() || self.is_error()
    }
}

impl<K: fmt::Debug> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::EndOfInput => f.write_str("EOF"),
            TokenKind::Error => write!(f, "Error: {}", self.text),
            TokenKind::Lexeme(kind) => {
                if self.text.chars().count() > DISPLAY_LIMIT {
                    let head: String = self.text.chars().take(DISPLAY_LIMIT).collect();
                    write!(f, "{kind:?}:{head:?}...")
                } else {
                    write!(f, "{kind:?}:{:?}", self.text)
                }
            }
        }
    }
}
