//! Diagnostics carried by `Error` tokens.
//!
//! The token stream is the only channel through which a run reports failure,
//! so these values never escape as `Result::Err`. They are rendered with
//! `Display` into the text of an `Error` token.

use thiserror::Error;

/// Why a tokenization run ended in an `Error` token.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// The pending window reached past the end of the input at emission time.
    #[error("reached end of input unexpectedly")]
    UnexpectedEnd,

    /// A single step emitted more tokens than the pending queue can hold.
    #[error("pending token queue overflowed its capacity of {capacity} tokens")]
    QueueOverflow { capacity: usize },

    /// The configured number of consecutive steps neither moved the cursor
    /// nor emitted anything.
    #[error("lexer made no progress after {steps} consecutive steps")]
    Stalled { steps: u32 },

    /// A grammar-detected error raised through `Scanner::errorf`.
    #[error("{0}")]
    Custom(String),
}
