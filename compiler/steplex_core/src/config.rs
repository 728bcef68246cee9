//! Engine configuration.

use std::num::{NonZeroU32, NonZeroUsize};

use thiserror::Error;

/// Number of tokens a single step may emit before it has to yield.
pub const DEFAULT_QUEUE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(n) => n,
    None => unreachable!(),
};

/// Consecutive non-advancing steps tolerated before the run is aborted.
pub const DEFAULT_STALL_LIMIT: NonZeroU32 = match NonZeroU32::new(1024) {
    Some(n) => n,
    None => unreachable!(),
};

/// Rejected configuration values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("pending queue capacity must be at least 1")]
    ZeroQueueCapacity,
    #[error("stall limit must be at least 1")]
    ZeroStallLimit,
}

/// Tunables for a [`Lexer`](crate::Lexer) run.
///
/// `queue_capacity` bounds how many tokens one state step may emit before
/// returning. A grammar whose steps emit more than that at once must either
/// raise the capacity or split the work across steps; overflowing it ends
/// the run with an `Error` token.
///
/// `stall_limit` bounds how many steps in a row may run without reading past
/// the furthest point reached so far, discarding text, or emitting. Pure dispatch steps (peek, then pick a successor)
/// count as non-advancing, so the limit must leave room for the longest
/// dispatch chain the grammar has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexerConfig {
    pub queue_capacity: NonZeroUsize,
    pub stall_limit: NonZeroU32,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            stall_limit: DEFAULT_STALL_LIMIT,
        }
    }
}

impl LexerConfig {
    /// Set the pending queue capacity.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Result<Self, ConfigError> {
        self.queue_capacity = NonZeroUsize::new(capacity).ok_or(ConfigError::ZeroQueueCapacity)?;
        Ok(self)
    }

    /// Set the stall limit.
    pub fn with_stall_limit(mut self, steps: u32) -> Result<Self, ConfigError> {
        self.stall_limit = NonZeroU32::new(steps).ok_or(ConfigError::ZeroStallLimit)?;
        Ok(self)
    }
}
