//! State-step tokenizer engine.
//!
//! This crate turns an input string into a flat stream of tokens by running
//! a chain of grammar-supplied *state steps* over a cursor. It ships no
//! grammar of its own. A grammar is a set of functions with the signature
//! [`StateFn`]. Each one scans through a [`Scanner`], emits tokens, and
//! returns the step to run next or [`Transition::Halt`].
//!
//! # Layers
//!
//! - [`Cursor`]: byte offsets into the input plus code-point read, peek,
//!   backup and accept primitives.
//! - [`Scanner`]: the cursor plus the emission protocol (`emit`, `errorf`).
//!   State steps receive `&mut Scanner`.
//! - [`Lexer`]: the pull-driven driving loop the token consumer talks to.
//!
//! Failures never surface as `Result::Err`. A grammar error or an engine
//! invariant violation becomes a terminal [`TokenKind::Error`] token, and a
//! completed run ends in [`TokenKind::EndOfInput`]. Either sentinel repeats
//! on every later pull.

pub mod char_set;
mod config;
mod cursor;
mod error;
mod lexer;
mod queue;
mod scanner;
mod state;
mod token;

use std::sync::Once;

pub use char_set::CharSet;
pub use config::{ConfigError, LexerConfig, DEFAULT_QUEUE_CAPACITY, DEFAULT_STALL_LIMIT};
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use scanner::Scanner;
pub use state::{StateFn, Transition};
pub use token::{Token, TokenKind};

static TRACING_INIT: Once = Once::new();

/// Send engine diagnostics (reads, emissions, step transitions, error
/// tokens) to stderr, filtered by `RUST_LOG`.
///
/// Meant for grammar crates and their test suites, e.g.
/// `RUST_LOG=steplex_core=trace cargo test`. Does nothing when `RUST_LOG` is
/// unset or unparsable. A global subscriber installed earlier by the
/// embedding program is left in place. Only the first call has any effect.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    TRACING_INIT.call_once(|| {
        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
