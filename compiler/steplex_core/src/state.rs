//! State steps and the transitions between them.
//!
//! There is no transition table. Each step is a plain function that scans
//! through the [`Scanner`], emits whatever it recognised, and names its
//! successor by returning [`Transition::Next`]. Returning
//! [`Transition::Halt`] ends the chain. `Halt` is a distinct variant, not an
//! absent function, so the driving loop can never call a missing step.

use std::fmt;

use crate::scanner::Scanner;

/// A state step of a grammar whose token kinds are `K`.
pub type StateFn<K> = for<'s, 'a> fn(&'s mut Scanner<'a, K>) -> Transition<K>;

/// What a step asks the engine to do next.
pub enum Transition<K> {
    /// Run this step on the next turn of the loop.
    Next(StateFn<K>),
    /// No further steps. The engine reports `EndOfInput` unless an `Error`
    /// was already queued.
    Halt,
}

impl<K> Transition<K> {
    #[inline]
    pub fn is_halt(&self) -> bool {
        matches!(self, Transition::Halt)
    }
}

// Manual impls: the derives would demand `K: Clone` / `K: Debug`, which a
// function pointer does not need.
impl<K> Clone for Transition<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Transition<K> {}

impl<K> fmt::Debug for Transition<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Next(_) => f.write_str("Next(..)"),
            Transition::Halt => f.write_str("Halt"),
        }
    }
}
