//! Bounded FIFO of tokens that a step emitted but the caller has not pulled.
//!
//! A step may emit several tokens before it returns, while the caller pulls
//! one at a time. The queue absorbs the difference. It never blocks: the
//! driving loop and the emitting step share one thread, so a full queue is
//! reported to the emitter instead.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Returned by [`PendingQueue::push`] when the queue is at capacity.
/// Carries the rejected item back to the caller.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct QueueFull<T>(pub T);

/// Fixed-capacity ring of pending items.
#[derive(Debug)]
pub(crate) struct PendingQueue<T> {
    items: VecDeque<T>,
    capacity: NonZeroUsize,
}

impl<T> PendingQueue<T> {
    pub(crate) fn new(capacity: NonZeroUsize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity.get()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.items.len() >= self.capacity.get()
    }

    /// Append `item`, or hand it back if the queue is full.
    pub(crate) fn push(&mut self, item: T) -> Result<(), QueueFull<T>> {
        if self.is_full() {
            return Err(QueueFull(item));
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Remove the oldest item.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}
