//! FIFO queue helpers — non-failing dequeue and push-and-return.
//!
//! Every helper takes the queue by `&mut`, so the emptiness check and the
//! removal happen under one exclusive borrow. No locking is done here;
//! sharing a queue across threads is the caller's business.

use std::collections::{LinkedList, VecDeque};

/// A caller-owned first-in-first-out sequence.
///
/// Elements enter at the back and leave from the front.
pub trait Fifo<T> {
    /// Appends `value` at the back.
    fn push_back(&mut self, value: T);

    /// Removes and returns the front element, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;

    /// Returns the number of queued elements.
    fn len(&self) -> usize;

    /// Returns `true` if no elements are queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_fifo {
    ($($queue:ident),*) => {
        $(
            impl<T> Fifo<T> for $queue<T> {
                fn push_back(&mut self, value: T) {
                    $queue::push_back(self, value);
                }

                fn pop_front(&mut self) -> Option<T> {
                    $queue::pop_front(self)
                }

                fn len(&self) -> usize {
                    $queue::len(self)
                }

                fn is_empty(&self) -> bool {
                    $queue::is_empty(self)
                }
            }
        )*
    };
}

impl_fifo!(VecDeque, LinkedList);

/// Convenience operations over any [`Fifo`].
pub trait QueueExt<T>: Fifo<T> {
    /// Dequeues the front element if there is one.
    ///
    /// `Some(front)` when the queue was non-empty at call time; otherwise
    /// `None` and the queue is left untouched.
    fn try_pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.pop_front()
    }

    /// Enqueues `value` and returns it.
    ///
    /// The queue keeps the original; the caller gets a clone.
    fn enqueued(&mut self, value: T) -> T
    where
        T: Clone,
    {
        self.push_back(value.clone());
        value
    }
}

impl<T, Q: Fifo<T> + ?Sized> QueueExt<T> for Q {}

/// Free-function form of [`QueueExt::try_pop_front`].
pub fn try_pop_front<T, Q: Fifo<T> + ?Sized>(queue: &mut Q) -> Option<T> {
    queue.try_pop_front()
}

/// Free-function form of [`QueueExt::enqueued`].
pub fn push_and_return<T: Clone, Q: Fifo<T> + ?Sized>(queue: &mut Q, value: T) -> T {
    queue.enqueued(value)
}
