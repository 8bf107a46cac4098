//! Content hashing and queue helpers for standard collections.
//!
//! # Content hash
//!
//! [`content_hash_with`] folds the element hashes of a container into one
//! 32-bit value, `acc = acc · 31 + hash(e)`, starting from
//! [`SEED`](content_hash::SEED) and wrapping on overflow. The result
//! depends on element order, so `[a, b]` and `[b, a]` hash differently
//! whenever `hash(a) ≠ hash(b)`.
//!
//! | input            | result                 |
//! |------------------|------------------------|
//! | `None`           | `0`                    |
//! | empty container  | `0x2D28_16FE`          |
//! | `[e₀, …, eₙ]`    | polynomial fold        |
//!
//! Element hashing is pluggable through [`EqualityStrategy`]; the default
//! is [`StructuralStrategy`] (content equality, never identity), under
//! which a `None` element contributes `0`.
//!
//! # Queue helpers
//!
//! [`QueueExt`] adds a non-failing [`try_pop_front`](QueueExt::try_pop_front)
//! and a push-and-return [`enqueued`](QueueExt::enqueued) to every
//! [`Fifo`], including [`VecDeque`](std::collections::VecDeque).
//!
//! ```
//! use std::collections::VecDeque;
//! use collection_ex::{QueueExt, content_hash_with, IntrinsicStrategy, SEED};
//!
//! let empty: Vec<i32> = Vec::new();
//! assert_eq!(content_hash_with(Some(&empty), &IntrinsicStrategy), SEED);
//!
//! let mut q: VecDeque<i32> = VecDeque::from([1, 2, 3]);
//! assert_eq!(q.try_pop_front(), Some(1));
//! assert_eq!(q.enqueued(5), 5);
//! assert_eq!(q, [2, 3, 5]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod content_hash;
pub mod queue;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use content_hash::{
    ContentHashExt, FACTOR, SEED, combine, content_equals, content_hash, content_hash_with,
    try_content_hash,
};
pub use queue::{Fifo, QueueExt, push_and_return, try_pop_front};
pub use strategy::{
    EqualityStrategy, FnStrategy, IntrinsicHash, IntrinsicStrategy, Nullable, StructuralHash,
    StructuralStrategy,
};
