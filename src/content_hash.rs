//! Content hash — order-sensitive polynomial hashing over containers.
//!
//! Computes `h = ((SEED · 31 + hash(e₀)) · 31 + hash(e₁)) · 31 + …` over the
//! container's iteration order using wrapping 32-bit signed arithmetic.
//!
//! - absent container → `0`
//! - empty container → [`SEED`]
//!
//! The seed keeps "empty" apart from "absent" and from a run of elements
//! that all hash to zero.

use std::collections::{BTreeSet, LinkedList, VecDeque};

use crate::strategy::{EqualityStrategy, StructuralHash, StructuralStrategy};

/// Initial accumulator value.
pub const SEED: i32 = 0x2D28_16FE;

/// Polynomial factor applied before folding in each element.
pub const FACTOR: i32 = 31;

/// One folding step: `acc · FACTOR + term`, wrapping on overflow.
#[must_use]
pub const fn combine(acc: i32, term: i32) -> i32 {
    acc.wrapping_mul(FACTOR).wrapping_add(term)
}

/// Content hash of `container` under [`StructuralStrategy`].
///
/// An absent container hashes to `0`, and so does each `None` element.
#[must_use]
pub fn content_hash<'a, T, I>(container: Option<I>) -> i32
where
    T: StructuralHash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    content_hash_with(container, &StructuralStrategy)
}

/// Content hash of `container` under a caller-supplied strategy.
///
/// A strategy that panics in `hash` unwinds straight through this call.
#[must_use]
pub fn content_hash_with<'a, T, I, S>(container: Option<I>, strategy: &S) -> i32
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    S: EqualityStrategy<T> + ?Sized,
{
    container.map_or(0, |c| {
        c.into_iter()
            .fold(SEED, |acc, item| combine(acc, strategy.hash(item)))
    })
}

/// Content hash with a fallible per-element hash.
///
/// Stops at the first error and returns it unchanged.
///
/// # Errors
///
/// Returns whatever error `hash` returns first.
pub fn try_content_hash<'a, T, I, F, E>(container: Option<I>, mut hash: F) -> Result<i32, E>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> Result<i32, E>,
{
    let Some(c) = container else {
        return Ok(0);
    };
    let mut acc = SEED;
    for item in c {
        acc = combine(acc, hash(item)?);
    }
    Ok(acc)
}

/// Element-wise equality in iteration order under `strategy`.
///
/// Two absent containers are equal; absent never equals present.
/// Containers equal here have equal [`content_hash_with`].
#[must_use]
pub fn content_equals<'a, 'b, T, I, J, S>(a: Option<I>, b: Option<J>, strategy: &S) -> bool
where
    T: ?Sized + 'a + 'b,
    I: IntoIterator<Item = &'a T>,
    J: IntoIterator<Item = &'b T>,
    S: EqualityStrategy<T> + ?Sized,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            let mut a = a.into_iter();
            let mut b = b.into_iter();
            loop {
                match (a.next(), b.next()) {
                    (None, None) => return true,
                    (Some(x), Some(y)) if strategy.equals(x, y) => {}
                    _ => return false,
                }
            }
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Extension trait
// ---------------------------------------------------------------------------

/// Method-call form of [`content_hash_with`] for present containers.
pub trait ContentHashExt<T> {
    /// Content hash under a caller-supplied strategy.
    fn content_hash_with<S: EqualityStrategy<T> + ?Sized>(&self, strategy: &S) -> i32;

    /// Content hash under [`StructuralStrategy`].
    fn content_hash(&self) -> i32
    where
        T: StructuralHash,
    {
        self.content_hash_with(&StructuralStrategy)
    }
}

macro_rules! impl_content_hash_ext {
    ($($container:ty),*) => {
        $(
            impl<T> ContentHashExt<T> for $container {
                fn content_hash_with<S: EqualityStrategy<T> + ?Sized>(&self, strategy: &S) -> i32 {
                    content_hash_with(Some(self), strategy)
                }
            }
        )*
    };
}

impl_content_hash_ext!([T], Vec<T>, VecDeque<T>, LinkedList<T>, BTreeSet<T>);
