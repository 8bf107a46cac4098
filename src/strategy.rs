//! Equality strategies — pluggable `equals` / `hash` capabilities.
//!
//! A strategy must be consistent: `equals(a, b)` implies
//! `hash(a) == hash(b)`.

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

/// Caller-supplied equality and hashing for values of type `T`.
pub trait EqualityStrategy<T: ?Sized> {
    /// Returns `true` if `a` and `b` are equal under this strategy.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Returns the 32-bit hash of `value`.
    fn hash(&self, value: &T) -> i32;
}

impl<T: ?Sized, S: EqualityStrategy<T> + ?Sized> EqualityStrategy<T> for &S {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn hash(&self, value: &T) -> i32 {
        (**self).hash(value)
    }
}

/// Computes the 64-bit hash of a value using the standard hasher.
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Folds a 64-bit hash to 32 bits: `low ⊕ high`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn fold64(hash: u64) -> i32 {
    (hash ^ (hash >> 32)) as i32
}

// ---------------------------------------------------------------------------
// StructuralStrategy — the default
// ---------------------------------------------------------------------------

/// Structural 32-bit hash used by [`StructuralStrategy`].
///
/// The provided method folds the standard [`Hash`] digest. `Option<T>`
/// overrides it so that `None` hashes to `0` and `Some(v)` hashes as `v`.
/// Types deriving `Hash` and `Eq` opt in with an empty impl.
pub trait StructuralHash: Hash + Eq {
    /// Returns the structural hash of `self`.
    fn structural_hash(&self) -> i32 {
        fold64(hash_one(self))
    }
}

macro_rules! structural_plain {
    ($($t:ty),*) => {
        $(impl StructuralHash for $t {})*
    };
}

structural_plain!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), str, String
);

macro_rules! structural_generic {
    ($($t:ty),*) => {
        $(impl<T: Hash + Eq> StructuralHash for $t {})*
    };
}

structural_generic!([T], Vec<T>, VecDeque<T>, LinkedList<T>, BTreeSet<T>);

impl<T: Hash + Eq, const N: usize> StructuralHash for [T; N] {}

impl<K: Hash + Eq, V: Hash + Eq> StructuralHash for BTreeMap<K, V> {}

impl<A: Hash + Eq, B: Hash + Eq> StructuralHash for (A, B) {}

impl<A: Hash + Eq, B: Hash + Eq, C: Hash + Eq> StructuralHash for (A, B, C) {}

impl<T: StructuralHash + ?Sized> StructuralHash for &T {
    fn structural_hash(&self) -> i32 {
        (**self).structural_hash()
    }
}

impl<T: StructuralHash + ?Sized> StructuralHash for Box<T> {
    fn structural_hash(&self) -> i32 {
        (**self).structural_hash()
    }
}

impl<T: StructuralHash + ?Sized> StructuralHash for Rc<T> {
    fn structural_hash(&self) -> i32 {
        (**self).structural_hash()
    }
}

impl<T: StructuralHash + ?Sized> StructuralHash for Arc<T> {
    fn structural_hash(&self) -> i32 {
        (**self).structural_hash()
    }
}

impl<T: StructuralHash> StructuralHash for Option<T> {
    fn structural_hash(&self) -> i32 {
        self.as_ref().map_or(0, T::structural_hash)
    }
}

/// Default strategy: structural `==` and [`StructuralHash`].
///
/// Values are compared by content, never by address. An absent element
/// (`None`) hashes to `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralStrategy;

impl<T: StructuralHash + ?Sized> EqualityStrategy<T> for StructuralStrategy {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash(&self, value: &T) -> i32 {
        value.structural_hash()
    }
}

// ---------------------------------------------------------------------------
// IntrinsicStrategy — natural hashes of scalars
// ---------------------------------------------------------------------------

/// Natural 32-bit hash of a scalar, independent of any hasher state.
///
/// `7_i32.intrinsic_hash() == 7`.
pub trait IntrinsicHash {
    /// Returns the natural hash of `self`.
    fn intrinsic_hash(&self) -> i32;
}

macro_rules! intrinsic_narrow {
    ($($t:ty),*) => {
        $(
            impl IntrinsicHash for $t {
                #[allow(clippy::cast_possible_wrap, clippy::cast_lossless)]
                fn intrinsic_hash(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

intrinsic_narrow!(i8, i16, u8, u16, u32);

impl IntrinsicHash for i32 {
    fn intrinsic_hash(&self) -> i32 {
        *self
    }
}

macro_rules! intrinsic_wide {
    ($($t:ty),*) => {
        $(
            impl IntrinsicHash for $t {
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                fn intrinsic_hash(&self) -> i32 {
                    fold64(*self as u64)
                }
            }
        )*
    };
}

intrinsic_wide!(i64, isize, usize);

impl IntrinsicHash for u64 {
    fn intrinsic_hash(&self) -> i32 {
        fold64(*self)
    }
}

impl IntrinsicHash for bool {
    fn intrinsic_hash(&self) -> i32 {
        i32::from(*self)
    }
}

impl IntrinsicHash for char {
    #[allow(clippy::cast_possible_wrap)]
    fn intrinsic_hash(&self) -> i32 {
        u32::from(*self) as i32
    }
}

/// Strategy over [`IntrinsicHash`] scalars with `==` equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntrinsicStrategy;

impl<T: IntrinsicHash + PartialEq> EqualityStrategy<T> for IntrinsicStrategy {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash(&self, value: &T) -> i32 {
        value.intrinsic_hash()
    }
}

// ---------------------------------------------------------------------------
// Adapters
// ---------------------------------------------------------------------------

/// Lifts a strategy over `T` to `Option<T>`.
///
/// An absent element hashes to `0`; two absent elements are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nullable<S>(pub S);

impl<T, S: EqualityStrategy<T>> EqualityStrategy<Option<T>> for Nullable<S> {
    fn equals(&self, a: &Option<T>, b: &Option<T>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.0.equals(a, b),
            _ => false,
        }
    }

    fn hash(&self, value: &Option<T>) -> i32 {
        value.as_ref().map_or(0, |v| self.0.hash(v))
    }
}

/// Strategy built from a hash closure; equality is `==`.
///
/// The closure must agree with `PartialEq` on `T`.
#[derive(Clone, Copy)]
pub struct FnStrategy<F>(pub F);

impl<T: PartialEq + ?Sized, F: Fn(&T) -> i32> EqualityStrategy<T> for FnStrategy<F> {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash(&self, value: &T) -> i32 {
        (self.0)(value)
    }
}

impl<F> std::fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStrategy").finish_non_exhaustive()
    }
}
