//! Unordered sets of unique elements and their algebra.
//!
//! This module provides [`Set`], a mutable hash set backed by a
//! presence-only `HashMap<T, ()>`, and free functions mirroring its
//! binary operations:
//!
//! - [`union`], [`intersection`], [`difference`]
//! - [`disjoint_union`]: elements in exactly one of two sets
//! - [`equal`], [`disjoint`]
//! - [`filter`], [`map`]
//!
//! # Ownership
//!
//! Operations that produce a set (`union`, `intersection`, `filter`, `map`,
//! `clone`, ...) always allocate a fresh container. The result never shares
//! storage with its inputs, so mutating it leaves the inputs untouched.
//!
//! # Hashing
//!
//! The hash builder defaults to [`DefaultHashBuilder`], chosen at compile time:
//!
//! | Feature   | `DefaultHashBuilder`                         |
//! |-----------|----------------------------------------------|
//! | (none)    | `std::collections::hash_map::RandomState`    |
//! | `fxhash`  | `rustc_hash::FxBuildHasher`                  |
//! | `ahash`   | `ahash::RandomState`                         |
//!
//! When both `fxhash` and `ahash` are enabled, `ahash` wins.
//!
//! # Examples
//!
//! ```rust
//! use sundry::set;
//! use sundry::set::Set;
//!
//! let mut primes = set![2, 3, 5, 7];
//! let odds: Set<i32> = (1..10).filter(|x| x % 2 == 1).collect();
//!
//! assert_eq!(primes.intersection(&odds), set![3, 5, 7]);
//! assert_eq!(set::disjoint_union(&primes, &odds), set![1, 2, 9]);
//!
//! primes.insert(11);
//! assert!(primes.has(&11));
//! ```

mod algebra;
mod hash_set;

pub use algebra::{difference, disjoint, disjoint_union, equal, filter, intersection, map, union};
pub use hash_set::{Set, SetIntoIterator, SetIterator};

// =============================================================================
// Default Hash Builder
// =============================================================================

/// Hash builder used by [`Set`] when none is specified.
///
/// When the `ahash` feature is enabled, this is `ahash::RandomState`.
#[cfg(feature = "ahash")]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by [`Set`] when none is specified.
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`,
/// which is faster but deterministic and not resistant to HashDoS.
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`Set`] when none is specified.
///
/// Without a fast-hash feature this is the standard library's `RandomState`.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// Creates a [`Set`] containing the given elements.
///
/// Duplicates are collapsed, so `set![1, 1, 2]` has two elements.
///
/// # Examples
///
/// ```rust
/// use sundry::set;
/// use sundry::set::Set;
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
///
/// let numbers = set![1, 2, 2, 3];
/// assert_eq!(numbers.len(), 3);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::set::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::set::Set::from_elements([$($element),+])
    };
}
