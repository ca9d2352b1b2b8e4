//! Free-function forms of the binary set operations.
//!
//! Each function delegates to the corresponding [`Set`] method. They exist for
//! call sites that read better with both operands as arguments, e.g.
//! `set::union(&a, &b)`.

use std::hash::{BuildHasher, Hash};

use super::Set;

/// Returns `true` if both sets have the same elements.
///
/// Two empty sets are equal regardless of how they were built.
///
/// # Examples
///
/// ```rust
/// use sundry::set;
/// use sundry::set::Set;
///
/// assert!(set::equal(&set![1, 2], &set![2, 1]));
/// assert!(set::equal(&Set::<i32>::new(), &Set::default()));
/// ```
#[must_use]
pub fn equal<T, S>(first: &Set<T, S>, second: &Set<T, S>) -> bool
where
    T: Hash + Eq,
    S: BuildHasher,
{
    first == second
}

/// Returns `true` if the sets have no element in common.
#[must_use]
pub fn disjoint<T, S>(first: &Set<T, S>, second: &Set<T, S>) -> bool
where
    T: Hash + Eq,
    S: BuildHasher,
{
    first.is_disjoint(second)
}

/// Returns a new set with every element of either set.
#[must_use]
pub fn union<T, S>(first: &Set<T, S>, second: &Set<T, S>) -> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    first.union(second)
}

/// Returns a new set with the elements present in both sets.
#[must_use]
pub fn intersection<T, S>(first: &Set<T, S>, second: &Set<T, S>) -> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    first.intersection(second)
}

/// Returns a new set with the elements of `first` absent from `second`.
///
/// # Examples
///
/// ```rust
/// use sundry::set;
///
/// let result = set::difference(&set![1, 2, 3, 4], &set![3, 4, 5]);
/// assert_eq!(result, set![1, 2]);
/// ```
#[must_use]
pub fn difference<T, S>(first: &Set<T, S>, second: &Set<T, S>) -> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    first.difference(second)
}

/// Returns the disjoint union of two sets: the elements that belong to
/// exactly one of them.
///
/// This is the union of both one-sided differences, i.e. the symmetric
/// difference. Use [`difference`] for the elements of `first` only.
///
/// # Examples
///
/// ```rust
/// use sundry::set;
///
/// let result = set::disjoint_union(&set![1, 2, 3, 4], &set![3, 4, 5]);
/// assert_eq!(result, set![1, 2, 5]);
/// ```
#[must_use]
pub fn disjoint_union<T, S>(first: &Set<T, S>, second: &Set<T, S>) -> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    first.symmetric_difference(second)
}

/// Returns a new set with the elements of `set` that satisfy `predicate`.
#[must_use]
pub fn filter<T, S, P>(set: &Set<T, S>, predicate: P) -> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
    P: FnMut(&T) -> bool,
{
    set.filter(predicate)
}

/// Returns a new set with the images of the elements of `set` under
/// `function`.
#[must_use]
pub fn map<T, U, S, F>(set: &Set<T, S>, function: F) -> Set<U, S>
where
    U: Hash + Eq,
    S: BuildHasher + Clone,
    F: FnMut(&T) -> U,
{
    set.map(function)
}
