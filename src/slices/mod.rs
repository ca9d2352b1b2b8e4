//! Helpers over slices.
//!
//! Every function here borrows its input and returns a freshly allocated
//! `Vec` (or a `bool`); the input is never modified.
//!
//! - [`equal`]: element-wise equality
//! - [`unique`]: drop repeated elements, keeping first occurrences in order
//! - [`filter`]: keep the elements that satisfy a predicate
//! - [`map`]: apply a function to every element
//!
//! # Examples
//!
//! ```rust
//! use sundry::slices;
//!
//! let values = [3, 1, 3, 2, 1];
//!
//! assert_eq!(slices::unique(&values), vec![3, 1, 2]);
//! assert_eq!(slices::filter(&values, |x| *x > 1), vec![3, 3, 2]);
//! assert_eq!(slices::map(&values, |x| x * 10), vec![30, 10, 30, 20, 10]);
//! assert!(slices::equal(&values, &[3, 1, 3, 2, 1]));
//! ```

use std::collections::HashSet;
use std::hash::Hash;

/// Returns `true` if both slices have the same length and equal elements at
/// every position.
#[inline]
#[must_use]
pub fn equal<T: PartialEq>(first: &[T], second: &[T]) -> bool {
    first.len() == second.len() && first.iter().zip(second).all(|(left, right)| left == right)
}

/// Returns the elements of `values` with repeats removed.
///
/// The first occurrence of each element is kept, in its original position
/// relative to the other kept elements.
///
/// # Examples
///
/// ```rust
/// use sundry::slices;
///
/// assert_eq!(slices::unique(&["b", "a", "b"]), vec!["b", "a"]);
/// assert!(slices::unique::<i32>(&[]).is_empty());
/// ```
#[must_use]
pub fn unique<T: Hash + Eq + Clone>(values: &[T]) -> Vec<T> {
    let mut occurred: HashSet<&T> = HashSet::with_capacity(values.len());
    values
        .iter()
        .filter(|value| occurred.insert(*value))
        .cloned()
        .collect()
}

/// Returns the elements of `values` that satisfy `predicate`, in order.
#[must_use]
pub fn filter<T, P>(values: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    values
        .iter()
        .filter(|value| predicate(value))
        .cloned()
        .collect()
}

/// Returns the images of `values` under `function`, in order.
///
/// The result always has the same length as `values`.
#[must_use]
pub fn map<A, B, F>(values: &[A], function: F) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    values.iter().map(function).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[], true)]
    #[case(&[1, 2, 3], &[1, 2, 3], true)]
    #[case(&[1, 2, 3], &[1, 2], false)]
    #[case(&[1, 2, 3], &[3, 2, 1], false)]
    fn test_equal(#[case] first: &[i32], #[case] second: &[i32], #[case] expected: bool) {
        assert_eq!(equal(first, second), expected);
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1, 1, 1], &[1])]
    #[case(&[4, 2, 4, 3, 2], &[4, 2, 3])]
    fn test_unique(#[case] values: &[i32], #[case] expected: &[i32]) {
        assert_eq!(unique(values), expected);
    }

    #[rstest]
    fn test_filter_preserves_order() {
        let values = ["apple", "kiwi", "banana", "fig"];
        assert_eq!(filter(&values, |word| word.len() > 3), vec!["apple", "kiwi", "banana"]);
    }

    #[rstest]
    fn test_filter_nothing_matches() {
        assert!(filter(&[1, 3, 5], |x| x % 2 == 0).is_empty());
    }

    #[rstest]
    fn test_map_changes_type() {
        let lengths = map(&["a", "bb", "ccc"], |word| word.len());
        assert_eq!(lengths, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_map_empty() {
        let mapped: Vec<String> = map(&[] as &[i32], |value| value.to_string());
        assert!(mapped.is_empty());
    }
}
