//! Sum of a slice.

use std::iter::Sum;

/// Returns the sum of `values`.
///
/// An empty slice sums to the type's zero.
///
/// # Examples
///
/// ```rust
/// use sundry::math::sum;
///
/// assert_eq!(sum(&[1, 2, 3]), 6);
/// assert_eq!(sum::<u64>(&[]), 0);
/// ```
#[must_use]
pub fn sum<T: Copy + Sum<T>>(values: &[T]) -> T {
    values.iter().copied().sum()
}
