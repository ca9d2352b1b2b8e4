//! Minimum and maximum of a slice.

use crate::error::EmptyInputError;

/// Returns the smallest value in `values`.
///
/// The running minimum is only replaced by a strictly smaller value, so the
/// first of several equal minima is returned and values that do not compare
/// (such as `NaN`) never replace it.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `values` is empty.
///
/// # Examples
///
/// ```rust
/// use sundry::math::min;
///
/// assert_eq!(min(&[3, 1, 2]), Ok(1));
/// assert_eq!(min(&["pear", "apple"]), Ok("apple"));
/// ```
pub fn min<T: PartialOrd + Copy>(values: &[T]) -> Result<T, EmptyInputError> {
    select(values, "min", |candidate, current| candidate < current)
}

/// Returns the largest value in `values`.
///
/// Ties and incomparable values are handled as in [`min`].
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `values` is empty.
pub fn max<T: PartialOrd + Copy>(values: &[T]) -> Result<T, EmptyInputError> {
    select(values, "max", |candidate, current| candidate > current)
}

/// Keeps the first value and replaces it whenever `replaces` holds.
fn select<T, F>(values: &[T], operation: &'static str, replaces: F) -> Result<T, EmptyInputError>
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| EmptyInputError::new(operation))?;
    Ok(rest.iter().fold(*first, |current, candidate| {
        if replaces(candidate, &current) {
            *candidate
        } else {
            current
        }
    }))
}
