//! Numeric reducers over slices.
//!
//! - [`min`] / [`max`]: the extreme value of a non-empty slice
//! - [`sum`]: the total of a slice, zero when empty
//!
//! `min` and `max` have no answer for an empty slice and report
//! [`EmptyInputError`](crate::error::EmptyInputError) rather than panicking.
//!
//! # Examples
//!
//! ```rust
//! use sundry::math;
//!
//! let readings = [2.5, -1.0, 4.0];
//!
//! assert_eq!(math::min(&readings), Ok(-1.0));
//! assert_eq!(math::max(&readings), Ok(4.0));
//! assert_eq!(math::sum(&readings), 5.5);
//! assert!(math::max::<i32>(&[]).is_err());
//! ```

mod extrema;
mod sum;

pub use extrema::{max, min};
pub use sum::sum;
