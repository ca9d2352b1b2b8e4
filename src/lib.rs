//! # sundry
//!
//! Generic, dependency-light utilities that the standard library leaves out.
//!
//! ## Overview
//!
//! - **Set**: a hash-based [`Set`](crate::set::Set) with union, intersection,
//!   difference, symmetric difference, subset and disjointness tests, and
//!   `filter`/`map`/`forall`/`exists` combinators
//! - **Slices**: equality, order-preserving dedup, filter and map over slices
//! - **Math**: `min`, `max` and `sum` over slices of numbers
//! - **Text**: hexadecimal character and string classification
//!
//! ## Feature Flags
//!
//! - `set`: the [`Set`](crate::set::Set) type (enables `slices`)
//! - `slices`: slice helpers
//! - `math`: numeric reducers
//! - `text`: hexadecimal classification
//! - `fxhash`: use `rustc-hash` as the default set hasher
//! - `ahash`: use `ahash` as the default set hasher
//! - `full`: enable all modules and `fxhash`
//!
//! ## Example
//!
//! ```rust
//! use sundry::prelude::*;
//!
//! let evens = set![2, 4, 6];
//! let small = set![1, 2, 3];
//!
//! assert_eq!(evens.intersection(&small), set![2]);
//! assert!(is_hex("c0ffee"));
//! assert_eq!(max(&[3, 9, 4]), Ok(9));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module. The `slices` and `math` helpers are
/// re-exported under their module names since their function names
/// (`filter`, `map`, `min`, ...) are common.
///
/// # Usage
///
/// ```rust
/// use sundry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "set")]
    pub use crate::set;
    #[cfg(feature = "set")]
    pub use crate::set::{Set, SetIntoIterator, SetIterator};

    #[cfg(feature = "slices")]
    pub use crate::slices;

    #[cfg(feature = "math")]
    pub use crate::math::{max, min, sum};

    #[cfg(feature = "text")]
    pub use crate::text::*;
}

pub mod error;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "slices")]
pub mod slices;

#[cfg(feature = "math")]
pub mod math;

#[cfg(feature = "text")]
pub mod text;
