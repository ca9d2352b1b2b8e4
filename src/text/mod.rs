//! Character and string classification.
//!
//! Currently limited to hexadecimal digits: [`is_hex_char`] for a single
//! `char` and [`is_hex`] for anything that can be viewed as a `&str`.
//!
//! # Examples
//!
//! ```rust
//! use sundry::text::{is_hex, is_hex_char};
//!
//! assert!(is_hex_char('F'));
//! assert!(is_hex("deadBEEF"));
//! assert!(!is_hex("0x1f"));
//! ```

mod hex;

pub use hex::{is_hex, is_hex_char};
