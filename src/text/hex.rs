//! Hexadecimal classification.

/// Returns `true` if `character` is `0-9`, `a-f` or `A-F`.
///
/// Only ASCII digits qualify; full-width or other Unicode digits do not.
#[inline]
#[must_use]
pub const fn is_hex_char(character: char) -> bool {
    character.is_ascii_hexdigit()
}

/// Returns `true` if every character of `text` is hexadecimal.
///
/// Accepts `&str`, `String` and anything else implementing `AsRef<str>`.
/// The empty string contains no offending character and is therefore
/// hexadecimal. Prefixes such as `0x` are not recognized.
///
/// # Examples
///
/// ```rust
/// use sundry::text::is_hex;
///
/// assert!(is_hex("0123456789abcdefABCDEF"));
/// assert!(is_hex(String::from("ff")));
/// assert!(is_hex(""));
/// assert!(!is_hex("fg"));
/// ```
#[must_use]
pub fn is_hex<S: AsRef<str>>(text: S) -> bool {
    text.as_ref().chars().all(is_hex_char)
}
