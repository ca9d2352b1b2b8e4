//! Error types shared across the crate.
//!
//! Most operations in this crate are total. The exceptions are reducers that
//! have no meaningful answer for an empty input, which report
//! [`EmptyInputError`] instead of panicking or returning a sentinel value.

/// Represents an error when an operation that needs at least one value is
/// given none.
///
/// # Examples
///
/// ```rust
/// use sundry::error::EmptyInputError;
///
/// let error = EmptyInputError { operation: "min" };
/// assert_eq!(format!("{}", error), "min: no values given");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyInputError {
    /// The name of the operation that received the empty input.
    pub operation: &'static str,
}

impl EmptyInputError {
    /// Creates an error for the named operation.
    #[inline]
    #[must_use]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl std::fmt::Display for EmptyInputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: no values given", self.operation)
    }
}

impl std::error::Error for EmptyInputError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("min", "min: no values given")]
    #[case("max", "max: no values given")]
    fn test_empty_input_error_display(#[case] operation: &'static str, #[case] expected: &str) {
        let error = EmptyInputError::new(operation);
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_empty_input_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(EmptyInputError::new("max"));
        assert_eq!(error.to_string(), "max: no values given");
        assert!(error.source().is_none());
    }
}
