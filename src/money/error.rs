use std::fmt;

/// Note: errors stay simple, the caller already knows which value it passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatError {
    /// The value is NaN or infinite.
    NonFinite(f64),

    /// The value is finite, but too large to be represented as an Amount.
    OutOfRange(f64),

    /// Rounding up, or converting to minor units, went past the Amount range.
    Overflow,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(value) => write!(f, "cannot format non-finite value {}", value),
            Self::OutOfRange(value) => write!(f, "value {} is out of range", value),
            Self::Overflow => write!(f, "amount overflowed while rounding"),
        }
    }
}

impl std::error::Error for FormatError {}

#[test]
fn test_format_error_display() {
    for (err, want) in vec![
        (
            FormatError::NonFinite(f64::NAN),
            "cannot format non-finite value NaN",
        ),
        (
            FormatError::NonFinite(f64::NEG_INFINITY),
            "cannot format non-finite value -inf",
        ),
        (FormatError::OutOfRange(1e30), "value 1000000000000000000000000000000 is out of range"),
        (FormatError::Overflow, "amount overflowed while rounding"),
    ] {
        assert_eq!(want, err.to_string());
    }
}
