pub mod error;
pub mod format;
pub mod locale;
pub mod minor_units;
pub mod process;
pub mod round;

pub use error::FormatError;
pub use format::{format_amount, format_money, format_money_with};
pub use locale::Locale;

// Using named types doesn't provide any compiler help, but `DigitCount` says a
// lot more than a bare i32 in a signature. Negative counts are meaningful:
// -1 rounds to tens, -2 to hundreds, etc.
pub type DigitCount = i32;

// I decided to use a decimal library instead of f64 for every intermediate
// step, so that ceiling and truncation operate on the value as written
// (10.01 is 10.01, not 10.0099999...).
pub type Amount = rust_decimal::Decimal;

