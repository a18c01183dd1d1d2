use super::{
    error::FormatError, locale::Locale, minor_units::Money, round::ceil_to, Amount, DigitCount,
};

use rust_decimal::Decimal;
use std::str::FromStr;

/// Round `value` up to the nearest multiple of 10^(-digit_count), and render
/// it as a grouped currency string without any decimals.
///
/// ```
/// use money_formatter::format_money;
///
/// assert_eq!(Ok("20".to_string()), format_money(10.01, -1));
/// assert_eq!(Ok("1,500".to_string()), format_money(1500.0, -2));
/// ```
pub fn format_money(value: f64, digit_count: DigitCount) -> Result<String, FormatError> {
    format_money_with(value, digit_count, &Locale::DISPLAY)
}

pub fn format_money_with(
    value: f64,
    digit_count: DigitCount,
    locale: &Locale,
) -> Result<String, FormatError> {
    format_amount(to_amount(value)?, digit_count, locale)
}

/// Same as `format_money`, for an amount that is already an `Amount`.
pub fn format_amount(
    amount: Amount,
    digit_count: DigitCount,
    locale: &Locale,
) -> Result<String, FormatError> {
    let rounded = ceil_to(amount, digit_count)?;
    let money = Money::from_major(rounded);

    locale.format_whole(money.major())
}

// Go through the shortest decimal rendering of the float, so the amount is the
// number as it was written (10.01) rather than its binary approximation.
pub fn to_amount(value: f64) -> Result<Amount, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite(value));
    }

    let amount =
        Amount::from_str(&value.to_string()).map_err(|_| FormatError::OutOfRange(value))?;

    // Past 28 decimal places the parse rounds to zero. A positive value has to
    // stay positive, or rounding it up would give zero instead of one unit.
    if value > 0.0 && amount.is_zero() {
        return Ok(Decimal::new(1, 28));
    }

    Ok(amount)
}
