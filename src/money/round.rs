use super::{error::FormatError, Amount, DigitCount};

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `amount` up (towards positive infinity) to the nearest multiple of
/// 10^(-digit_count).
///
/// A positive `digit_count` rounds to a fraction of a unit, e.g. `2` rounds up
/// to the next cent. A negative one rounds up to tens (`-1`), hundreds (`-2`)...
pub fn ceil_to(amount: Amount, digit_count: DigitCount) -> Result<Amount, FormatError> {
    if digit_count >= 0 {
        // Asking for more places than the amount carries leaves it untouched.
        return Ok(amount.round_dp_with_strategy(
            digit_count.unsigned_abs(),
            RoundingStrategy::ToPositiveInfinity,
        ));
    }

    let unit = match power_of_ten(digit_count.unsigned_abs()) {
        Some(unit) => unit,
        // The unit itself doesn't fit: anything above zero rounds up past the
        // Amount range, anything else rounds up to zero.
        None if amount > Decimal::ZERO => return Err(FormatError::Overflow),
        None => return Ok(Decimal::ZERO),
    };

    // Below one unit, the next multiple up is either the unit or zero.
    if amount.abs() < unit {
        return Ok(if amount > Decimal::ZERO {
            unit
        } else {
            Decimal::ZERO
        });
    }

    // The remainder is exact, unlike a quotient that may lose its last digits.
    let remainder = amount.checked_rem(unit).ok_or(FormatError::Overflow)?;
    let floor_towards_zero = amount - remainder;
    if remainder > Decimal::ZERO {
        floor_towards_zero
            .checked_add(unit)
            .ok_or(FormatError::Overflow)
    } else {
        Ok(floor_towards_zero)
    }
}

fn power_of_ten(exponent: u32) -> Option<Amount> {
    (0..exponent).try_fold(Decimal::ONE, |acc, _| acc.checked_mul(Decimal::TEN))
}
