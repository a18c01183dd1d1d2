use super::Amount;

use rust_decimal::RoundingStrategy;

/// Number of decimal places kept by a whole count of minor units (cents).
const MINOR_UNIT_PLACES: u32 = 2;

/// An amount holding a whole number of minor units (cents).
///
/// Anything finer than a cent is dropped on the way in, truncating towards
/// zero, so that the rendered amount only depends on whole cents. Amounts
/// that are already whole cents go through untouched, however large.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money {
    amount: Amount,
}

impl Money {
    pub fn from_major(amount: Amount) -> Self {
        Self {
            amount: amount.round_dp_with_strategy(MINOR_UNIT_PLACES, RoundingStrategy::ToZero),
        }
    }

    /// Get the amount back in major units.
    pub fn major(&self) -> Amount {
        self.amount
    }
}
