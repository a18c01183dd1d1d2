use super::{error::FormatError, Amount};

use num_format::ToFormattedString;
use rust_decimal::{prelude::ToPrimitive, RoundingStrategy};

/// Digit grouping convention used to render whole amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    format: num_format::Locale,
}

impl Locale {
    /// The fixed convention `format_money` renders with: "1,500".
    pub const DISPLAY: Self = Self {
        format: num_format::Locale::en,
    };

    /// Colombian Spanish grouping: "1.500".
    pub const ES_CO: Self = Self {
        format: num_format::Locale::es_CO,
    };

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "display" => Some(Self::DISPLAY),
            "es-CO" | "es_CO" => Some(Self::ES_CO),
            _ => None,
        }
    }

    /// Render `amount` with no fraction digits at all.
    ///
    /// Whatever fraction is left is rounded half away from zero, then the
    /// integer digits are grouped by thousands.
    pub fn format_whole(&self, amount: Amount) -> Result<String, FormatError> {
        let whole = amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i128()
            .ok_or(FormatError::Overflow)?;

        Ok(whole.to_formatted_string(&self.format))
    }
}

#[cfg(test)]
mod locale_tests {
    use super::Locale;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn display(amount: Decimal) -> String {
        Locale::DISPLAY.format_whole(amount).unwrap()
    }

    #[test]
    fn test_format_whole_display() {
        for (amount, want) in vec![
            (dec!(0), "0"),
            (dec!(7), "7"),
            (dec!(999), "999"),
            (dec!(1000), "1,000"),
            (dec!(1500), "1,500"),
            (dec!(123456), "123,456"),
            (dec!(1234567), "1,234,567"),
            (dec!(1000000000000), "1,000,000,000,000"),
            (dec!(-1234), "-1,234"),
        ] {
            assert_eq!(want, display(amount));
        }
    }

    #[test]
    // Both minimum and maximum fraction digits are 0: the fraction is rounded away.
    fn test_format_whole_rounds_fraction() {
        for (amount, want) in vec![
            (dec!(1234.49), "1,234"),
            (dec!(1234.5), "1,235"),
            (dec!(999.5), "1,000"),
            (dec!(-2.5), "-3"),
            (dec!(0.00), "0"),
        ] {
            assert_eq!(want, display(amount));
        }
    }

    #[test]
    // A browser's toLocaleString prints "-0" here. A price display has no use
    // for a signed zero, so it is always rendered unsigned.
    fn test_format_whole_zero_is_unsigned() {
        assert_eq!("0", display(dec!(-0.4)));
        assert_eq!("0", display(-Decimal::ZERO));
        assert_eq!("0", Locale::ES_CO.format_whole(dec!(-0.1)).unwrap());
    }

    #[test]
    fn test_format_whole_largest_amount() {
        assert_eq!(
            "79,228,162,514,264,337,593,543,950,335",
            display(Decimal::MAX)
        );
    }

    #[test]
    fn test_format_whole_es_co() {
        for (amount, want) in vec![
            (dec!(950), "950"),
            (dec!(1500), "1.500"),
            (dec!(12345678), "12.345.678"),
            (dec!(-35000), "-35.000"),
        ] {
            assert_eq!(want, Locale::ES_CO.format_whole(amount).unwrap());
        }
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Some(Locale::DISPLAY), Locale::from_tag("display"));
        assert_eq!(Some(Locale::ES_CO), Locale::from_tag("es-CO"));
        assert_eq!(Some(Locale::ES_CO), Locale::from_tag(" es_CO "));
        assert_eq!(None, Locale::from_tag("fr-FR"));
    }
}
