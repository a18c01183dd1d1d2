use crate::money::{DigitCount, Locale};

use std::env;

pub const DIGITS_VAR: &str = "MONEY_FORMATTER_DIGITS";
pub const LOCALE_VAR: &str = "MONEY_FORMATTER_LOCALE";
pub const LOG_VAR: &str = "MONEY_FORMATTER_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Used for rows that leave the `digits` cell empty.
    pub default_digit_count: DigitCount,
    pub locale: Locale,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_digit_count: 0,
            locale: Locale::DISPLAY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from the environment, loading `.env` first if
    /// there is one.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let default_digit_count = match var(DIGITS_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<DigitCount>()
                .map_err(|_| anyhow::anyhow!("invalid {} value: {:?}", DIGITS_VAR, raw))?,
            None => defaults.default_digit_count,
        };

        let locale = match var(LOCALE_VAR) {
            Some(raw) => Locale::from_tag(&raw)
                .ok_or_else(|| anyhow::anyhow!("unsupported {} value: {:?}", LOCALE_VAR, raw))?,
            None => defaults.locale,
        };

        let log_filter = var(LOG_VAR).unwrap_or(defaults.log_filter);

        Ok(Self {
            default_digit_count,
            locale,
            log_filter,
        })
    }
}
