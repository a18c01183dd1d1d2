//! Rounds amounts up to a given precision, and renders them as grouped,
//! zero-decimal currency strings.
//!
//! money: the formatter itself (ceiling, minor units, grouping).
//! input / output / run: a CSV batch driver around it.

pub mod config;
pub mod error_handler;
pub mod input;
pub mod logger;
pub mod money;
pub mod output;
pub mod run;

pub use money::{format_money, FormatError};
