//! Abbreviated display of volumes and market caps.
//!
//! Values are moved into `rust_decimal::Decimal` before dividing so suffixed
//! figures (`47.16K`, `$3.8M`) round the way a human would expect rather than
//! inheriting binary floating-point residue.

use super::SENTINEL;
use rust_decimal::prelude::*;
use std::sync::OnceLock;

static MILLION: OnceLock<Decimal> = OnceLock::new();
static THOUSAND: OnceLock<Decimal> = OnceLock::new();

fn get_million() -> &'static Decimal {
    MILLION.get_or_init(|| Decimal::from(1_000_000u64))
}

fn get_thousand() -> &'static Decimal {
    THOUSAND.get_or_init(|| Decimal::from(1_000u64))
}

fn to_fixed(value: Decimal, digits: u32) -> String {
    let rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.precision$}", rounded, precision = digits as usize)
}

/// Abbreviate a share volume with K/M suffixes.
///
/// `>= 1M` → `"1.23M"`, `>= 1K` → `"47.16K"`, otherwise the plain number.
pub fn abbr_volume(volume: f64) -> String {
    let Some(amount) = Decimal::from_f64(volume) else {
        return SENTINEL.to_string();
    };

    let abs_amount = amount.abs();
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };

    if abs_amount >= *get_million() {
        format!("{}{}M", sign, to_fixed(abs_amount / get_million(), 2))
    } else if abs_amount >= *get_thousand() {
        format!("{}{}K", sign, to_fixed(abs_amount / get_thousand(), 2))
    } else {
        format!("{}{}", sign, abs_amount.normalize())
    }
}

/// Dollar figure in millions with one decimal (`3_849_792` → `"$3.8M"`).
pub fn dollars_in_millions(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(amount) => format!("${}M", to_fixed(amount / get_million(), 1)),
        None => SENTINEL.to_string(),
    }
}
