//! Number formatting utilities for human-readable display.
//!
//! Handles integer counts with thousands separators and percentages.
//! For abbreviated volumes and market caps, use the `decimal` sibling module.

use super::SENTINEL;

/// Adds thousands separators to the integer part of an already-formatted number.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer_part, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let grouped = integer_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Whole count with separators (`1234567` → `"1,234,567"`).
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// [`format_count`], or the sentinel when absent.
pub fn format_optional_count(value: Option<u64>) -> String {
    value.map(format_count).unwrap_or_else(|| SENTINEL.to_string())
}

/// Percentage with explicit decimal places (`2.0408` → `"2.04%"`).
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return SENTINEL.to_string();
    }
    format!("{:.1$}%", value, decimals)
}

/// Percentage with an explicit `+` on gains.
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    if value > 0.0 {
        format!("+{}", format_percent(value, decimals))
    } else {
        format_percent(value, decimals)
    }
}

/// Plain float with explicit decimals, or the sentinel when absent.
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.1$}", v, decimals),
        _ => SENTINEL.to_string(),
    }
}
