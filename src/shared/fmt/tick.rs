//! Tick formatter: prices rounded to the exchange's $0.005 increment.
//!
//! This is the single price formatter: stat tiles, axis labels, trade rows and
//! the hover locator all go through [`format_tick`].

use super::SENTINEL;

/// Minimum price increment on the venue.
pub const TICK_SIZE: f64 = 0.005;

const TICKS_PER_UNIT: f64 = 200.0;

/// Largest tick count that still round-trips exactly through `f64`.
const MAX_EXACT_TICKS: f64 = 9_007_199_254_740_992.0;

/// Number of whole ticks nearest to `price`.
fn tick_count(price: f64) -> Option<i64> {
    if !price.is_finite() {
        return None;
    }
    let ticks = (price * TICKS_PER_UNIT).round();
    if ticks.abs() >= MAX_EXACT_TICKS {
        return None;
    }
    Some(ticks as i64)
}

/// Round to the nearest multiple of [`TICK_SIZE`]. `None` for non-finite input.
pub fn round_to_tick(price: f64) -> Option<f64> {
    if !price.is_finite() {
        return None;
    }
    Some((price * TICKS_PER_UNIT).round() / TICKS_PER_UNIT)
}

/// Render a whole number of ticks: two decimals on a full cent, three on a half cent.
fn render_ticks(ticks: i64) -> String {
    let rounded = ticks as f64 / TICKS_PER_UNIT;
    if ticks % 2 == 0 {
        format!("{:.2}", rounded)
    } else {
        format!("{:.3}", rounded)
    }
}

/// Format a price for display.
///
/// `format_tick(Some(1.2345))` → `"1.235"`, `format_tick(Some(1.2))` → `"1.20"`,
/// `format_tick(None)` → `"--"`.
pub fn format_tick(price: Option<f64>) -> String {
    match price {
        Some(p) => match tick_count(p) {
            Some(ticks) => render_ticks(ticks),
            // Beyond exact integer range every float is already a whole cent.
            None if p.is_finite() => format!("{:.2}", p),
            None => SENTINEL.to_string(),
        },
        None => SENTINEL.to_string(),
    }
}

/// Format a price move with an explicit `+` on gains.
///
/// Negative moves keep their native `-`; a move that rounds to zero renders unsigned.
pub fn format_signed_tick(delta: Option<f64>) -> String {
    match delta.and_then(tick_count) {
        Some(ticks) if ticks > 0 => format!("+{}", render_ticks(ticks)),
        Some(ticks) => render_ticks(ticks),
        None => format_tick(delta),
    }
}

/// Whether a price move survives tick rounding.
pub(crate) fn is_nonzero_tick(delta: f64) -> bool {
    matches!(tick_count(delta), Some(t) if t != 0)
}
