//! Price axis labels along the right edge of the chart.

use super::axis_volatility;
use crate::shared::{format_tick, Period, SENTINEL};

/// Five labels from top to bottom: max, upper mid, current, lower mid, min.
///
/// The band spans `current × (1 ± volatility)` for the period. Without a price
/// every label is the sentinel.
pub fn price_axis(current_price: Option<f64>, period: Period) -> [String; 5] {
    let Some(current) = current_price.filter(|p| p.is_finite()) else {
        return std::array::from_fn(|_| SENTINEL.to_string());
    };
    let range = axis_volatility(period);
    let max = current * (1.0 + range);
    let min = current * (1.0 - range);
    [
        max,
        current + (max - current) * 0.5,
        current,
        current - (current - min) * 0.5,
        min,
    ]
    .map(|p| format_tick(Some(p)))
}
