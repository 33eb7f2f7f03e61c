//! Synthetic path generator.

use super::{profile, VolatilityBand, Waypoint, CHART_HEIGHT, CHART_WIDTH};
use crate::shared::Period;
use std::fmt::Write;

/// Waypoints for `period` anchored on `current_price`.
///
/// Empty when the price is absent or non-finite, and for periods with no
/// synthetic data. Otherwise the last point is exactly `(800, 100)`.
pub fn build_path(current_price: Option<f64>, period: Period) -> Vec<Waypoint> {
    let (Some(price), Some(shape)) = (current_price.filter(|p| p.is_finite()), profile(period))
    else {
        return Vec::new();
    };
    let band = VolatilityBand::new(price, shape.volatility);
    shape
        .anchors
        .iter()
        .map(|&(x, k)| Waypoint::new(x, band.y_for(k)))
        .collect()
}

/// SVG path data for the line: `M x,y L x,y ...`. Empty for no waypoints.
pub fn svg_line_path(points: &[Waypoint]) -> String {
    let mut d = String::with_capacity(points.len() * 12);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{} {},{}", cmd, p.x, p.y);
    }
    d
}

/// SVG path data for the filled area under the line, closed along the bottom edge.
pub fn svg_area_path(points: &[Waypoint]) -> String {
    if points.is_empty() {
        return String::new();
    }
    format!(
        "{} L {},{} L 0,{} Z",
        svg_line_path(points),
        CHART_WIDTH,
        CHART_HEIGHT,
        CHART_HEIGHT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::BASELINE_Y;

    #[test]
    fn test_intraday_path() {
        let path = build_path(Some(2.715), Period::Day1);
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Waypoint::new(0.0, 104.0));
        assert_eq!(path[3], Waypoint::new(300.0, 102.0));
        assert_eq!(path[8], Waypoint::new(CHART_WIDTH, BASELINE_Y));
    }

    #[test]
    fn test_weekly_path() {
        let path = build_path(Some(0.45), Period::Week1);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Waypoint::new(0.0, 104.0));
        assert_eq!(path[2], Waypoint::new(400.0, 101.5));
        assert_eq!(path[4], Waypoint::new(CHART_WIDTH, BASELINE_Y));
    }

    #[test]
    fn test_path_ignores_price_magnitude() {
        assert_eq!(
            build_path(Some(0.2), Period::Day1),
            build_path(Some(250.0), Period::Day1)
        );
    }

    #[test]
    fn test_no_data_periods_are_empty() {
        for p in [Period::Month1, Period::Month3, Period::Year1, Period::All] {
            assert!(build_path(Some(2.715), p).is_empty());
        }
    }

    #[test]
    fn test_missing_price_is_empty() {
        assert!(build_path(None, Period::Day1).is_empty());
        assert!(build_path(Some(f64::NAN), Period::Week1).is_empty());
    }

    #[test]
    fn test_svg_paths() {
        let path = build_path(Some(1.0), Period::Week1);
        assert_eq!(
            svg_line_path(&path),
            "M 0,104 L 200,103 L 400,101.5 L 600,100.5 L 800,100"
        );
        assert_eq!(
            svg_area_path(&path),
            "M 0,104 L 200,103 L 400,101.5 L 600,100.5 L 800,100 L 800,200 L 0,200 Z"
        );
        assert_eq!(svg_line_path(&[]), "");
        assert_eq!(svg_area_path(&[]), "");
    }
}
