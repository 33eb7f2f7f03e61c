//! Chart domain: synthetic price path, hover locator and price axis.
//!
//! The drawing surface is a fixed 800×200 viewBox. `y = 100` is the live price;
//! every other vertical position is an offset scaled by the period's volatility.
//! [`VolatilityBand`] owns both directions of that mapping so the path generator
//! and the locator can never disagree.

pub mod axis;
pub mod locate;
pub mod path;

use crate::shared::Period;
use serde::{Deserialize, Serialize};

pub use axis::price_axis;
pub use locate::{locate, ChartView, HoverState};
pub use path::{build_path, svg_area_path, svg_line_path};

pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 200.0;
/// Vertical position of the live price.
pub const BASELINE_Y: f64 = 100.0;

/// One vertex of the synthetic path in viewBox coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
}

impl Waypoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed shape of a period's synthetic path.
#[derive(Debug)]
pub struct PathProfile {
    pub volatility: f64,
    /// `(x, multiplier)` pairs, strictly increasing in `x`, ending at `(800, 0)`.
    pub anchors: &'static [(f64, f64)],
    pub time_labels: &'static [&'static str],
}

pub static INTRADAY: PathProfile = PathProfile {
    volatility: 0.02,
    anchors: &[
        (0.0, 200.0),
        (100.0, 150.0),
        (200.0, 180.0),
        (300.0, 100.0),
        (400.0, 50.0),
        (500.0, 80.0),
        (600.0, 30.0),
        (700.0, 10.0),
        (800.0, 0.0),
    ],
    time_labels: &["9:30", "10:30", "11:30", "12:30", "1:30", "2:30", "3:30", "4:00"],
};

pub static WEEKLY: PathProfile = PathProfile {
    volatility: 0.04,
    anchors: &[
        (0.0, 100.0),
        (200.0, 75.0),
        (400.0, 37.5),
        (600.0, 12.5),
        (800.0, 0.0),
    ],
    time_labels: &["Mon", "Tue", "Wed", "Thu", "Fri"],
};

/// Path profile for a period, or `None` for periods with no synthetic data.
pub fn profile(period: Period) -> Option<&'static PathProfile> {
    match period {
        Period::Day1 => Some(&INTRADAY),
        Period::Week1 => Some(&WEEKLY),
        Period::Month1 | Period::Month3 | Period::Year1 | Period::All => None,
    }
}

/// Axis band half-width for a period. Periods without a path share the 1D band.
pub fn axis_volatility(period: Period) -> f64 {
    match period {
        Period::Week1 => WEEKLY.volatility,
        _ => INTRADAY.volatility,
    }
}

/// Forward and inverse mapping between price offsets and vertical position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityBand {
    pub current_price: f64,
    pub volatility: f64,
}

impl VolatilityBand {
    pub const fn new(current_price: f64, volatility: f64) -> Self {
        Self {
            current_price,
            volatility,
        }
    }

    /// Vertical position for a path multiplier.
    pub fn y_for(&self, multiplier: f64) -> f64 {
        BASELINE_Y + self.volatility * multiplier
    }

    /// Unrounded price at vertical position `y`.
    pub fn price_at(&self, y: f64) -> f64 {
        self.current_price * (1.0 + ((y - BASELINE_Y) / 100.0) * self.volatility)
    }
}
