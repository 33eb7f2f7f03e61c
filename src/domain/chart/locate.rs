//! Interactive locator: maps a pointer position back onto the synthetic path.

use super::path::{build_path, svg_area_path, svg_line_path};
use super::{axis, profile, VolatilityBand, Waypoint, BASELINE_Y, CHART_WIDTH};
use crate::domain::quote::QuoteSnapshot;
use crate::shared::{format_tick, Period};
use serde::Serialize;

/// Shown over the chart for periods with no synthetic data.
pub const NO_DATA_MESSAGE: &str = "No historical data available for this period";

/// Pointer readout over the chart. Replaced wholesale on every move.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverState {
    pub x: f64,
    pub y: f64,
    /// Tick-formatted, without currency symbol.
    pub price: String,
    pub time: String,
}

/// Locate the path point under `pointer_x`.
///
/// `None` when there is no path, no price, or the pointer is not a number.
/// The pointer is clamped to the chart width first.
pub fn locate(
    pointer_x: f64,
    waypoints: &[Waypoint],
    current_price: Option<f64>,
    volatility: f64,
    time_labels: &[&str],
) -> Option<HoverState> {
    if waypoints.is_empty() || !pointer_x.is_finite() {
        return None;
    }
    let price = current_price.filter(|p| p.is_finite())?;

    let x = pointer_x.clamp(0.0, CHART_WIDTH);
    let y = waypoints
        .windows(2)
        .find(|seg| x >= seg[0].x && x <= seg[1].x)
        .map(|seg| interpolate(seg[0], seg[1], x))
        .unwrap_or(BASELINE_Y);

    let band = VolatilityBand::new(price, volatility);

    Some(HoverState {
        x,
        y,
        price: format_tick(Some(band.price_at(y))),
        time: time_label(x, time_labels).to_string(),
    })
}

/// Linear interpolation that lands exactly on the endpoints.
fn interpolate(a: Waypoint, b: Waypoint, x: f64) -> f64 {
    if x == a.x {
        a.y
    } else if x == b.x {
        b.y
    } else {
        a.y + (x - a.x) / (b.x - a.x) * (b.y - a.y)
    }
}

fn time_label<'a>(x: f64, labels: &[&'a str]) -> &'a str {
    if labels.is_empty() {
        return "";
    }
    let idx = ((x / CHART_WIDTH) * (labels.len() - 1) as f64).floor() as usize;
    labels[idx.min(labels.len() - 1)]
}

// ─── ChartView ───────────────────────────────────────────────────────────────

/// Chart surface state: selected period, current path, and hover readout.
#[derive(Debug, Clone, Default)]
pub struct ChartView {
    period: Period,
    current_price: Option<f64>,
    waypoints: Vec<Waypoint>,
    hover: Option<HoverState>,
}

impl ChartView {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            ..Default::default()
        }
    }

    /// Rebuild the path from a new snapshot. Clears any hover.
    pub fn update(&mut self, snapshot: Option<&QuoteSnapshot>) {
        self.current_price = snapshot.map(|s| s.price);
        self.rebuild();
    }

    /// Switch period, rebuild the path and clear hover.
    pub fn select_period(&mut self, period: Period) {
        self.period = period;
        self.rebuild();
    }

    pub fn pointer_move(&mut self, pointer_x: f64) -> Option<&HoverState> {
        self.hover = profile(self.period).and_then(|p| {
            locate(
                pointer_x,
                &self.waypoints,
                self.current_price,
                p.volatility,
                p.time_labels,
            )
        });
        self.hover.as_ref()
    }

    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    /// True for periods the surface renders as a "no data" placeholder.
    pub fn is_placeholder(&self) -> bool {
        !self.period.has_synthetic_path()
    }

    pub fn placeholder_message(&self) -> Option<&'static str> {
        self.is_placeholder().then_some(NO_DATA_MESSAGE)
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    pub fn line_path(&self) -> String {
        svg_line_path(&self.waypoints)
    }

    pub fn area_path(&self) -> String {
        svg_area_path(&self.waypoints)
    }

    pub fn axis_labels(&self) -> [String; 5] {
        axis::price_axis(self.current_price, self.period)
    }

    fn rebuild(&mut self) {
        self.waypoints = build_path(self.current_price, self.period);
        self.hover = None;
    }
}
