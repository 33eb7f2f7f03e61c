//! Signed price / percent moves with a polarity class.

use super::num::format_signed_percent;
use super::tick::{format_signed_tick, is_nonzero_tick};
use crate::shared::Polarity;
use serde::Serialize;

/// A rendered move: signed text with polarity, or an explicit neutral marker.
///
/// Missing and zero moves are always [`Delta::Neutral`], never a signed zero.
/// "Zero" is judged at display precision: a price move that rounds to 0 ticks
/// (under $0.0025, e.g. `0.002`) or a percent that rounds to `0.00` is neutral,
/// since its signed text would read `+0.00` / `+0.00%` with an up/down colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Delta {
    Signed { text: String, polarity: Polarity },
    Neutral,
}

impl Delta {
    /// Text shown for [`Delta::Neutral`].
    pub const NEUTRAL_TEXT: &'static str = "No change";

    /// Price move, rendered with the tick formatter.
    pub fn price(value: Option<f64>) -> Self {
        match value {
            Some(v) if is_nonzero_tick(v) => match Polarity::of(v) {
                Some(polarity) => Delta::Signed {
                    text: format_signed_tick(Some(v)),
                    polarity,
                },
                None => Delta::Neutral,
            },
            _ => Delta::Neutral,
        }
    }

    /// Percent move with two decimals (`+2.04%`).
    pub fn percent(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() && (v * 100.0).round() != 0.0 => match Polarity::of(v) {
                Some(polarity) => Delta::Signed {
                    text: format_signed_percent(v, 2),
                    polarity,
                },
                None => Delta::Neutral,
            },
            _ => Delta::Neutral,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Delta::Signed { text, .. } => text,
            Delta::Neutral => Self::NEUTRAL_TEXT,
        }
    }

    pub fn polarity(&self) -> Option<Polarity> {
        match self {
            Delta::Signed { polarity, .. } => Some(*polarity),
            Delta::Neutral => None,
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Delta::Neutral)
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
