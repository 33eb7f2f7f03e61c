//! Quote domain: the current quote snapshot and its stat-tile rendering.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod display;
#[cfg(any(feature = "poll-native", feature = "poll-wasm"))]
pub mod poller;
pub mod state;
pub mod wire;

use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use display::QuoteDisplay;
pub use state::QuoteState;

/// The most recent successful quote.
///
/// Only `price` is guaranteed; every other field is whatever the upstream
/// happened to report. Replaced wholesale on each successful poll, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub symbol: Symbol,
    pub price: f64,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    /// Display-ready (`"47.16K"`).
    pub volume: Option<String>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub open: Option<f64>,
    pub close: Option<f64>,
    pub previous_close: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub bid_size: Option<u64>,
    pub ask_size: Option<u64>,
    pub week_high_52: Option<f64>,
    pub week_low_52: Option<f64>,
    pub average_volume: Option<String>,
    pub consolidated_volume: Option<String>,
    /// Display-ready (`"$3.8M"` or `"3,849,792"`).
    pub market_cap: Option<String>,
    pub market_cap_all_classes: Option<String>,
    pub listed_shares_outstanding: Option<u64>,
    pub total_shares_all_classes: Option<u64>,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl QuoteSnapshot {
    /// A snapshot carrying only a price.
    pub fn with_price(symbol: Symbol, price: f64) -> Self {
        Self {
            symbol,
            price,
            change: None,
            change_percent: None,
            volume: None,
            high: None,
            low: None,
            open: None,
            close: None,
            previous_close: None,
            bid: None,
            ask: None,
            bid_size: None,
            ask_size: None,
            week_high_52: None,
            week_low_52: None,
            average_volume: None,
            consolidated_volume: None,
            market_cap: None,
            market_cap_all_classes: None,
            listed_shares_outstanding: None,
            total_shares_all_classes: None,
            pe_ratio: None,
            dividend_yield: None,
            timestamp: None,
        }
    }
}
