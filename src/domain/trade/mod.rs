//! Trade domain: recent trade history and its table rendering.

#[cfg(feature = "http")]
pub mod client;
mod convert;
#[cfg(any(feature = "poll-native", feature = "poll-wasm"))]
pub mod poller;
pub mod render;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use render::{render, RenderState, TradeRow, MAX_VISIBLE_TRADES};
pub use state::TradeHistoryState;

/// One executed trade as reported by the feed.
///
/// `price_formatted` / `volume_formatted`, when present, win over local formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub time: String,
    pub price: f64,
    pub volume: f64,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub price_formatted: Option<String>,
    #[serde(default)]
    pub volume_formatted: Option<String>,
    #[serde(default)]
    pub buyer: Option<String>,
    #[serde(default)]
    pub seller: Option<String>,
}

impl TradeRecord {
    pub fn new(time: impl Into<String>, price: f64, volume: f64) -> Self {
        Self {
            time: time.into(),
            price,
            volume,
            change: None,
            change_percent: None,
            exchange: None,
            price_formatted: None,
            volume_formatted: None,
            buyer: None,
            seller: None,
        }
    }
}
