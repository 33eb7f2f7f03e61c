//! Wire types for the quote feed (REST).

use crate::shared::serde_util::{
    cap_text, lenient_f64, lenient_timestamp, share_count, volume_text,
};
use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw quote response. Every key is optional; absence of `price` means the
/// fetch did not succeed, regardless of HTTP status. A field holding a value of
/// the wrong shape decodes as `None` rather than failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(default)]
    pub symbol: Option<Symbol>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub change: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub change_percent: Option<f64>,
    #[serde(default, deserialize_with = "volume_text::deserialize")]
    pub volume: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub open: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub close: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub previous_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub bid: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub ask: Option<f64>,
    #[serde(default, deserialize_with = "share_count::deserialize")]
    pub bid_size: Option<u64>,
    #[serde(default, deserialize_with = "share_count::deserialize")]
    pub ask_size: Option<u64>,
    #[serde(
        default,
        rename = "weekHigh52",
        deserialize_with = "lenient_f64::deserialize"
    )]
    pub week_high_52: Option<f64>,
    #[serde(
        default,
        rename = "weekLow52",
        deserialize_with = "lenient_f64::deserialize"
    )]
    pub week_low_52: Option<f64>,
    #[serde(
        default,
        alias = "averageVolume",
        deserialize_with = "volume_text::deserialize"
    )]
    pub avg_volume: Option<String>,
    #[serde(default, deserialize_with = "volume_text::deserialize")]
    pub consolidated_volume: Option<String>,
    #[serde(default, deserialize_with = "cap_text::deserialize")]
    pub market_cap: Option<String>,
    #[serde(default, deserialize_with = "cap_text::deserialize")]
    pub market_cap_all_classes: Option<String>,
    #[serde(
        default,
        alias = "listedSharesOut",
        deserialize_with = "share_count::deserialize"
    )]
    pub listed_shares_outstanding: Option<u64>,
    #[serde(default, deserialize_with = "share_count::deserialize")]
    pub total_shares_all_classes: Option<u64>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub pe_ratio: Option<f64>,
    #[serde(
        default,
        alias = "divYield",
        deserialize_with = "lenient_f64::deserialize"
    )]
    pub dividend_yield: Option<f64>,
    #[serde(default, deserialize_with = "lenient_timestamp::deserialize")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Set by the feed when every upstream failed.
    #[serde(default)]
    pub error: Option<String>,
}
