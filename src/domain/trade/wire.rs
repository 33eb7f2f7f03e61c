//! Wire types for the trade-history feed (REST).

use super::TradeRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trade feed envelope. `success: false` means the list must not be shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeHistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub trades: Vec<TradeRecord>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
}

impl TradeHistoryResponse {
    pub fn ok(trades: Vec<TradeRecord>) -> Self {
        Self {
            success: true,
            trades,
            message: None,
            error: None,
            last_update: None,
        }
    }

    pub fn failed(message: Option<String>) -> Self {
        Self {
            success: false,
            trades: Vec::new(),
            message,
            error: None,
            last_update: None,
        }
    }
}
