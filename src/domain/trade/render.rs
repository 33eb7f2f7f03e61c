//! Trade history renderer.
//!
//! Turns the latest trade poll into exactly one of: a loading notice, an error
//! message, an empty notice, or up to [`MAX_VISIBLE_TRADES`] formatted rows.
//! A failed poll never renders a table.

use super::wire::TradeHistoryResponse;
use super::TradeRecord;
use crate::error::FeedError;
use crate::shared::fmt::num::group_thousands;
use crate::shared::{format_tick, Delta, SENTINEL};
use serde::Serialize;

pub const MAX_VISIBLE_TRADES: usize = 20;

pub const LOADING_MESSAGE: &str = "Loading trade history...";
pub const EMPTY_MESSAGE: &str = "No recent trades available";
/// Fallback when the feed reports failure without a message.
pub const REPORTED_FAILURE_MESSAGE: &str = "Unable to load trade history";
/// Shown when the feed could not be reached or parsed.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to load trade history";

const DEFAULT_EXCHANGE: &str = "TSXV";
const UNKNOWN_PARTY: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RenderState {
    Loading,
    Error {
        message: String,
    },
    Empty,
    Rows {
        rows: Vec<TradeRow>,
        /// `"Showing 20 of N trades"` when the list was truncated.
        notice: Option<String>,
        total: usize,
    },
}

impl RenderState {
    /// Text for the non-table states.
    pub fn message(&self) -> Option<&str> {
        match self {
            RenderState::Loading => Some(LOADING_MESSAGE),
            RenderState::Error { message } => Some(message),
            RenderState::Empty => Some(EMPTY_MESSAGE),
            RenderState::Rows { .. } => None,
        }
    }

    pub fn rows(&self) -> &[TradeRow] {
        match self {
            RenderState::Rows { rows, .. } => rows,
            _ => &[],
        }
    }
}

/// One display row; every cell is final text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRow {
    pub time: String,
    pub price: String,
    pub change: Delta,
    pub change_percent: Delta,
    pub volume: String,
    pub exchange: String,
    pub buyer: String,
    pub seller: String,
}

impl From<&TradeRecord> for TradeRow {
    fn from(t: &TradeRecord) -> Self {
        Self {
            time: t.time.clone(),
            price: non_empty(&t.price_formatted)
                .map(str::to_string)
                .unwrap_or_else(|| format_tick(Some(t.price))),
            change: Delta::price(t.change),
            change_percent: Delta::percent(t.change_percent),
            volume: non_empty(&t.volume_formatted)
                .map(str::to_string)
                .unwrap_or_else(|| format_volume(t.volume)),
            exchange: non_empty(&t.exchange).unwrap_or(DEFAULT_EXCHANGE).to_string(),
            buyer: non_empty(&t.buyer).unwrap_or(UNKNOWN_PARTY).to_string(),
            seller: non_empty(&t.seller).unwrap_or(UNKNOWN_PARTY).to_string(),
        }
    }
}

/// Render the latest trade poll.
pub fn render(result: &Result<TradeHistoryResponse, FeedError>) -> RenderState {
    match result.as_ref().map(TradeHistoryResponse::trades) {
        Ok(Ok(trades)) => render_trades(trades),
        Ok(Err(e)) => render_failure(&e),
        Err(e) => render_failure(e),
    }
}

fn render_failure(error: &FeedError) -> RenderState {
    let message = match error {
        FeedError::FeedReportedFailure(message) => {
            non_empty(message).unwrap_or(REPORTED_FAILURE_MESSAGE)
        }
        _ => FETCH_FAILURE_MESSAGE,
    };
    RenderState::Error {
        message: message.to_string(),
    }
}

/// Render a successfully fetched list.
pub fn render_trades(trades: &[TradeRecord]) -> RenderState {
    if trades.is_empty() {
        return RenderState::Empty;
    }
    let total = trades.len();
    let notice = (total > MAX_VISIBLE_TRADES)
        .then(|| format!("Showing {} of {} trades", MAX_VISIBLE_TRADES, total));
    RenderState::Rows {
        rows: trades
            .iter()
            .take(MAX_VISIBLE_TRADES)
            .map(TradeRow::from)
            .collect(),
        notice,
        total,
    }
}

fn format_volume(volume: f64) -> String {
    if volume.is_finite() {
        group_thousands(&volume.to_string())
    } else {
        SENTINEL.to_string()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
