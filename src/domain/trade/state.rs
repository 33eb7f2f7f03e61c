//! Trade history state container.

use super::render::{render, RenderState};
use super::wire::TradeHistoryResponse;
use super::TradeRecord;
use crate::error::FeedError;

/// Latest trade poll result, replaced wholesale on every poll.
///
/// Unlike quotes, a failed trade poll replaces the list: the renderer shows the
/// failure message instead of stale rows.
#[derive(Debug, Clone, Default)]
pub struct TradeHistoryState {
    latest: Option<Result<TradeHistoryResponse, FeedError>>,
    revision: u64,
}

impl TradeHistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, result: Result<TradeHistoryResponse, FeedError>) {
        match result.as_ref().map(TradeHistoryResponse::trades) {
            Ok(Ok(trades)) => tracing::debug!(count = trades.len(), "Trade history replaced"),
            Ok(Err(e)) => tracing::warn!(reason = %e, "Trade feed reported failure"),
            Err(e) => tracing::warn!("Trade poll failed: {}", e),
        }
        self.latest = Some(result);
        self.revision += 1;
    }

    /// `true` until the first poll completes.
    pub fn is_pending(&self) -> bool {
        self.latest.is_none()
    }

    pub fn latest(&self) -> Option<&Result<TradeHistoryResponse, FeedError>> {
        self.latest.as_ref()
    }

    /// Trades from the latest successful poll; empty after a failure.
    pub fn trades(&self) -> &[TradeRecord] {
        match &self.latest {
            Some(Ok(resp)) => resp.trades().unwrap_or_default(),
            _ => &[],
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn render(&self) -> RenderState {
        match &self.latest {
            None => RenderState::Loading,
            Some(result) => render(result),
        }
    }
}
