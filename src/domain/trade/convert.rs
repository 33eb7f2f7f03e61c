//! Envelope unwrapping for the trade feed.

use super::wire::TradeHistoryResponse;
use super::TradeRecord;
use crate::error::FeedError;

impl TradeHistoryResponse {
    /// The trade list, or [`FeedError::FeedReportedFailure`] when the feed said
    /// `success: false`. The failure carries `message`, else `error`.
    pub fn trades(&self) -> Result<&[TradeRecord], FeedError> {
        if self.success {
            return Ok(&self.trades);
        }
        let reason = [&self.message, &self.error]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .cloned();
        Err(FeedError::FeedReportedFailure(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_yields_trades() {
        let resp = TradeHistoryResponse::ok(vec![TradeRecord::new("10:00", 0.2, 100.0)]);
        assert_eq!(resp.trades().unwrap().len(), 1);
    }

    #[test]
    fn test_reported_failure_prefers_message() {
        let mut resp = TradeHistoryResponse::failed(Some("market closed".to_string()));
        resp.error = Some("scrape failed".to_string());
        assert_eq!(
            resp.trades().unwrap_err(),
            FeedError::FeedReportedFailure(Some("market closed".to_string()))
        );
    }

    #[test]
    fn test_blank_message_falls_through() {
        let mut resp = TradeHistoryResponse::failed(Some("  ".to_string()));
        assert_eq!(resp.trades().unwrap_err(), FeedError::FeedReportedFailure(None));
        resp.error = Some("scrape failed".to_string());
        assert_eq!(
            resp.trades().unwrap_err(),
            FeedError::FeedReportedFailure(Some("scrape failed".to_string()))
        );
    }

    #[test]
    fn test_reported_failure_falls_back_to_error() {
        let mut resp = TradeHistoryResponse::failed(None);
        resp.error = Some("scrape failed".to_string());
        assert_eq!(
            resp.trades().unwrap_err(),
            FeedError::FeedReportedFailure(Some("scrape failed".to_string()))
        );
    }
}
