//! Conversions from wire types to domain types for quotes.

use super::wire::QuoteResponse;
use super::QuoteSnapshot;
use crate::error::FeedError;

impl TryFrom<QuoteResponse> for QuoteSnapshot {
    type Error = FeedError;

    fn try_from(q: QuoteResponse) -> Result<Self, Self::Error> {
        let price = match q.price {
            Some(p) if p.is_finite() => p,
            Some(p) => {
                return Err(FeedError::MalformedResponse(format!(
                    "Non-finite price: {}",
                    p
                )))
            }
            None => {
                return Err(FeedError::MalformedResponse(match q.error {
                    Some(reason) => format!("No price in response ({})", reason),
                    None => "No price in response".to_string(),
                }))
            }
        };

        Ok(Self {
            symbol: q.symbol.unwrap_or_default(),
            price,
            change: q.change,
            change_percent: q.change_percent,
            volume: q.volume,
            high: q.high,
            low: q.low,
            open: q.open,
            close: q.close,
            previous_close: q.previous_close,
            bid: q.bid,
            ask: q.ask,
            bid_size: q.bid_size,
            ask_size: q.ask_size,
            week_high_52: q.week_high_52,
            week_low_52: q.week_low_52,
            average_volume: q.avg_volume,
            consolidated_volume: q.consolidated_volume,
            market_cap: q.market_cap,
            market_cap_all_classes: q.market_cap_all_classes,
            listed_shares_outstanding: q.listed_shares_outstanding,
            total_shares_all_classes: q.total_shares_all_classes,
            pe_ratio: q.pe_ratio,
            dividend_yield: q.dividend_yield,
            timestamp: q.timestamp,
        })
    }
}
