//! Stat-tile strings for the quote panel.

use super::QuoteSnapshot;
use crate::shared::fmt::num::{format_optional, format_optional_count, format_percent};
use crate::shared::{format_tick, Delta, Polarity, SENTINEL};
use serde::Serialize;

/// Every display string the quote panel needs, already formatted.
///
/// Built from an optional snapshot: with no snapshot every field is the sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteDisplay {
    pub symbol: String,
    pub price: String,
    pub change: Delta,
    pub change_percent: Delta,
    pub open: String,
    /// `"high/low"`.
    pub day_range: String,
    /// `"high/low"` over 52 weeks.
    pub week_52_range: String,
    pub close: String,
    pub previous_close: String,
    pub volume: String,
    pub consolidated_volume: String,
    pub average_volume: String,
    pub market_cap: String,
    pub market_cap_all_classes: String,
    pub listed_shares: String,
    pub total_shares: String,
    pub bid: String,
    pub bid_size: String,
    pub ask: String,
    pub ask_size: String,
    pub pe_ratio: String,
    pub dividend_yield: String,
}

impl QuoteDisplay {
    pub fn new(snapshot: Option<&QuoteSnapshot>) -> Self {
        let Some(s) = snapshot else {
            return Self::empty();
        };

        Self {
            symbol: s.symbol.to_string(),
            price: format_tick(Some(s.price)),
            change: Delta::price(s.change),
            change_percent: Delta::percent(s.change_percent),
            open: format_tick(s.open),
            day_range: range(s.high, s.low),
            week_52_range: range(s.week_high_52, s.week_low_52),
            close: format_tick(s.close),
            previous_close: format_tick(s.previous_close),
            volume: text_or_sentinel(&s.volume),
            consolidated_volume: text_or_sentinel(&s.consolidated_volume),
            average_volume: text_or_sentinel(&s.average_volume),
            market_cap: text_or_sentinel(&s.market_cap),
            market_cap_all_classes: text_or_sentinel(&s.market_cap_all_classes),
            listed_shares: format_optional_count(s.listed_shares_outstanding),
            total_shares: format_optional_count(s.total_shares_all_classes),
            bid: format_tick(s.bid),
            bid_size: format_optional_count(s.bid_size),
            ask: format_tick(s.ask),
            ask_size: format_optional_count(s.ask_size),
            pe_ratio: format_optional(s.pe_ratio, 2),
            dividend_yield: s
                .dividend_yield
                .map(|d| format_percent(d, 2))
                .unwrap_or_else(|| SENTINEL.to_string()),
        }
    }

    fn empty() -> Self {
        let dash = || SENTINEL.to_string();
        Self {
            symbol: dash(),
            price: dash(),
            change: Delta::Neutral,
            change_percent: Delta::Neutral,
            open: dash(),
            day_range: dash(),
            week_52_range: dash(),
            close: dash(),
            previous_close: dash(),
            volume: dash(),
            consolidated_volume: dash(),
            average_volume: dash(),
            market_cap: dash(),
            market_cap_all_classes: dash(),
            listed_shares: dash(),
            total_shares: dash(),
            bid: dash(),
            bid_size: dash(),
            ask: dash(),
            ask_size: dash(),
            pe_ratio: dash(),
            dividend_yield: dash(),
        }
    }

    /// Headline change line, e.g. `"+0.005 (+2.04%)"`, or the sentinel.
    pub fn change_line(&self) -> String {
        match (&self.change, &self.change_percent) {
            (Delta::Neutral, Delta::Neutral) => SENTINEL.to_string(),
            (change, Delta::Neutral) => change.text().to_string(),
            (change, percent) => format!("{} ({})", change.text(), percent.text()),
        }
    }

    /// Colour class for the headline change.
    pub fn polarity(&self) -> Option<Polarity> {
        self.change.polarity().or_else(|| self.change_percent.polarity())
    }
}

fn range(high: Option<f64>, low: Option<f64>) -> String {
    if high.is_none() && low.is_none() {
        return SENTINEL.to_string();
    }
    format!("{}/{}", format_tick(high), format_tick(low))
}

fn text_or_sentinel(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => SENTINEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Symbol;

    fn full_snapshot() -> QuoteSnapshot {
        let mut s = QuoteSnapshot::with_price(Symbol::from("TSX-V: TUO"), 0.25);
        s.change = Some(0.005);
        s.change_percent = Some(2.0408);
        s.open = Some(0.245);
        s.high = Some(0.26);
        s.low = Some(0.24);
        s.week_high_52 = Some(0.45);
        s.week_low_52 = Some(0.1);
        s.volume = Some("47.16K".to_string());
        s.market_cap = Some("$3.8M".to_string());
        s.listed_shares_outstanding = Some(36_594_622);
        s.bid = Some(0.245);
        s.bid_size = Some(10_000);
        s.dividend_yield = Some(0.0);
        s
    }

    #[test]
    fn test_no_snapshot_is_all_sentinel() {
        let d = QuoteDisplay::new(None);
        assert_eq!(d.price, "--");
        assert_eq!(d.day_range, "--");
        assert_eq!(d.listed_shares, "--");
        assert_eq!(d.change_line(), "--");
        assert!(d.polarity().is_none());
    }

    #[test]
    fn test_full_snapshot_tiles() {
        let d = QuoteDisplay::new(Some(&full_snapshot()));
        assert_eq!(d.symbol, "TSX-V: TUO");
        assert_eq!(d.price, "0.25");
        assert_eq!(d.open, "0.245");
        assert_eq!(d.day_range, "0.26/0.24");
        assert_eq!(d.week_52_range, "0.45/0.10");
        assert_eq!(d.volume, "47.16K");
        assert_eq!(d.market_cap, "$3.8M");
        assert_eq!(d.listed_shares, "36,594,622");
        assert_eq!(d.bid, "0.245");
        assert_eq!(d.bid_size, "10,000");
        assert_eq!(d.dividend_yield, "0.00%");
        assert_eq!(d.change_line(), "+0.005 (+2.04%)");
        assert_eq!(d.polarity(), Some(Polarity::Up));
    }

    #[test]
    fn test_missing_fields_show_sentinel() {
        let d = QuoteDisplay::new(Some(&QuoteSnapshot::with_price(Symbol::default(), 0.2)));
        assert_eq!(d.price, "0.20");
        assert_eq!(d.open, "--");
        assert_eq!(d.close, "--");
        assert_eq!(d.volume, "--");
        assert_eq!(d.pe_ratio, "--");
        assert_eq!(d.ask, "--");
        assert_eq!(d.change_line(), "--");
    }

    #[test]
    fn test_partial_range_keeps_known_side() {
        let mut s = QuoteSnapshot::with_price(Symbol::default(), 0.2);
        s.high = Some(0.22);
        assert_eq!(QuoteDisplay::new(Some(&s)).day_range, "0.22/--");
    }

    #[test]
    fn test_negative_change_line() {
        let mut s = QuoteSnapshot::with_price(Symbol::default(), 0.2);
        s.change = Some(-0.02);
        s.change_percent = Some(-9.091);
        let d = QuoteDisplay::new(Some(&s));
        assert_eq!(d.change_line(), "-0.02 (-9.09%)");
        assert_eq!(d.polarity(), Some(Polarity::Down));
    }
}
