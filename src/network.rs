//! Feed URL and cadence constants.

/// Default base URL of the site serving the feed routes.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Current-quote route.
pub const QUOTE_PATH: &str = "/api/stock-quote";

/// Recent-trades route.
pub const TRADE_HISTORY_PATH: &str = "/api/trade-history";

/// Symbol shown on the investor page.
pub const DEFAULT_SYMBOL: &str = "TSX-V: TUO";

/// Quote and trade polls both refresh every five minutes.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;

/// Per-request timeout on native targets.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
