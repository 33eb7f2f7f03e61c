//! High-level client: `TickerClient` with nested sub-client accessors.
//!
//! Each feed has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared state containers, and accessors.

use crate::config::TickerConfig;
use crate::domain::quote::client::Quotes;
use crate::domain::quote::QuoteState;
use crate::domain::trade::client::Trades;
use crate::domain::trade::TradeHistoryState;
use crate::error::TickerError;
use crate::http::{RetryPolicy, TickerHttp};
use crate::network::{DEFAULT_API_URL, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::shared::Symbol;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;

pub use crate::domain::quote::client::Quotes as QuotesClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// The primary entry point.
///
/// `client.quotes()` and `client.trades()` share one HTTP client and the
/// state containers their pollers write into. Cloning is cheap and every
/// clone sees the same state.
#[derive(Clone)]
pub struct TickerClient {
    pub(crate) http: TickerHttp,
    pub(crate) symbol: Symbol,
    pub(crate) quote_interval: Duration,
    pub(crate) trade_interval: Duration,
    pub(crate) quote_state: Arc<RwLock<QuoteState>>,
    pub(crate) trade_state: Arc<RwLock<TradeHistoryState>>,
}

impl TickerClient {
    pub fn builder() -> TickerClientBuilder {
        TickerClientBuilder::default()
    }

    pub fn from_config(config: &TickerConfig) -> Result<Self, TickerError> {
        Self::builder().config(config).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Drop the cached quote and trade state.
    pub async fn reset(&self) {
        self.quote_state.write().await.clear();
        *self.trade_state.write().await = TradeHistoryState::new();
    }
}

impl std::fmt::Debug for TickerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickerClient")
            .field("base_url", &self.http.base_url())
            .field("symbol", &self.symbol)
            .field("quote_interval", &self.quote_interval)
            .field("trade_interval", &self.trade_interval)
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TickerClientBuilder {
    base_url: String,
    symbol: Symbol,
    quote_interval: Duration,
    trade_interval: Duration,
    request_timeout: Duration,
    retry: RetryPolicy,
}

impl Default for TickerClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            symbol: Symbol::default(),
            quote_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            trade_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            retry: RetryPolicy::None,
        }
    }
}

impl TickerClientBuilder {
    /// Take every setting from a loaded config.
    pub fn config(self, config: &TickerConfig) -> Self {
        self.base_url(&config.base_url)
            .symbol(config.symbol.as_str())
            .quote_interval(config.quote_interval())
            .trade_interval(config.trade_interval())
            .request_timeout(config.request_timeout())
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn quote_interval(mut self, interval: Duration) -> Self {
        self.quote_interval = interval;
        self
    }

    pub fn trade_interval(mut self, interval: Duration) -> Self {
        self.trade_interval = interval;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Retry policy for feed requests. Pollers should keep the default.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<TickerClient, TickerError> {
        if self.base_url.trim().is_empty() {
            return Err(TickerError::Other("base_url must not be empty".to_string()));
        }
        Ok(TickerClient {
            http: TickerHttp::new(&self.base_url, self.request_timeout)?.with_retry(self.retry),
            symbol: self.symbol,
            quote_interval: self.quote_interval,
            trade_interval: self.trade_interval,
            quote_state: Arc::new(RwLock::new(QuoteState::new())),
            trade_state: Arc::new(RwLock::new(TradeHistoryState::new())),
        })
    }
}
