//! # Investor Ticker
//!
//! Market-data core for an investor-relations stock widget: quote polling,
//! tick-size price formatting, a synthetic intraday/weekly price path with a
//! hover locator, and a recent-trades table renderer. Builds for native and WASM.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Formatting, chart geometry, domain models (always available, WASM-safe)
//! 2. **HTTP API**: `TickerHttp`, one method per feed
//! 3. **Polling**: Compile-time dispatch: tokio tasks (native) / `spawn_local` (WASM)
//! 4. **High-Level Client**: `TickerClient` with nested sub-clients and shared state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use investor_ticker::prelude::*;
//!
//! let client = TickerClient::builder()
//!     .base_url("https://www.example.com")
//!     .build()?;
//!
//! let _quotes = client.quotes().start_polling();
//! let _trades = client.trades().start_polling();
//!
//! let tiles = client.quotes().display().await;
//! let table = client.trades().render().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting.
pub mod shared;

/// Domain modules (vertical slices): chart, quote, trade.
pub mod domain;

/// Error types.
pub mod error;

/// Feed URL and default constants.
pub mod network;

/// File + environment configuration.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Polling ─────────────────────────────────────────────────────────

/// Fixed-interval poll loops and their stop handles.
#[cfg(any(feature = "poll-native", feature = "poll-wasm"))]
pub mod poll;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `TickerClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types + formatting
    pub use crate::shared::{format_signed_tick, format_tick, Delta, Period, Polarity, Symbol};

    // Domain types: chart
    pub use crate::domain::chart::{
        build_path, locate, price_axis, svg_area_path, svg_line_path, ChartView, HoverState,
        VolatilityBand, Waypoint,
    };

    // Domain types: quote
    pub use crate::domain::quote::{QuoteDisplay, QuoteSnapshot, QuoteState};

    // Domain types: trade
    pub use crate::domain::trade::wire::TradeHistoryResponse;
    pub use crate::domain::trade::{render, RenderState, TradeHistoryState, TradeRecord, TradeRow};

    // Errors
    pub use crate::error::{ConfigError, FeedError, HttpError, TickerError};

    // Config
    pub use crate::config::TickerConfig;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{QuotesClient, TickerClient, TickerClientBuilder, TradesClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Polling
    #[cfg(any(feature = "poll-native", feature = "poll-wasm"))]
    pub use crate::domain::quote::poller::QuotePoller;
    #[cfg(any(feature = "poll-native", feature = "poll-wasm"))]
    pub use crate::domain::trade::poller::TradePoller;
    #[cfg(any(feature = "poll-native", feature = "poll-wasm"))]
    pub use crate::poll::PollHandle;
}
