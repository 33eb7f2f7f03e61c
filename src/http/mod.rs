//! HTTP client layer: `TickerHttp` with an opt-in retry policy.

pub mod client;
pub mod retry;

pub use client::TickerHttp;
pub use retry::{RetryConfig, RetryPolicy};
