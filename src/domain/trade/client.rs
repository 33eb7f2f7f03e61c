//! Trades sub-client: trade history fetch, render and polling.

use crate::client::TickerClient;
use crate::domain::trade::render::RenderState;
use crate::domain::trade::wire::TradeHistoryResponse;
use crate::domain::trade::TradeRecord;
use crate::error::FeedError;

pub struct Trades<'a> {
    pub(crate) client: &'a TickerClient,
}

impl<'a> Trades<'a> {
    /// One fetch of the trade feed, without touching the cached state.
    ///
    /// A `success: false` envelope is still `Ok`; the renderer decides what to show.
    pub async fn fetch(&self) -> Result<TradeHistoryResponse, FeedError> {
        Ok(self
            .client
            .http
            .get_trade_history(&self.client.symbol)
            .await?)
    }

    /// Fetch, apply to the cached state and return the new render state.
    pub async fn refresh(&self) -> RenderState {
        let result = self.fetch().await;
        let mut state = self.client.trade_state.write().await;
        state.apply(result);
        state.render()
    }

    /// Render state for the latest poll (`Loading` before the first one).
    pub async fn render(&self) -> RenderState {
        self.client.trade_state.read().await.render()
    }

    /// Trades from the latest successful poll.
    pub async fn list(&self) -> Vec<TradeRecord> {
        self.client.trade_state.read().await.trades().to_vec()
    }

    pub async fn revision(&self) -> u64 {
        self.client.trade_state.read().await.revision()
    }

    /// Start the background trade poller at the client's configured interval.
    #[cfg(any(feature = "poll-native", feature = "poll-wasm"))]
    pub fn start_polling(&self) -> crate::poll::PollHandle {
        super::poller::TradePoller::start(self.client, self.client.trade_interval)
    }
}
