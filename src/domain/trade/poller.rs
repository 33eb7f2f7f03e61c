//! Trade history poller: same lifecycle as the quote poller.

use crate::client::TickerClient;
use crate::poll::{deliver, spawn_poll, PollHandle};
use std::time::Duration;

const NAME: &str = "trade-history";

pub struct TradePoller;

impl TradePoller {
    /// Start polling the trade feed into the client's trade state.
    ///
    /// Every result, success or failure, replaces the previous one.
    pub fn start(client: &TickerClient, interval: Duration) -> PollHandle {
        let client = client.clone();
        spawn_poll(NAME, interval, move |live| {
            let client = client.clone();
            async move {
                let state = client.trade_state.clone();
                let fetch = async { client.trades().fetch().await };
                deliver(NAME, &live, fetch, move |result| async move {
                    state.write().await.apply(result);
                })
                .await;
            }
        })
    }

    pub fn stop(mut handle: PollHandle) {
        handle.stop();
    }
}
