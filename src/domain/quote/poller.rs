//! Quote poller: fetch immediately, then on a fixed interval.

use crate::client::TickerClient;
use crate::poll::{deliver, spawn_poll, PollHandle};
use std::time::Duration;

const NAME: &str = "quote";

pub struct QuotePoller;

impl QuotePoller {
    /// Start polling the quote feed into the client's quote state.
    ///
    /// Success replaces the snapshot wholesale; any failure keeps the last
    /// known good one. Failing polls keep the same cadence as healthy ones.
    pub fn start(client: &TickerClient, interval: Duration) -> PollHandle {
        let client = client.clone();
        spawn_poll(NAME, interval, move |live| {
            let client = client.clone();
            async move {
                let state = client.quote_state.clone();
                let fetch = async { client.quotes().fetch().await };
                deliver(NAME, &live, fetch, move |result| async move {
                    let mut state = state.write().await;
                    if state.apply(result) {
                        tracing::debug!(revision = state.revision(), "Quote snapshot replaced");
                    }
                })
                .await;
            }
        })
    }

    pub fn stop(mut handle: PollHandle) {
        handle.stop();
    }
}
