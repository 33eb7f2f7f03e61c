//! Quotes sub-client: fetch, cache and poll the quote feed.

use crate::client::TickerClient;
use crate::domain::quote::{QuoteDisplay, QuoteSnapshot};
use crate::error::FeedError;
use std::sync::Arc;

pub struct Quotes<'a> {
    pub(crate) client: &'a TickerClient,
}

impl<'a> Quotes<'a> {
    /// One fetch of the quote feed, without touching the cached state.
    pub async fn fetch(&self) -> Result<QuoteSnapshot, FeedError> {
        let resp = self.client.http.get_quote(&self.client.symbol).await?;
        QuoteSnapshot::try_from(resp)
    }

    /// Fetch and apply to the cached state.
    ///
    /// On failure the previous snapshot stays in place and the error is returned.
    pub async fn refresh(&self) -> Result<Arc<QuoteSnapshot>, FeedError> {
        let result = self.fetch().await;
        let mut state = self.client.quote_state.write().await;
        match result {
            Ok(snapshot) => {
                state.apply(Ok(snapshot));
                state
                    .snapshot()
                    .ok_or_else(|| FeedError::MalformedResponse("snapshot missing".to_string()))
            }
            Err(e) => {
                state.apply(Err(e.clone()));
                Err(e)
            }
        }
    }

    /// Last-known-good snapshot.
    pub async fn snapshot(&self) -> Option<Arc<QuoteSnapshot>> {
        self.client.quote_state.read().await.snapshot()
    }

    pub async fn revision(&self) -> u64 {
        self.client.quote_state.read().await.revision()
    }

    /// Stat-tile strings for the current snapshot.
    pub async fn display(&self) -> QuoteDisplay {
        QuoteDisplay::new(self.snapshot().await.as_deref())
    }

    /// Start the background quote poller at the client's configured interval.
    #[cfg(any(feature = "poll-native", feature = "poll-wasm"))]
    pub fn start_polling(&self) -> crate::poll::PollHandle {
        super::poller::QuotePoller::start(self.client, self.client.quote_interval)
    }
}
