//! Poll lifecycle: fixed-cadence fetch loops with an explicit stop handle.
//!
//! A poller fetches immediately, then once per interval, for as long as its
//! [`PollHandle`] is alive. Failed and healthy polls share the same cadence.
//! Dropping the handle stops the loop, so no exit path leaks a timer.
//!
//! - `poll-native`: each loop is a tokio task.
//! - `poll-wasm`: each loop is a `spawn_local` future driven by `gloo-timers`.

#[cfg(feature = "poll-native")]
pub mod native;
#[cfg(feature = "poll-wasm")]
pub mod wasm;

#[cfg(feature = "poll-native")]
pub use native::spawn_poll;
#[cfg(all(feature = "poll-wasm", not(feature = "poll-native")))]
pub use wasm::spawn_poll;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shortest interval a loop will run at.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Shared flag a running loop checks before applying a response.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub(crate) fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub(crate) fn kill(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Handle to a running poll loop.
///
/// Call [`stop`](Self::stop) or drop the handle to end the loop. A response
/// still in flight at that moment is discarded, never applied.
pub struct PollHandle {
    name: &'static str,
    live: Liveness,
    abort: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl PollHandle {
    pub(crate) fn new(
        name: &'static str,
        live: Liveness,
        abort: Box<dyn FnOnce() + Send + Sync>,
    ) -> Self {
        tracing::info!(poller = name, "Poller started");
        Self {
            name,
            live,
            abort: Some(abort),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        self.live.is_alive()
    }

    /// Stop the loop. Idempotent.
    pub fn stop(&mut self) {
        self.live.kill();
        if let Some(abort) = self.abort.take() {
            abort();
            tracing::info!(poller = self.name, "Poller stopped");
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for PollHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollHandle")
            .field("name", &self.name)
            .field("running", &self.is_running())
            .finish()
    }
}

/// Run one fetch and hand the result to `apply`, unless the loop was stopped
/// while the fetch was in flight. Returns whether the result was applied.
pub(crate) async fn deliver<T, Fut, A, AFut>(
    name: &'static str,
    live: &Liveness,
    fetch: Fut,
    apply: A,
) -> bool
where
    Fut: Future<Output = T>,
    A: FnOnce(T) -> AFut,
    AFut: Future<Output = ()>,
{
    tracing::debug!(poller = name, "Poll tick");
    let result = fetch.await;
    if !live.is_alive() {
        tracing::warn!(poller = name, "Discarding response that arrived after stop");
        return false;
    }
    apply(result).await;
    true
}

pub(crate) fn clamp_interval(name: &'static str, interval: Duration) -> Duration {
    if interval < MIN_POLL_INTERVAL {
        tracing::warn!(
            poller = name,
            requested_ms = interval.as_millis() as u64,
            "Poll interval too short, clamping"
        );
        MIN_POLL_INTERVAL
    } else {
        interval
    }
}
