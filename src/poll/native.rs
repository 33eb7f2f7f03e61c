//! Native poll loops: one tokio task per poller.

use super::{clamp_interval, Liveness, PollHandle};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Spawn a loop that calls `tick` immediately and then every `interval`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_poll<F, Fut>(name: &'static str, interval: Duration, mut tick: F) -> PollHandle
where
    F: FnMut(Liveness) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let interval = clamp_interval(name, interval);
    let live = Liveness::new();
    let loop_live = live.clone();

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // A slow fetch pushes the next tick back rather than bursting.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if !loop_live.is_alive() {
                break;
            }
            tick(loop_live.clone()).await;
        }
        tracing::debug!(poller = name, "Poll loop exited");
    });

    let abort = task.abort_handle();
    PollHandle::new(name, live, Box::new(move || abort.abort()))
}
