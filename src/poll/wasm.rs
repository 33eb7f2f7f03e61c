//! WASM poll loops: `spawn_local` futures driven by `gloo-timers`.

use super::{clamp_interval, Liveness, PollHandle};
use futures_util::future::{AbortHandle, Abortable};
use futures_util::StreamExt;
use gloo_timers::future::IntervalStream;
use std::future::Future;
use std::time::Duration;

/// Spawn a loop that calls `tick` immediately and then every `interval`.
pub fn spawn_poll<F, Fut>(name: &'static str, interval: Duration, mut tick: F) -> PollHandle
where
    F: FnMut(Liveness) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let interval = clamp_interval(name, interval);
    let millis = interval.as_millis().min(u32::MAX as u128) as u32;
    let live = Liveness::new();
    let loop_live = live.clone();
    let (abort_handle, abort_reg) = AbortHandle::new_pair();

    let poll_loop = async move {
        tick(loop_live.clone()).await;
        let mut ticks = IntervalStream::new(millis);
        while ticks.next().await.is_some() {
            if !loop_live.is_alive() {
                break;
            }
            tick(loop_live.clone()).await;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        let _ = Abortable::new(poll_loop, abort_reg).await;
    });

    PollHandle::new(name, live, Box::new(move || abort_handle.abort()))
}
