//! Clock and sleep helpers that work on both the web and native targets.

use time::OffsetDateTime;

/// Current wall-clock time (UTC). The `wasm-bindgen` feature of `time` backs
/// this with `Date.now()` in the browser.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
