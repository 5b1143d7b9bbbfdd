/// Utility helpers for the queue page

/// DOM id of the audio element for a queue item. Backend ids are hex, but
/// anything outside `[A-Za-z0-9-]` is escaped as `_<hex>_` so the id is always a valid
/// selector.
pub fn media_dom_id<S: AsRef<str>>(item_id: S) -> String {
    let mut out = String::from("queue-audio-");
    for ch in item_id.as_ref().chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
        } else {
            out.push_str(&format!("_{:x}_", ch as u32));
        }
    }
    out
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}
