use chrono::{DateTime, Utc};

#[inline]
pub fn log_elapsed(scope: &str, started_at: DateTime<Utc>, details: &str) {
    let elapsed_ms = (Utc::now() - started_at).num_milliseconds().max(0);
    if details.trim().is_empty() {
        tracing::debug!("[perf] {scope} took {elapsed_ms}ms");
    } else {
        tracing::debug!("[perf] {scope} took {elapsed_ms}ms | {details}");
    }
}
