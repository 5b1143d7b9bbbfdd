//! Runtime configuration for the queue page.
//!
//! The backend address is baked in at build time through `QUEUE_API_BASE_URL`
//! and can be overridden per client: a `queueplayer.config` JSON entry in
//! browser storage on the web, environment variables on desktop.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 5_000;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

const MIN_POLL_INTERVAL_MS: u32 = 500;

pub const ENV_API_BASE_URL: &str = "QUEUE_API_BASE_URL";
pub const ENV_POLL_INTERVAL_MS: &str = "QUEUE_POLL_INTERVAL_MS";
pub const ENV_TOAST_DURATION_MS: &str = "QUEUE_TOAST_DURATION_MS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url", alias = "baseUrl")]
    pub api_base_url: String,
    #[serde(default = "default_poll_interval_ms", alias = "pollIntervalMs")]
    pub poll_interval_ms: u32,
    #[serde(default = "default_toast_duration_ms", alias = "toastDurationMs")]
    pub toast_duration_ms: u32,
}

fn default_api_base_url() -> String {
    option_env!("QUEUE_API_BASE_URL")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

fn default_poll_interval_ms() -> u32 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_toast_duration_ms() -> u32 {
    DEFAULT_TOAST_DURATION_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl AppConfig {
    /// Trims the base URL and keeps the poll interval above a sane floor.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.api_base_url = if trimmed.is_empty() {
            default_api_base_url()
        } else {
            trimmed
        };
        self.poll_interval_ms = self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS);
        self
    }

    /// Applies `QUEUE_*` overrides from `lookup`. Unparseable numbers are
    /// logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(raw) = lookup(ENV_POLL_INTERVAL_MS) {
            match raw.trim().parse::<u32>() {
                Ok(value) => self.poll_interval_ms = value,
                Err(err) => tracing::warn!("ignoring {ENV_POLL_INTERVAL_MS}={raw:?}: {err}"),
            }
        }
        if let Some(raw) = lookup(ENV_TOAST_DURATION_MS) {
            match raw.trim().parse::<u32>() {
                Ok(value) => self.toast_duration_ms = value,
                Err(err) => tracing::warn!("ignoring {ENV_TOAST_DURATION_MS}={raw:?}: {err}"),
            }
        }
        self.normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_poll_every_five_seconds() {
        let config = AppConfig::default();
        assert_eq!(config.poll_interval_ms, 5_000);
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn overrides_replace_defaults_and_strip_trailing_slash() {
        let config = AppConfig::default().with_overrides(lookup_from(&[
            (ENV_API_BASE_URL, "https://api.example.com/"),
            (ENV_POLL_INTERVAL_MS, "2500"),
        ]));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.poll_interval_ms, 2_500);
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
    }

    #[test]
    fn bad_numbers_are_ignored_and_interval_has_a_floor() {
        let config = AppConfig::default().with_overrides(lookup_from(&[
            (ENV_POLL_INTERVAL_MS, "fast"),
            (ENV_TOAST_DURATION_MS, "1200"),
        ]));
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(config.toast_duration_ms, 1_200);

        let config = AppConfig {
            poll_interval_ms: 10,
            ..AppConfig::default()
        }
        .normalized();
        assert_eq!(config.poll_interval_ms, 500);
    }

    #[test]
    fn stored_config_accepts_camel_case_keys() {
        let config: AppConfig =
            serde_json::from_str(r#"{"baseUrl":"https://queue.example.org/","pollIntervalMs":3000}"#)
                .unwrap();
        let config = config.normalized();
        assert_eq!(config.api_base_url, "https://queue.example.org");
        assert_eq!(config.poll_interval_ms, 3_000);
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
    }
}
