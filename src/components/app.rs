use dioxus::prelude::*;

use crate::api::ClientCredentials;
use crate::components::{use_toast_center, AppView, Toasts};
use crate::config::AppConfig;
use crate::db::{initialize_database, load_config, load_credentials};
use crate::queue::Notice;

const STORAGE_FALLBACK_MESSAGE: &str =
    "Saved settings could not be read; using defaults for this session.";

/// What the queue page needs from storage, read once at startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientSession {
    pub config: AppConfig,
    pub credentials: ClientCredentials,
}

#[component]
pub fn AppShell() -> Element {
    let toasts = use_toast_center();
    let mut session = use_signal(|| None::<ClientSession>);
    use_context_provider(|| session);

    // Initialize storage and load config and credentials on mount
    use_effect(move || {
        spawn(async move {
            let mut storage_failed = false;

            if let Err(e) = initialize_database().await {
                tracing::warn!("Failed to initialize database: {e}");
                storage_failed = true;
            }

            let config = match load_config().await {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to load config, using defaults: {e}");
                    storage_failed = true;
                    AppConfig::default()
                }
            };

            let credentials = match load_credentials().await {
                Ok(credentials) => credentials,
                Err(e) => {
                    tracing::warn!("Failed to read stored credentials: {e}");
                    storage_failed = true;
                    ClientCredentials::default()
                }
            };

            tracing::info!(
                "queue player ready (api: {}, poll: {} ms, interactive: {})",
                config.api_base_url,
                config.poll_interval_ms,
                credentials.is_interactive()
            );

            toasts.set_duration(config.toast_duration_ms);
            if storage_failed {
                toasts.push(Notice::info(STORAGE_FALLBACK_MESSAGE));
            }
            session.set(Some(ClientSession {
                config,
                credentials,
            }));
        });
    });

    rsx! {
        div { class: "app-shell",
            main { class: "app-main", Outlet::<AppView> {} }
            Toasts {}
        }
    }
}
