//! Client-side storage: the sign-in values the rest of the site leaves behind
//! and the optional per-client config override.
//!
//! On the web these live in `localStorage`; on desktop in a small SQLite
//! key/value table.

use crate::api::models::ClientCredentials;
use crate::config::AppConfig;
use crate::error::QueueError;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

/// Raw (not JSON-encoded) keys written by the sign-in page.
pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const CONFIG_KEY: &str = "queueplayer.config";

#[cfg(not(target_arch = "wasm32"))]
pub const ENV_AUTH_TOKEN: &str = "QUEUE_AUTH_TOKEN";
#[cfg(not(target_arch = "wasm32"))]
pub const ENV_USER_ID: &str = "QUEUE_USER_ID";

#[cfg(target_arch = "wasm32")]
fn read_raw(key: &str) -> Result<Option<String>, QueueError> {
    LocalStorage::raw()
        .get_item(key)
        .map_err(|e| QueueError::storage(format!("{e:?}")))
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), QueueError> {
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn load_credentials() -> Result<ClientCredentials, QueueError> {
    Ok(ClientCredentials {
        token: read_raw(TOKEN_KEY)?,
        stored_user_id: read_raw(USER_ID_KEY)?,
    })
}

#[cfg(target_arch = "wasm32")]
pub async fn load_config() -> Result<AppConfig, QueueError> {
    match LocalStorage::get::<AppConfig>(CONFIG_KEY) {
        Ok(config) => Ok(config.normalized()),
        Err(_) => Ok(AppConfig::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), QueueError> {
    let conn = get_db_connection()?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| QueueError::storage(e.to_string()))?;

    // Desktop has no sign-in page; values handed in through the environment
    // are kept for the next launch.
    let seeded = ClientCredentials {
        token: std::env::var(ENV_AUTH_TOKEN).ok(),
        stored_user_id: std::env::var(ENV_USER_ID).ok(),
    };
    save_credentials(&conn, &seeded)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_credentials() -> Result<ClientCredentials, QueueError> {
    let conn = get_db_connection()?;
    read_credentials(&conn)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_config() -> Result<AppConfig, QueueError> {
    let conn = get_db_connection()?;
    let stored = match read_setting(&conn, CONFIG_KEY)? {
        Some(json) => serde_json::from_str::<AppConfig>(&json)
            .map_err(|e| QueueError::storage(e.to_string()))?,
        None => AppConfig::default(),
    };
    Ok(stored.with_overrides(|key| std::env::var(key).ok()))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_setting(conn: &rusqlite::Connection, key: &str) -> Result<Option<String>, QueueError> {
    let result: Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM settings WHERE key = ?1",
        [key],
        |row: &rusqlite::Row| row.get(0),
    );

    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(QueueError::storage(e.to_string())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_setting(conn: &rusqlite::Connection, key: &str, value: &str) -> Result<(), QueueError> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        [key, value],
    )
    .map_err(|e| QueueError::storage(e.to_string()))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_credentials(conn: &rusqlite::Connection) -> Result<ClientCredentials, QueueError> {
    Ok(ClientCredentials {
        token: read_setting(conn, TOKEN_KEY)?,
        stored_user_id: read_setting(conn, USER_ID_KEY)?,
    })
}

/// Stores the values that are present; absent ones keep what was stored.
#[cfg(not(target_arch = "wasm32"))]
fn save_credentials(
    conn: &rusqlite::Connection,
    credentials: &ClientCredentials,
) -> Result<(), QueueError> {
    if let Some(token) = credentials.token.as_deref().filter(|t| !t.is_empty()) {
        write_setting(conn, TOKEN_KEY, token)?;
    }
    if let Some(user_id) = credentials.stored_user_id.as_deref().filter(|u| !u.is_empty()) {
        write_setting(conn, USER_ID_KEY, user_id)?;
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, QueueError> {
    let data_dir = data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let db_path = data_dir.join("queueplayer.db");

    rusqlite::Connection::open(&db_path)
        .map_err(|e| QueueError::storage(format!("Failed to open database: {}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> Option<std::path::PathBuf> {
    let dir = dirs::data_dir()?.join("queueplayer");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
