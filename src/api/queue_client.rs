use crate::api::models::*;
use crate::api::QueueBackend;
use crate::diagnostics::log_elapsed;
use crate::error::QueueError;
use chrono::Utc;
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub const AUTH_HEADER: &str = "x-auth-token";

const QUEUE_SONGS_PATH: &str = "/api/playlist/queue-songs";
const QUEUE_DELETE_PATH: &str = "/api/playlist/queue/delete";

/// HTTP client for the playlist queue endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueClient {
    base_url: String,
    token: Option<String>,
}

impl QueueClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn queue_songs_url(&self, user_id: &str) -> String {
        format!(
            "{}{}?userId={}",
            self.base_url,
            QUEUE_SONGS_PATH,
            urlencoding::encode(user_id)
        )
    }

    pub fn delete_url(&self, item_id: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            QUEUE_DELETE_PATH,
            urlencoding::encode(item_id)
        )
    }

    /// Where the audio for `item` is served from.
    pub fn song_url(&self, item: &QueueItem) -> String {
        let locator = item.song.trim();
        if locator.starts_with("http://") || locator.starts_with("https://") {
            return locator.to_string();
        }
        format!("{}/{}", self.base_url, locator.trim_start_matches('/'))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        }
    }

    pub async fn get_queue_songs(&self, user_id: &str) -> Result<Vec<QueueItem>, QueueError> {
        let started_at = Utc::now();
        let url = self.queue_songs_url(user_id);
        let response = self.authorized(HTTP_CLIENT.get(&url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueueError::Status(status.as_u16()));
        }

        let items: Vec<QueueItem> = response
            .json()
            .await
            .map_err(|e| QueueError::Decode(e.to_string()))?;
        log_elapsed("queue-songs", started_at, &format!("{} items", items.len()));
        Ok(items)
    }

    pub async fn delete_from_queue(&self, item_id: &str) -> Result<(), QueueError> {
        let started_at = Utc::now();
        let url = self.delete_url(item_id);
        let response = self.authorized(HTTP_CLIENT.delete(&url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueueError::Status(status.as_u16()));
        }
        log_elapsed("queue-delete", started_at, item_id);
        Ok(())
    }
}

impl QueueBackend for QueueClient {
    async fn queue_songs(&self, user_id: &str) -> Result<Vec<QueueItem>, QueueError> {
        self.get_queue_songs(user_id).await
    }

    async fn delete_queue_item(&self, item_id: &str) -> Result<(), QueueError> {
        self.delete_from_queue(item_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(song: &str) -> QueueItem {
        QueueItem {
            id: "a1".to_string(),
            song_name: "Song".to_string(),
            artist_name: "Artist".to_string(),
            song: song.to_string(),
        }
    }

    #[test]
    fn endpoints_are_built_from_the_base_url() {
        let client = QueueClient::new("https://api.example.com/", Some("tok".to_string()));
        assert_eq!(
            client.queue_songs_url("user 1"),
            "https://api.example.com/api/playlist/queue-songs?userId=user%201"
        );
        assert_eq!(
            client.delete_url("65a1"),
            "https://api.example.com/api/playlist/queue/delete/65a1"
        );
    }

    #[test]
    fn song_locators_resolve_against_the_base() {
        let client = QueueClient::new("http://localhost:5000", None);
        assert_eq!(
            client.song_url(&item("uploads/a.mp3")),
            "http://localhost:5000/uploads/a.mp3"
        );
        assert_eq!(
            client.song_url(&item("/uploads/a.mp3")),
            "http://localhost:5000/uploads/a.mp3"
        );
        assert_eq!(
            client.song_url(&item("https://cdn.example.com/a.mp3")),
            "https://cdn.example.com/a.mp3"
        );
    }

    #[test]
    fn empty_token_is_treated_as_absent() {
        let client = QueueClient::new("http://localhost:5000", Some(String::new()));
        assert_eq!(client, QueueClient::new("http://localhost:5000", None));
    }
}
