use serde::{Deserialize, Serialize};

/// One pending song in a listener's queue, as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueueItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, rename = "songName", alias = "song_name")]
    pub song_name: String,
    #[serde(default, rename = "artistName", alias = "artist_name")]
    pub artist_name: String,
    /// Locator of the audio file, relative to the API base unless absolute.
    #[serde(default)]
    pub song: String,
}

impl QueueItem {
    pub fn title_line(&self) -> String {
        format!("{} - {}", self.song_name, self.artist_name)
    }
}

/// Values read from client storage when the page loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClientCredentials {
    #[serde(default)]
    pub token: Option<String>,
    /// The signed-in user stored locally. Its presence is what enables the
    /// per-song play buttons.
    #[serde(default, alias = "userId")]
    pub stored_user_id: Option<String>,
}

impl ClientCredentials {
    pub fn is_interactive(&self) -> bool {
        self.stored_user_id.is_some()
    }
}
