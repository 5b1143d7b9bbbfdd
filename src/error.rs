/// Failures the queue page can run into. None of them are fatal; each one is
/// turned into a notice at the call site.
#[derive(Debug, Clone, PartialEq)]
pub enum QueueError {
    /// The page URL carries no `userId`.
    IdentityMissing,
    /// The request never produced a response.
    Network(String),
    /// The backend answered with a non-success status. An empty queue is
    /// reported this way too.
    Status(u16),
    /// The response body was not the expected JSON.
    Decode(String),
    /// Local credential or config storage could not be read or written.
    Storage(String),
}

impl QueueError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl std::fmt::Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentityMissing => write!(f, "no listener identity in the page URL"),
            Self::Network(msg) => write!(f, "network error: {}", msg),
            Self::Status(code) => write!(f, "backend responded with status {}", code),
            Self::Decode(msg) => write!(f, "unexpected response body: {}", msg),
            Self::Storage(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

impl std::error::Error for QueueError {}

impl From<reqwest::Error> for QueueError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Network(err.to_string()),
        }
    }
}
