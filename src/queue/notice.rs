//! User-visible notifications.

use crate::error::QueueError;
use uuid::Uuid;

pub const MSG_IDENTITY_MISSING: &str = "No userId found in URL.";
pub const MSG_FETCH_FAILED: &str = "No song in the queue. Please add song in the queue.";
pub const MSG_DELETE_OK: &str = "Song deleted from queue successfully.";
pub const MSG_DELETE_FAILED: &str = "Error deleting song from queue. Please try again.";
pub const MSG_MEDIA_FAILED: &str = "Error loading audio file.";

/// Older notices are dropped past this many.
pub const MAX_VISIBLE_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "toast toast--success",
            NoticeLevel::Error => "toast toast--error",
            NoticeLevel::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    /// Every fetch failure except a missing identity collapses into one
    /// generic message; an empty queue is reported by the backend as an error.
    pub fn fetch_failed(err: &QueueError) -> Self {
        match err {
            QueueError::IdentityMissing => Self::error(MSG_IDENTITY_MISSING),
            _ => Self::error(MSG_FETCH_FAILED),
        }
    }

    pub fn deleted() -> Self {
        Self::success(MSG_DELETE_OK)
    }

    pub fn delete_failed() -> Self {
        Self::error(MSG_DELETE_FAILED)
    }

    pub fn media_failed() -> Self {
        Self::error(MSG_MEDIA_FAILED)
    }
}

/// The notices currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, notice: Notice) -> Uuid {
        let id = notice.id;
        self.notices.push(notice);
        if self.notices.len() > MAX_VISIBLE_NOTICES {
            let overflow = self.notices.len() - MAX_VISIBLE_NOTICES;
            self.notices.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failures_share_one_message() {
        let network = Notice::fetch_failed(&QueueError::Network("refused".into()));
        let empty = Notice::fetch_failed(&QueueError::Status(404));
        assert_eq!(network.message, MSG_FETCH_FAILED);
        assert_eq!(empty.message, MSG_FETCH_FAILED);
        assert_eq!(network.level, NoticeLevel::Error);

        let missing = Notice::fetch_failed(&QueueError::IdentityMissing);
        assert_eq!(missing.message, MSG_IDENTITY_MISSING);
    }

    #[test]
    fn board_dismisses_by_id() {
        let mut board = NoticeBoard::default();
        let first = board.push(Notice::deleted());
        let second = board.push(Notice::delete_failed());
        assert!(board.dismiss(first));
        assert!(!board.dismiss(first));
        assert_eq!(board.notices().len(), 1);
        assert_eq!(board.notices()[0].id, second);
    }

    #[test]
    fn board_keeps_only_the_newest() {
        let mut board = NoticeBoard::default();
        for _ in 0..MAX_VISIBLE_NOTICES {
            board.push(Notice::fetch_failed(&QueueError::Status(500)));
        }
        let newest = board.push(Notice::info("latest"));
        assert_eq!(board.notices().len(), MAX_VISIBLE_NOTICES);
        assert_eq!(board.notices().last().map(|n| n.id), Some(newest));
    }
}
