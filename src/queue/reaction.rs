//! What the page does with the result of a fetch or a delete.

use crate::queue::controller::QueueEvent;
use crate::queue::fetcher::{DeleteOutcome, FetchOutcome};
use crate::queue::notice::Notice;

pub struct Reaction<H> {
    /// Fed to the controller.
    pub event: Option<QueueEvent<H>>,
    pub notice: Option<Notice>,
    /// Fetch the queue again right away.
    pub refetch: bool,
}

impl<H> Reaction<H> {
    fn none() -> Self {
        Self {
            event: None,
            notice: None,
            refetch: false,
        }
    }
}

impl FetchOutcome {
    /// A failed fetch only notifies, so the rows on screen stay as they were.
    pub fn into_reaction<H>(self) -> Reaction<H> {
        match self {
            FetchOutcome::Updated(items) => Reaction {
                event: Some(QueueEvent::SnapshotUpdated(items)),
                ..Reaction::none()
            },
            FetchOutcome::Failed(err) => Reaction {
                notice: Some(Notice::fetch_failed(&err)),
                ..Reaction::none()
            },
            FetchOutcome::Discarded => Reaction::none(),
        }
    }
}

impl DeleteOutcome {
    pub fn into_reaction<H>(self) -> Reaction<H> {
        match self {
            DeleteOutcome::Deleted => Reaction {
                notice: Some(Notice::deleted()),
                refetch: true,
                ..Reaction::none()
            },
            // No retry; the item stays until a later poll drops it.
            DeleteOutcome::Failed(_) => Reaction {
                notice: Some(Notice::delete_failed()),
                ..Reaction::none()
            },
            DeleteOutcome::Discarded => Reaction::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::QueueItem;
    use crate::error::QueueError;
    use crate::queue::controller::{PlaybackController, QueueCommand};
    use crate::queue::handle::fake::FakeHandle;
    use crate::queue::notice::{
        NoticeLevel, MSG_DELETE_FAILED, MSG_DELETE_OK, MSG_FETCH_FAILED, MSG_IDENTITY_MISSING,
    };

    fn item(id: &str) -> QueueItem {
        QueueItem {
            id: id.to_string(),
            song_name: format!("Song {id}"),
            artist_name: "Artist".to_string(),
            song: format!("uploads/{id}.mp3"),
        }
    }

    /// Applies a reaction the way the page does and returns the notices shown.
    fn apply(
        controller: &mut PlaybackController<FakeHandle>,
        reaction: Reaction<FakeHandle>,
    ) -> Vec<Notice> {
        let mut notices = Vec::new();
        if let Some(event) = reaction.event {
            for command in controller.handle(event) {
                if let QueueCommand::Notify(notice) = command {
                    notices.push(notice);
                }
            }
        }
        notices.extend(reaction.notice);
        notices
    }

    fn loaded(ids: &[&str]) -> PlaybackController<FakeHandle> {
        let mut controller = PlaybackController::new(true);
        let items = ids.iter().map(|id| item(id)).collect();
        controller.handle(QueueEvent::SnapshotUpdated(items));
        controller
    }

    #[test]
    fn successful_fetch_replaces_the_rows() {
        let mut controller = loaded(&["a"]);
        let reaction = FetchOutcome::Updated(vec![item("a"), item("b")]).into_reaction();
        assert!(!reaction.refetch);
        let notices = apply(&mut controller, reaction);
        assert!(notices.is_empty());
        assert_eq!(controller.snapshot().len(), 2);
    }

    #[test]
    fn failed_fetch_keeps_the_rows_and_notifies_once() {
        let mut controller = loaded(&["a", "b"]);
        let before = controller.snapshot().to_vec();

        let reaction = FetchOutcome::Failed(QueueError::Status(500)).into_reaction();
        assert!(reaction.event.is_none());
        assert!(!reaction.refetch);
        let notices = apply(&mut controller, reaction);

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, MSG_FETCH_FAILED);
        assert_eq!(controller.snapshot(), before.as_slice());
    }

    #[test]
    fn missing_listener_gets_its_own_message() {
        let reaction: Reaction<FakeHandle> =
            FetchOutcome::Failed(QueueError::IdentityMissing).into_reaction();
        let notice = reaction.notice.expect("notice");
        assert_eq!(notice.message, MSG_IDENTITY_MISSING);
    }

    #[test]
    fn deleted_item_notifies_and_refetches() {
        let reaction: Reaction<FakeHandle> = DeleteOutcome::Deleted.into_reaction();
        assert!(reaction.refetch);
        assert!(reaction.event.is_none());
        let notice = reaction.notice.expect("notice");
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, MSG_DELETE_OK);
    }

    #[test]
    fn failed_delete_notifies_without_retry_or_state_change() {
        let mut controller = loaded(&["a"]);
        let reaction = DeleteOutcome::Failed(QueueError::Network("offline".into())).into_reaction();
        assert!(!reaction.refetch);
        let notices = apply(&mut controller, reaction);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, MSG_DELETE_FAILED);
        assert_eq!(controller.snapshot().len(), 1);
    }

    #[test]
    fn discarded_results_do_nothing() {
        let fetched: Reaction<FakeHandle> = FetchOutcome::Discarded.into_reaction();
        assert!(fetched.event.is_none() && fetched.notice.is_none() && !fetched.refetch);
        let deleted: Reaction<FakeHandle> = DeleteOutcome::Discarded.into_reaction();
        assert!(deleted.event.is_none() && deleted.notice.is_none() && !deleted.refetch);
    }
}
