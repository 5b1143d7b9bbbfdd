use crate::api::QueueItem;
use crate::queue::controller::PlaybackController;
use crate::queue::handle::PlaybackHandle;

pub const PLAY_GLYPH: &str = "▶️";
pub const PAUSE_GLYPH: &str = "⏸️";
pub const EMPTY_QUEUE_TEXT: &str = "No songs in the queue.";

#[derive(Debug, Clone, PartialEq)]
pub struct QueueRow {
    pub index: usize,
    pub item: QueueItem,
    /// The row's media is mounted and unpaused.
    pub playing: bool,
}

impl QueueRow {
    pub fn glyph(&self) -> &'static str {
        if self.playing {
            PAUSE_GLYPH
        } else {
            PLAY_GLYPH
        }
    }

    pub fn button_class(&self) -> &'static str {
        if self.playing {
            "play-button playing"
        } else {
            "play-button"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueueListing {
    #[default]
    Empty,
    Rows(Vec<QueueRow>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueueProjection {
    pub listing: QueueListing,
    pub can_start_first: bool,
    pub interactive: bool,
}

pub fn project<H: PlaybackHandle>(controller: &PlaybackController<H>) -> QueueProjection {
    let snapshot = controller.snapshot();
    let listing = if snapshot.is_empty() {
        QueueListing::Empty
    } else {
        QueueListing::Rows(
            snapshot
                .iter()
                .enumerate()
                .map(|(index, item)| QueueRow {
                    index,
                    item: item.clone(),
                    playing: controller.is_unpaused(&item.id),
                })
                .collect(),
        )
    };

    QueueProjection {
        listing,
        can_start_first: controller.can_start_first(),
        interactive: controller.is_interactive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::controller::QueueEvent;
    use crate::queue::handle::fake::FakeHandle;

    fn item(id: &str, name: &str) -> QueueItem {
        QueueItem {
            id: id.to_string(),
            song_name: name.to_string(),
            artist_name: "Nina".to_string(),
            song: format!("uploads/{id}.mp3"),
        }
    }

    #[test]
    fn empty_snapshot_renders_only_the_placeholder() {
        let mut controller = PlaybackController::<FakeHandle>::new(true);
        assert_eq!(project(&controller).listing, QueueListing::Empty);

        controller.handle(QueueEvent::SnapshotUpdated(vec![item("a", "Sinnerman")]));
        controller.handle(QueueEvent::SnapshotUpdated(Vec::new()));
        let projection = project(&controller);
        assert_eq!(projection.listing, QueueListing::Empty);
        assert!(!projection.can_start_first);
    }

    #[test]
    fn rows_follow_snapshot_order_and_handle_state() {
        let mut controller = PlaybackController::new(true);
        controller.handle(QueueEvent::SnapshotUpdated(vec![
            item("a", "Sinnerman"),
            item("b", "Feeling Good"),
        ]));
        controller.handle(QueueEvent::HandleMounted("a".to_string(), FakeHandle::new()));
        controller.handle(QueueEvent::HandleMounted("b".to_string(), FakeHandle::new()));
        controller.handle(QueueEvent::StartFirst);

        let projection = project(&controller);
        let QueueListing::Rows(rows) = projection.listing else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].item.title_line(), "Sinnerman - Nina");
        assert_eq!(rows[0].glyph(), PAUSE_GLYPH);
        assert_eq!(rows[0].button_class(), "play-button playing");
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].glyph(), PLAY_GLYPH);
        assert!(!projection.can_start_first);
        assert!(projection.interactive);
    }

    #[test]
    fn media_failure_keeps_rows() {
        let mut controller = PlaybackController::<FakeHandle>::new(false);
        controller.handle(QueueEvent::SnapshotUpdated(vec![item("a", "Sinnerman")]));
        let before = project(&controller);
        controller.handle(QueueEvent::LoadFailed("a".to_string()));
        assert_eq!(project(&controller), before);
        assert!(!before.interactive);
    }
}
