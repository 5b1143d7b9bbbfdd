use crate::api::QueueItem;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Playing(usize),
}

/// In-memory playback bookkeeping. Items are tracked by id so the positions
/// stay right when the backend queue shrinks under us.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    pub(crate) current: Option<String>,
    pub(crate) last_played: Option<String>,
    pub(crate) started_once: bool,
    /// Finished items whose deletion may not be visible in a snapshot yet.
    pub(crate) completed: HashSet<String>,
}

impl PlaybackState {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn last_played(&self) -> Option<&str> {
        self.last_played.as_deref()
    }

    pub fn has_started_once(&self) -> bool {
        self.started_once
    }

    pub fn is_completed(&self, item_id: &str) -> bool {
        self.completed.contains(item_id)
    }

    pub fn current_index(&self, snapshot: &[QueueItem]) -> Option<usize> {
        position_of(snapshot, self.current.as_deref()?)
    }

    pub fn last_played_index(&self, snapshot: &[QueueItem]) -> Option<usize> {
        position_of(snapshot, self.last_played.as_deref()?)
    }

    pub fn phase(&self, snapshot: &[QueueItem]) -> PlaybackPhase {
        match self.current_index(snapshot) {
            Some(index) => PlaybackPhase::Playing(index),
            None => PlaybackPhase::Idle,
        }
    }

    /// First item after `after` (or from the head) that has not finished yet.
    pub(crate) fn next_unfinished(
        &self,
        snapshot: &[QueueItem],
        after: Option<usize>,
    ) -> Option<usize> {
        let start = after.map_or(0, |index| index + 1);
        (start..snapshot.len()).find(|&index| !self.completed.contains(&snapshot[index].id))
    }

    /// Where sequential playback continues: right after the last item it
    /// played, or from the head once that item has left the queue.
    pub fn next_sequential(&self, snapshot: &[QueueItem]) -> Option<usize> {
        self.next_unfinished(snapshot, self.last_played_index(snapshot))
    }
}

pub(crate) fn position_of(snapshot: &[QueueItem], item_id: &str) -> Option<usize> {
    snapshot.iter().position(|item| item.id == item_id)
}
