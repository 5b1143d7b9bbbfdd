//! Sequential playback over the fetched queue.
//!
//! The controller is a single state machine (Idle / Playing(i)) fed one
//! [`QueueEvent`] at a time. Snapshot updates and user/media actions go
//! through the same entry point, so a poll landing between a track ending and
//! the next one starting cannot interleave with it.
//!
//! Side effects that leave the page (deleting a finished song, showing a
//! notice) come back to the caller as [`QueueCommand`]s.

use crate::api::QueueItem;
use crate::queue::handle::PlaybackHandle;
use crate::queue::notice::Notice;
use crate::queue::state::{position_of, PlaybackPhase, PlaybackState};
use std::collections::{HashMap, HashSet};

pub enum QueueEvent<H> {
    /// A fetch replaced the queue.
    SnapshotUpdated(Vec<QueueItem>),
    /// The media element for an item is in the page.
    HandleMounted(String, H),
    /// "Play First Song".
    StartFirst,
    /// Play/pause button of one row.
    Toggle(String),
    /// An item's media reached its natural end.
    Ended(String),
    /// An item's media failed to load.
    LoadFailed(String),
    /// The media of an item paused or resumed by itself.
    MediaStateChanged { item_id: String, paused: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueueCommand {
    Delete(String),
    Notify(Notice),
}

pub struct PlaybackController<H> {
    snapshot: Vec<QueueItem>,
    handles: HashMap<String, H>,
    state: PlaybackState,
    interactive: bool,
    /// New items arrived while idle but their media was not mounted yet.
    advance_pending: bool,
    /// Item that should follow a finished one once its media mounts.
    advance_to: Option<String>,
}

impl<H: PlaybackHandle> PlaybackController<H> {
    pub fn new(interactive: bool) -> Self {
        Self {
            snapshot: Vec::new(),
            handles: HashMap::new(),
            state: PlaybackState::default(),
            interactive,
            advance_pending: false,
            advance_to: None,
        }
    }

    pub fn snapshot(&self) -> &[QueueItem] {
        &self.snapshot
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.state.phase(&self.snapshot)
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn can_start_first(&self) -> bool {
        !self.state.started_once && !self.snapshot.is_empty()
    }

    pub fn handle_for(&self, item_id: &str) -> Option<&H> {
        self.handles.get(item_id)
    }

    /// Whether the media of `item_id` is mounted and currently unpaused.
    pub fn is_unpaused(&self, item_id: &str) -> bool {
        self.handles
            .get(item_id)
            .map(|handle| !handle.is_paused())
            .unwrap_or(false)
    }

    pub fn handle(&mut self, event: QueueEvent<H>) -> Vec<QueueCommand> {
        match event {
            QueueEvent::SnapshotUpdated(items) => {
                self.apply_snapshot(items);
                Vec::new()
            }
            QueueEvent::HandleMounted(item_id, handle) => {
                self.attach(item_id, handle);
                Vec::new()
            }
            QueueEvent::StartFirst => {
                self.start_first();
                Vec::new()
            }
            QueueEvent::Toggle(item_id) => {
                self.toggle(&item_id);
                Vec::new()
            }
            QueueEvent::Ended(item_id) => self.finish(item_id),
            QueueEvent::LoadFailed(item_id) => {
                tracing::warn!("media for queue item {item_id} failed to load");
                vec![QueueCommand::Notify(Notice::media_failed())]
            }
            QueueEvent::MediaStateChanged { item_id, paused } => {
                self.observe(&item_id, paused);
                Vec::new()
            }
        }
    }

    fn apply_snapshot(&mut self, items: Vec<QueueItem>) {
        let known: HashSet<&str> = self.snapshot.iter().map(|i| i.id.as_str()).collect();
        let arrived = items.iter().any(|item| !known.contains(item.id.as_str()));

        let live: HashSet<String> = items.iter().map(|i| i.id.clone()).collect();
        self.snapshot = items;
        self.handles.retain(|id, _| live.contains(id));
        self.state.completed.retain(|id| live.contains(id));
        if let Some(current) = &self.state.current {
            if !live.contains(current) {
                self.state.current = None;
            }
        }

        if arrived && self.state.current.is_none() && self.state.started_once {
            self.advance_pending = true;
        }
        self.try_advance();
    }

    fn attach(&mut self, item_id: String, handle: H) {
        if position_of(&self.snapshot, &item_id).is_none() {
            return;
        }
        self.handles.insert(item_id, handle);
        self.try_advance();
    }

    /// Play/pause the media did by itself. A pause of the current item
    /// leaves the controller idle, the same as pausing it from its button.
    fn observe(&mut self, item_id: &str, paused: bool) {
        let Some(handle) = self.handles.get(item_id) else {
            return;
        };
        handle.observe_paused(paused);
        if paused && handle.is_paused() && self.state.current.as_deref() == Some(item_id) {
            self.state.current = None;
        }
    }

    fn try_advance(&mut self) {
        if let Some(target) = self.advance_to.clone() {
            let index = position_of(&self.snapshot, &target)
                .filter(|_| !self.state.completed.contains(&target));
            match index {
                Some(index) if self.state.current.is_none() => {
                    // Stays set until the media for `target` is mounted.
                    self.start(index, true);
                    return;
                }
                _ => self.advance_to = None,
            }
        }
        if !self.advance_pending {
            return;
        }
        if self.state.current.is_some() || !self.state.started_once {
            self.advance_pending = false;
            return;
        }
        match self.state.next_sequential(&self.snapshot) {
            Some(next) => {
                // Stays pending until the media for `next` is mounted.
                self.start(next, true);
            }
            None => self.advance_pending = false,
        }
    }

    fn start_first(&mut self) {
        if !self.can_start_first() {
            return;
        }
        if self.start(0, true) {
            self.state.started_once = true;
        }
    }

    fn toggle(&mut self, item_id: &str) {
        if !self.interactive {
            return;
        }
        let Some(index) = position_of(&self.snapshot, item_id) else {
            return;
        };
        let Some(handle) = self.handles.get(item_id) else {
            return;
        };
        if handle.is_paused() {
            self.start(index, false);
        } else {
            handle.pause();
            self.state.current = None;
        }
    }

    fn finish(&mut self, item_id: String) -> Vec<QueueCommand> {
        let Some(index) = position_of(&self.snapshot, &item_id) else {
            return Vec::new();
        };
        if !self.handles.contains_key(&item_id) {
            return Vec::new();
        }

        self.state.completed.insert(item_id.clone());
        if self.state.current.as_deref() == Some(item_id.as_str()) {
            self.state.current = None;
        }

        let next = self.state.next_unfinished(&self.snapshot, Some(index));
        let advanced = next.map(|next| self.start(next, true)).unwrap_or(false);
        if !advanced {
            self.state.current = None;
            self.advance_to = next.map(|next| self.snapshot[next].id.clone());
        }

        vec![QueueCommand::Delete(item_id)]
    }

    /// Plays the item at `index`. Indices without a snapshot entry or a
    /// mounted handle are ignored.
    fn start(&mut self, index: usize, sequential: bool) -> bool {
        let Some(item_id) = self.snapshot.get(index).map(|item| item.id.clone()) else {
            return false;
        };
        if !self.handles.contains_key(&item_id) {
            return false;
        }

        if let Some(previous) = self.state.current.take() {
            if previous != item_id {
                if let Some(handle) = self.handles.get(&previous) {
                    if !handle.is_paused() {
                        handle.pause();
                    }
                }
            }
        }

        if let Some(handle) = self.handles.get(&item_id) {
            handle.play();
        }
        if sequential {
            self.state.last_played = Some(item_id.clone());
        }
        self.state.current = Some(item_id);
        self.advance_pending = false;
        self.advance_to = None;
        true
    }
}
