/// A playable resource bound to one queue item.
///
/// The controller owns one handle per item id and never looks media up by
/// render position.
pub trait PlaybackHandle {
    fn play(&self);

    fn pause(&self);

    fn is_paused(&self) -> bool;

    /// Called when the media reports a play/pause change it made on its own
    /// (browser media keys, end of track). Handles that can read the element
    /// directly ignore it.
    fn observe_paused(&self, _paused: bool) {}
}

#[cfg(test)]
pub(crate) mod fake {
    use super::PlaybackHandle;
    use std::cell::Cell;
    use std::rc::Rc;

    /// In-memory handle; clones share state so tests can inspect it after
    /// the controller took ownership.
    #[derive(Debug, Clone)]
    pub struct FakeHandle {
        paused: Rc<Cell<bool>>,
        plays: Rc<Cell<u32>>,
        pauses: Rc<Cell<u32>>,
        /// Reads its own state instead of trusting reported events, like a
        /// browser media element.
        element: bool,
    }

    impl FakeHandle {
        pub fn new() -> Self {
            Self {
                paused: Rc::new(Cell::new(true)),
                plays: Rc::new(Cell::new(0)),
                pauses: Rc::new(Cell::new(0)),
                element: false,
            }
        }

        pub fn element() -> Self {
            Self {
                element: true,
                ..Self::new()
            }
        }

        pub fn plays(&self) -> u32 {
            self.plays.get()
        }

        pub fn pauses(&self) -> u32 {
            self.pauses.get()
        }

        /// Natural end of media: the element pauses itself.
        pub fn finish(&self) {
            self.paused.set(true);
        }
    }

    impl PlaybackHandle for FakeHandle {
        fn play(&self) {
            self.paused.set(false);
            self.plays.set(self.plays.get() + 1);
        }

        fn pause(&self) {
            self.paused.set(true);
            self.pauses.set(self.pauses.get() + 1);
        }

        fn is_paused(&self) -> bool {
            self.paused.get()
        }

        fn observe_paused(&self, paused: bool) {
            if !self.element {
                self.paused.set(paused);
            }
        }
    }
}
