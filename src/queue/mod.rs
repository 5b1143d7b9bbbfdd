//! The queue page without any UI: fetch bookkeeping, the playback state
//! machine and the projection the view renders from.

pub mod controller;
pub mod fetcher;
pub mod handle;
pub mod notice;
pub mod reaction;
pub mod state;
pub mod view;

pub use controller::{PlaybackController, QueueCommand, QueueEvent};
pub use fetcher::{DeleteOutcome, FetchOutcome, QueueFetcher};
pub use handle::PlaybackHandle;
pub use notice::{Notice, NoticeBoard, NoticeLevel};
pub use reaction::Reaction;
pub use state::{PlaybackPhase, PlaybackState};
pub use view::{project, QueueListing, QueueProjection, QueueRow};
