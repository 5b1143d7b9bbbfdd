pub mod models;
pub mod queue_client;

pub use models::*;
pub use queue_client::*;

use crate::error::QueueError;

/// The two queue operations the page needs from the backend.
#[allow(async_fn_in_trait)]
pub trait QueueBackend {
    async fn queue_songs(&self, user_id: &str) -> Result<Vec<QueueItem>, QueueError>;

    async fn delete_queue_item(&self, item_id: &str) -> Result<(), QueueError>;
}
