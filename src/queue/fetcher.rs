use crate::api::{QueueBackend, QueueItem};
use crate::error::QueueError;
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Replace the snapshot with these items.
    Updated(Vec<QueueItem>),
    Failed(QueueError),
    /// Out of order or arrived after teardown.
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    Failed(QueueError),
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ticket {
    seq: u64,
    generation: u64,
}

/// Retrieves one listener's queue and removes finished items from it.
///
/// Polls may overlap. Each request takes a sequence number and a response is
/// only applied if nothing newer was applied before it. `teardown` bumps the
/// generation so whatever is still in flight is dropped on arrival.
pub struct QueueFetcher<B> {
    backend: B,
    listener: Option<String>,
    issued: Cell<u64>,
    applied: Cell<u64>,
    generation: Cell<u64>,
}

impl<B: QueueBackend> QueueFetcher<B> {
    pub fn new(backend: B, listener: Option<String>) -> Self {
        Self {
            backend,
            listener: listener.filter(|id| !id.trim().is_empty()),
            issued: Cell::new(0),
            applied: Cell::new(0),
            generation: Cell::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn listener(&self) -> Option<&str> {
        self.listener.as_deref()
    }

    /// Ends the fetcher's session: in-flight results are dropped and no new
    /// request is sent.
    pub fn teardown(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    pub fn is_torn_down(&self) -> bool {
        self.generation.get() > 0
    }

    fn issue(&self) -> Ticket {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        Ticket {
            seq,
            generation: self.generation.get(),
        }
    }

    fn is_live(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation.get()
    }

    pub async fn fetch_queue(&self) -> FetchOutcome {
        if self.is_torn_down() {
            return FetchOutcome::Discarded;
        }
        let Some(user_id) = self.listener.as_deref() else {
            return FetchOutcome::Failed(QueueError::IdentityMissing);
        };

        let ticket = self.issue();
        let result = self.backend.queue_songs(user_id).await;

        if !self.is_live(ticket) || ticket.seq < self.applied.get() {
            tracing::debug!("dropping queue response #{}", ticket.seq);
            return FetchOutcome::Discarded;
        }

        match result {
            Ok(items) => {
                self.applied.set(ticket.seq);
                FetchOutcome::Updated(items)
            }
            Err(err) => {
                tracing::warn!("Error fetching queue music: {err}");
                FetchOutcome::Failed(err)
            }
        }
    }

    pub async fn delete_queue_item(&self, item_id: &str) -> DeleteOutcome {
        if self.is_torn_down() {
            return DeleteOutcome::Discarded;
        }
        let ticket = self.issue();
        let result = self.backend.delete_queue_item(item_id).await;

        if !self.is_live(ticket) {
            return DeleteOutcome::Discarded;
        }

        match result {
            Ok(()) => DeleteOutcome::Deleted,
            Err(err) => {
                tracing::warn!("Error deleting song {item_id} from queue: {err}");
                DeleteOutcome::Failed(err)
            }
        }
    }
}
