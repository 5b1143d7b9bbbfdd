use dioxus::prelude::*;
use std::rc::Rc;

use crate::api::QueueClient;
use crate::components::{MediaHandle, ToastCenter};
use crate::queue::{PlaybackController, QueueCommand, QueueEvent, QueueFetcher, Reaction};

pub(crate) type QueueController = PlaybackController<MediaHandle>;

/// Connects the playback controller to the network and to the toasts.
///
/// Every event is applied synchronously under one write of the controller
/// signal, so events never interleave. Network work is spawned on the view's
/// scope and reports back through `dispatch`.
#[derive(Clone)]
pub(crate) struct QueueDriver {
    controller: Signal<QueueController>,
    fetcher: Rc<QueueFetcher<QueueClient>>,
    toasts: ToastCenter,
}

impl QueueDriver {
    pub fn new(
        controller: Signal<QueueController>,
        fetcher: QueueFetcher<QueueClient>,
        toasts: ToastCenter,
    ) -> Self {
        Self {
            controller,
            fetcher: Rc::new(fetcher),
            toasts,
        }
    }

    pub fn song_url(&self, item: &crate::api::QueueItem) -> String {
        self.fetcher.backend().song_url(item)
    }

    pub fn dispatch(&self, event: QueueEvent<MediaHandle>) {
        if self.fetcher.is_torn_down() {
            return;
        }
        let mut controller = self.controller;
        let commands = controller.write().handle(event);
        for command in commands {
            self.run(command);
        }
    }

    fn run(&self, command: QueueCommand) {
        match command {
            QueueCommand::Notify(notice) => self.toasts.push(notice),
            QueueCommand::Delete(item_id) => {
                let driver = self.clone();
                spawn(async move {
                    driver.delete(item_id).await;
                });
            }
        }
    }

    /// Applies a fetch or delete result; returns whether to fetch again.
    fn react(&self, reaction: Reaction<MediaHandle>) -> bool {
        if let Some(event) = reaction.event {
            self.dispatch(event);
        }
        if let Some(notice) = reaction.notice {
            self.toasts.push(notice);
        }
        reaction.refetch
    }

    pub async fn refresh(&self) {
        let outcome = self.fetcher.fetch_queue().await;
        self.react(outcome.into_reaction());
    }

    async fn delete(&self, item_id: String) {
        let outcome = self.fetcher.delete_queue_item(&item_id).await;
        if self.react(outcome.into_reaction()) {
            self.refresh().await;
        }
    }

    /// Media error for one row; the element's error code goes to the log.
    pub fn media_failed(&self, item_id: String) {
        let code = self
            .controller
            .peek()
            .handle_for(&item_id)
            .and_then(|handle| handle.error_code());
        if let Some(code) = code {
            tracing::warn!("audio for queue item {item_id} failed with MediaError code {code}");
        }
        self.dispatch(QueueEvent::LoadFailed(item_id));
    }

    pub fn teardown(&self) {
        self.fetcher.teardown();
    }
}
