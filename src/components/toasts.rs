use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::components::{notice_icon, Icon};
use crate::config::DEFAULT_TOAST_DURATION_MS;
use crate::queue::{Notice, NoticeBoard};
use crate::utils::sleep_ms;

/// Shared handle for raising notices from anywhere under the app shell.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastCenter {
    board: Signal<NoticeBoard>,
    duration_ms: Signal<u32>,
}

impl ToastCenter {
    pub fn new(board: Signal<NoticeBoard>, duration_ms: Signal<u32>) -> Self {
        Self { board, duration_ms }
    }

    pub fn set_duration(&self, ms: u32) {
        let mut duration_ms = self.duration_ms;
        duration_ms.set(ms);
    }

    pub fn push(&self, notice: Notice) {
        let mut board = self.board;
        let id = board.write().push(notice);
        let ms = *self.duration_ms.peek();
        // Runs on the root scope so the notice still expires after the view
        // that raised it is gone.
        spawn_forever(async move {
            sleep_ms(ms).await;
            board.write().dismiss(id);
        });
    }
}

pub fn use_toast_center() -> ToastCenter {
    let board = use_signal(NoticeBoard::default);
    let duration_ms = use_signal(|| DEFAULT_TOAST_DURATION_MS);
    use_context_provider(|| ToastCenter::new(board, duration_ms))
}

#[component]
pub fn Toasts() -> Element {
    let center = use_context::<ToastCenter>();
    let mut board = center.board;
    let notices: Vec<Notice> = board.read().notices().to_vec();

    rsx! {
        div { class: "toast-container", role: "status",
            for notice in notices {
                {
                    let id = notice.id;
                    rsx! {
                        div { key: "{id}", class: notice.level.css_class(),
                            Icon {
                                name: notice_icon(notice.level).to_string(),
                                class: "toast__icon".to_string(),
                            }
                            span { class: "toast__message", "{notice.message}" }
                            button {
                                class: "toast__close",
                                aria_label: "Dismiss",
                                onclick: move |_| {
                                    board.write().dismiss(id);
                                },
                                Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}
