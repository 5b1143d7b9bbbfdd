use dioxus::prelude::*;

use crate::components::{AppView, ListenerQuery};

/// Shown for any path other than the queue page.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "container mt-4",
            h1 { class: "mb-2 mt-3", "Page not found" }
            p { class: "text-muted", "Nothing lives at /{path}." }
            Link {
                to: AppView::Queue {
                    query: ListenerQuery::default(),
                },
                "Go to the queue"
            }
        }
    }
}
