use dioxus::prelude::*;

use crate::queue::NoticeLevel;

#[component]
pub fn Icon(name: String, class: String) -> Element {
    match name.as_str() {
        "queue" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M8 6h13" }
                path { d: "M8 12h13" }
                path { d: "M8 18h13" }
                path { d: "M3 6h.01" }
                path { d: "M3 12h.01" }
                path { d: "M3 18h.01" }
            }
        },
        "check" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "20 6 9 17 4 12" }
            }
        },
        "alert" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M12 8v4" }
                path { d: "M12 16h.01" }
            }
        },
        "x" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M18 6 6 18" }
                path { d: "M6 6l12 12" }
            }
        },
        "loader" => rsx! {
            svg {
                class: "{class} animate-spin",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle {
                    cx: "12",
                    cy: "12",
                    r: "10",
                    opacity: "0.25",
                }
                path { d: "M12 2a10 10 0 0 1 10 10", opacity: "0.75" }
            }
        },
        _ => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    }
}

pub fn notice_icon(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "check",
        NoticeLevel::Error => "alert",
        NoticeLevel::Info => "queue",
    }
}
