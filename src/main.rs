use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod db;
mod diagnostics;
mod error;
mod queue;
mod utils;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Songs in Queue" }
        document::Meta { name: "theme-color", content: "#1f2937" }
        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
