use dioxus::prelude::*;

mod driver;

use driver::{QueueController, QueueDriver};

use crate::api::QueueClient;
use crate::components::{ClientSession, Icon, ListenerQuery, MediaHandle, ToastCenter};
use crate::queue::view::EMPTY_QUEUE_TEXT;
use crate::queue::{project, QueueEvent, QueueFetcher, QueueListing};
use crate::utils::{media_dom_id, sleep_ms};

const LOGO: Asset = asset!("/assets/images/logo.svg");

/// Route target for `/queue?userId=...`.
#[component]
pub fn Queue(query: ListenerQuery) -> Element {
    let session = use_context::<Signal<Option<ClientSession>>>();
    let listener = query.user_id();
    let view_key = listener.clone().unwrap_or_default();

    match session() {
        Some(session) => rsx! {
            QueueView { key: "{view_key}", listener, session }
        },
        None => rsx! {
            div { class: "flex items-center justify-center py-20",
                Icon { name: "loader".to_string(), class: "w-8 h-8 text-zinc-500".to_string() }
            }
        },
    }
}

#[component]
pub fn QueueView(listener: Option<String>, session: ClientSession) -> Element {
    let toasts = use_context::<ToastCenter>();
    let interactive = session.credentials.is_interactive();
    let controller = use_signal(|| QueueController::new(interactive));

    let driver = use_hook(|| {
        let client = QueueClient::new(
            &session.config.api_base_url,
            session.credentials.token.clone(),
        );
        QueueDriver::new(controller, QueueFetcher::new(client, listener.clone()), toasts)
    });

    // Fetch on mount, then on a fixed interval for as long as the view is
    // mounted. Ticks do not wait for the previous response; the fetcher
    // drops stale ones.
    let poll_interval_ms = session.config.poll_interval_ms;
    {
        let driver = driver.clone();
        use_future(move || {
            let driver = driver.clone();
            async move {
                loop {
                    let tick = driver.clone();
                    spawn(async move {
                        tick.refresh().await;
                    });
                    sleep_ms(poll_interval_ms).await;
                }
            }
        });
    }

    {
        let driver = driver.clone();
        use_drop(move || driver.teardown());
    }

    let projection = project(&controller.read());
    let interactive = projection.interactive;

    let on_start_first = {
        let driver = driver.clone();
        move |_| driver.dispatch(QueueEvent::StartFirst)
    };

    rsx! {
        div { class: "container mt-4",
            div { class: "lock",
                img {
                    src: LOGO,
                    width: "230",
                    height: "100",
                    alt: "Logo",
                }
            }
            h1 { class: "mb-2 mt-3", "Songs in Queue" }
            button {
                class: "btn btn-primary mb-4",
                disabled: !projection.can_start_first,
                onclick: on_start_first,
                "Play First Song"
            }

            table { class: "table table-striped table-bordered table-hover",
                tbody {
                    match projection.listing {
                        QueueListing::Empty => rsx! {
                            tr {
                                td { colspan: "4",
                                    div { class: "alert alert-info", role: "alert",
                                        Icon {
                                            name: "queue".to_string(),
                                            class: "w-4 h-4 inline mr-2".to_string(),
                                        }
                                        "{EMPTY_QUEUE_TEXT}"
                                    }
                                }
                            }
                        },
                        QueueListing::Rows(rows) => rsx! {
                            for row in rows {
                                {
                                    let item_id = row.item.id.clone();
                                    let dom_id = media_dom_id(&item_id);
                                    let src = driver.song_url(&row.item);
                                    let title = row.item.title_line();
                                    let button_class = row.button_class();
                                    let glyph = row.glyph();

                                    let on_toggle = {
                                        let driver = driver.clone();
                                        let item_id = item_id.clone();
                                        move |_| driver.dispatch(QueueEvent::Toggle(item_id.clone()))
                                    };
                                    let on_mounted = {
                                        let driver = driver.clone();
                                        let item_id = item_id.clone();
                                        let dom_id = dom_id.clone();
                                        move |evt: MountedEvent| {
                                            if let Some(handle) = MediaHandle::from_mounted(&evt, &dom_id) {
                                                driver.dispatch(QueueEvent::HandleMounted(item_id.clone(), handle));
                                            }
                                        }
                                    };
                                    let on_ended = {
                                        let driver = driver.clone();
                                        let item_id = item_id.clone();
                                        move |_| driver.dispatch(QueueEvent::Ended(item_id.clone()))
                                    };
                                    let on_error = {
                                        let driver = driver.clone();
                                        let item_id = item_id.clone();
                                        move |_| driver.media_failed(item_id.clone())
                                    };
                                    let on_play = {
                                        let driver = driver.clone();
                                        let item_id = item_id.clone();
                                        move |_| {
                                            driver.dispatch(QueueEvent::MediaStateChanged {
                                                item_id: item_id.clone(),
                                                paused: false,
                                            })
                                        }
                                    };
                                    let on_pause = {
                                        let driver = driver.clone();
                                        let item_id = item_id.clone();
                                        move |_| {
                                            driver.dispatch(QueueEvent::MediaStateChanged {
                                                item_id: item_id.clone(),
                                                paused: true,
                                            })
                                        }
                                    };

                                    rsx! {
                                        tr { key: "{item_id}",
                                            td {
                                                h2 { "{title}" }
                                            }
                                            td {
                                                div { class: "music-item",
                                                    button {
                                                        class: "btn {button_class}",
                                                        disabled: !interactive,
                                                        onclick: on_toggle,
                                                        "{glyph}"
                                                    }
                                                    audio {
                                                        id: "{dom_id}",
                                                        src: "{src}",
                                                        preload: "metadata",
                                                        "data-id": "{item_id}",
                                                        onmounted: on_mounted,
                                                        onended: on_ended,
                                                        onerror: on_error,
                                                        onplay: on_play,
                                                        onpause: on_pause,
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
