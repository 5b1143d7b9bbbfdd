//! Playback handles over the `audio` elements rendered for each queue row.

use dioxus::prelude::*;

use crate::queue::PlaybackHandle;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlAudioElement;

#[cfg(not(target_arch = "wasm32"))]
use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::rc::Rc;

/// Browser build: drives the element directly.
#[cfg(target_arch = "wasm32")]
pub struct MediaHandle {
    audio: HtmlAudioElement,
}

#[cfg(target_arch = "wasm32")]
impl MediaHandle {
    pub fn from_mounted(event: &MountedEvent, _dom_id: &str) -> Option<Self> {
        let element = event.data().downcast::<web_sys::Element>()?.clone();
        let audio = element.dyn_into::<HtmlAudioElement>().ok()?;
        Some(Self { audio })
    }

    /// `MediaError.code` of the element, when it failed.
    pub fn error_code(&self) -> Option<u16> {
        let audio_js = wasm_bindgen::JsValue::from(self.audio.clone());
        let error_js = js_sys::Reflect::get(&audio_js, &"error".into()).ok()?;
        if error_js.is_null() || error_js.is_undefined() {
            return None;
        }
        js_sys::Reflect::get(&error_js, &"code".into())
            .ok()
            .and_then(|value| value.as_f64())
            .map(|code| code as u16)
    }
}

#[cfg(target_arch = "wasm32")]
impl PlaybackHandle for MediaHandle {
    fn play(&self) {
        let audio = self.audio.clone();
        match self.audio.play() {
            Ok(promise) => {
                spawn(async move {
                    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        tracing::warn!("audio play request was rejected: {err:?}");
                        report_paused(&audio);
                    }
                });
            }
            Err(err) => {
                tracing::warn!("audio play request failed: {err:?}");
                report_paused(&audio);
            }
        }
    }

    fn pause(&self) {
        let _ = self.audio.pause();
    }

    fn is_paused(&self) -> bool {
        self.audio.paused()
    }
}

/// A rejected play leaves the element paused without a `pause` event, so one
/// is raised for the row's `onpause` handler.
#[cfg(target_arch = "wasm32")]
fn report_paused(audio: &HtmlAudioElement) {
    if let Ok(event) = web_sys::Event::new("pause") {
        let _ = audio.dispatch_event(&event);
    }
}

/// Desktop build: the page lives in a webview, so commands go through
/// `document::eval` and the paused flag is mirrored from media events.
#[cfg(not(target_arch = "wasm32"))]
pub struct MediaHandle {
    dom_id: String,
    paused: Rc<Cell<bool>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaHandle {
    pub fn from_mounted(_event: &MountedEvent, dom_id: &str) -> Option<Self> {
        Some(Self {
            dom_id: dom_id.to_string(),
            paused: Rc::new(Cell::new(true)),
        })
    }

    pub fn error_code(&self) -> Option<u16> {
        None
    }

    fn command(&self, method: &str) {
        let target = serde_json::to_string(&self.dom_id).unwrap_or_else(|_| "\"\"".to_string());
        let script = format!(
            r#"(function () {{
                const el = document.getElementById({target});
                if (!el) return false;
                const result = el.{method}();
                if (result && typeof result.catch === "function") {{
                    result.catch(() => el.dispatchEvent(new Event("pause")));
                }}
                return true;
            }})();"#
        );
        let _ = document::eval(&script);
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PlaybackHandle for MediaHandle {
    fn play(&self) {
        self.paused.set(false);
        self.command("play");
    }

    fn pause(&self) {
        self.paused.set(true);
        self.command("pause");
    }

    fn is_paused(&self) -> bool {
        self.paused.get()
    }

    fn observe_paused(&self, paused: bool) {
        self.paused.set(paused);
    }
}
