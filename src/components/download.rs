//! Download Button Component
//!
//! Saves the given thought to disk: image thoughts download straight from
//! their source reference, text thoughts become a plain-text Blob served
//! through a temporary object URL.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::global::{Thought, ThoughtKind};

/// Download control for a single thought
#[component]
pub fn DownloadButton(
    thought: Thought,
    /// Smaller styling for list entries
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let class = if compact {
        "px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm transition-colors"
    } else {
        "px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
    };

    let on_click = move |_| download_thought(&thought);

    view! {
        <button on:click=on_click class=class>
            "⬇ Download"
        </button>
    }
}

/// Trigger a browser download for the thought's content
pub fn download_thought(thought: &Thought) {
    match thought.kind {
        ThoughtKind::Image => {
            trigger_download(&thought.content, &file_name("jpg"));
        }
        ThoughtKind::Text => {
            let parts = js_sys::Array::of1(&thought.content.clone().into());
            let blob = match web_sys::Blob::new_with_str_sequence(&parts) {
                Ok(blob) => blob,
                Err(e) => {
                    web_sys::console::error_1(&format!("Blob creation failed: {:?}", e).into());
                    return;
                }
            };

            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) {
                trigger_download(&url, &file_name("txt"));
                let _ = web_sys::Url::revoke_object_url(&url);
            }
        }
    }
}

fn file_name(extension: &str) -> String {
    format!(
        "daily-thought-{}.{}",
        chrono::Utc::now().timestamp_millis(),
        extension
    )
}

/// Click a synthetic anchor pointing at `href`
fn trigger_download(href: &str, file_name: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Ok(a) = document.create_element("a") {
        let _ = a.set_attribute("href", href);
        let _ = a.set_attribute("download", file_name);
        if let Some(el) = a.dyn_ref::<web_sys::HtmlElement>() {
            el.click();
        }
    }
}
