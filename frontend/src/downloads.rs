//! Browser-native glue: object URLs, synthetic download clicks, clipboard.

use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Wraps server-returned bytes in a blob and triggers a download. The
/// returned `ObjectUrl` must be kept alive (held in component state) until
/// the browser has picked the download up; it revokes itself on drop.
pub fn save_bytes(bytes: &[u8], filename: &str) -> ObjectUrl {
    let url = ObjectUrl::from(Blob::new(bytes));
    trigger_download(&url, filename);
    url
}

/// Triggers a download of an already-addressable resource (data URI or
/// remote URL).
pub fn save_href(href: &str, filename: &str) {
    trigger_download(href, filename);
}

fn trigger_download(href: &str, filename: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(anchor), Some(body)) = (document.create_element("a"), document.body()) {
            if let Ok(anchor) = anchor.dyn_into::<HtmlAnchorElement>() {
                anchor.set_href(href);
                anchor.set_download(filename);
                if body.append_child(&anchor).is_ok() {
                    anchor.click();
                    anchor.remove();
                }
            }
        }
    }
}

/// Fire-and-forget clipboard write backing the copy buttons.
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

/// Object URL for previewing a just-selected file before upload.
pub fn preview_url(file: &web_sys::File) -> ObjectUrl {
    ObjectUrl::from(gloo_file::File::from(file.clone()))
}
