//! Helpers for the universal file converter: multipart form assembly and
//! drag-and-drop extraction.

use gloo_console::error;
use web_sys::{DragEvent, FormData};

pub fn build_form(file: &web_sys::File, clerk_id: &str, target_format: &str) -> Option<FormData> {
    let form = FormData::new()
        .map_err(|err| error!("form construction failed", err))
        .ok()?;
    form.append_with_blob("file", file).ok()?;
    form.append_with_str("clerkId", clerk_id).ok()?;
    form.append_with_str("targetFormat", target_format).ok()?;
    Some(form)
}

/// First file of a drop event, if any.
pub fn first_dropped_file(event: &DragEvent) -> Option<web_sys::File> {
    event
        .data_transfer()
        .and_then(|dt| dt.files())
        .and_then(|list| list.get(0))
}
