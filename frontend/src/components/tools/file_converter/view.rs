//! View rendering for the universal file converter.

use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

use crate::components::ui;
use crate::files;

use super::messages::Msg;
use super::state::FileConverter;

pub fn view(component: &FileConverter, ctx: &Context<FileConverter>) -> Html {
    let link = ctx.link();
    let busy = component.lifecycle.in_flight();

    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(input.files().and_then(|list| list.get(0)))
    });
    let ondrop = link.callback(Msg::Dropped);
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

    let selection = match (&component.file, &component.source_ext) {
        (Some(file), Some(ext)) => html! {
            <p class="selected-file">
                { format!("{} ({})", file.name(), files::format_label(ext)) }
            </p>
        },
        _ => Html::default(),
    };

    let target_picker = component
        .source_ext
        .as_deref()
        .and_then(files::conversions_for)
        .map(|targets| {
            let current = component.target.as_deref().unwrap_or_default().to_string();
            html! {
                <>
                    <label>{ "Convert to" }</label>
                    { ui::select(&current, targets, link.callback(Msg::SelectTarget)) }
                </>
            }
        })
        .unwrap_or_default();

    let done_note = if component.lifecycle.result().is_some() {
        html! { <p class="download-note">{ "Your converted file download has started." }</p> }
    } else {
        Html::default()
    };

    html! {
        <div class="tool-page">
            {
                ui::page_header(
                    "description",
                    "Universal Converter",
                    "Convert documents between PDF, Word, text, markdown, HTML, CSV, and JSON",
                )
            }
            {
                ui::card(html! {
                    <>
                        <div class="drop-zone" ondrop={ondrop} ondragover={ondragover}>
                            <input type="file" onchange={onchange} />
                            <p>{ "Drop a file here or click to browse" }</p>
                        </div>
                        { selection }
                        { target_picker }
                        { ui::inline_error(component.lifecycle.error()) }
                        {
                            ui::submit_button(
                                "Convert File",
                                "Converting...",
                                busy,
                                component.file.is_none() || component.target.is_none(),
                                link.callback(|_| Msg::Submit),
                            )
                        }
                        { done_note }
                    </>
                })
            }
            {
                ui::tips(&[
                    ("Seven Formats", "PDF, Word, text, markdown, HTML, CSV, JSON"),
                    ("Cost: 1 Credit", "Each conversion uses one credit"),
                    ("Keeps Structure", "Headings, tables, and lists survive"),
                ])
            }
        </div>
    }
}
