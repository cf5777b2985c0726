//! Text to PDF: optional title plus body text in, a generated PDF blob
//! out, downloaded as `<title>.pdf`.

use gloo_file::ObjectUrl;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;
use common::requests::TextToPdfRequest;

use crate::api;
use crate::components::ui;
use crate::credit_bus;
use crate::downloads;
use crate::lifecycle::{require_text, Lifecycle};
use crate::session;

const FALLBACK: &str = "Failed to generate PDF. Please try again.";

pub enum Msg {
    UpdateTitle(String),
    UpdateText(String),
    Submit,
    Finished(Result<Vec<u8>, ToolError>),
}

pub struct TextToPdf {
    title: String,
    text: String,
    lifecycle: Lifecycle<()>,
    // Keeps the blob URL alive until the browser finishes the download.
    last_download: Option<ObjectUrl>,
}

impl Component for TextToPdf {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TextToPdf {
            title: String::new(),
            text: String::new(),
            lifecycle: Lifecycle::idle(),
            last_download: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateTitle(title) => {
                self.title = title;
                true
            }
            Msg::UpdateText(text) => {
                self.text = text;
                self.lifecycle.clear_error();
                true
            }
            Msg::Submit => {
                if let Err(err) = session::require_user("Please sign in to generate PDFs") {
                    self.lifecycle.fail(err);
                    return true;
                }
                let text = match require_text(&self.text, "Please enter some text to convert") {
                    Ok(text) => text,
                    Err(err) => {
                        self.lifecycle.fail(err);
                        return true;
                    }
                };
                if !self.lifecycle.begin() {
                    return false;
                }
                let title = self.title.trim().to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let body = TextToPdfRequest { title, text };
                    let outcome = api::post_json_blob("/api/pdf/from-text", &body, FALLBACK).await;
                    link.send_message(Msg::Finished(outcome));
                });
                true
            }
            Msg::Finished(outcome) => match outcome {
                Ok(bytes) => {
                    let stem = if self.title.trim().is_empty() {
                        "document"
                    } else {
                        self.title.trim()
                    };
                    let filename = format!("{}.pdf", stem);
                    self.last_download = Some(downloads::save_bytes(&bytes, &filename));
                    self.lifecycle.finish(Ok(()));
                    credit_bus::publish();
                    true
                }
                Err(err) => {
                    self.lifecycle.finish(Err(err));
                    true
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.lifecycle.in_flight();

        let done_note = if self.lifecycle.result().is_some() {
            html! { <p class="download-note">{ "Your PDF download has started." }</p> }
        } else {
            Html::default()
        };

        html! {
            <div class="tool-page">
                {
                    ui::page_header(
                        "file_download",
                        "Text to PDF",
                        "Turn plain text into a cleanly formatted PDF document",
                    )
                }
                {
                    ui::card(html! {
                        <>
                            <label for="pdf-title">{ "Document title (optional)" }</label>
                            {
                                ui::text_input(
                                    &self.title,
                                    "My document",
                                    link.callback(Msg::UpdateTitle),
                                )
                            }
                            <label for="pdf-text">{ "Text" }</label>
                            {
                                ui::text_area(
                                    "pdf-text",
                                    &self.text,
                                    "Type or paste the text for your PDF...",
                                    10,
                                    link.callback(Msg::UpdateText),
                                    None,
                                )
                            }
                            { ui::inline_error(self.lifecycle.error()) }
                            {
                                ui::submit_button(
                                    "Generate PDF",
                                    "Generating...",
                                    busy,
                                    self.text.trim().is_empty(),
                                    link.callback(|_| Msg::Submit),
                                )
                            }
                            { done_note }
                        </>
                    })
                }
                {
                    ui::tips(&[
                        ("Professional Formatting", "Clean PDF layout generation"),
                        ("Cost: 1 Credit", "Each generation uses 1 credit"),
                        ("Instant Download", "The file downloads as soon as it is ready"),
                    ])
                }
            </div>
        }
    }
}
