//! PDF to text extraction: upload a PDF, get the text plus extraction
//! metadata back as JSON. Non-PDF files are rejected client-side before
//! any upload.

use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use web_sys::{FormData, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;
use common::responses::{PdfInfo, PdfTextResponse};

use crate::api;
use crate::components::ui;
use crate::credit_bus;
use crate::downloads;
use crate::files;
use crate::lifecycle::Lifecycle;
use crate::session;

const FALLBACK: &str = "Failed to convert PDF. Please try again.";

pub struct Extraction {
    pub text: String,
    pub info: Option<PdfInfo>,
}

pub enum Msg {
    FileSelected(Option<web_sys::File>),
    Submit,
    Finished(Result<Extraction, ToolError>),
    Copy,
    CopyReset,
}

pub struct PdfToText {
    file: Option<web_sys::File>,
    lifecycle: Lifecycle<Extraction>,
    copied: bool,
}

impl Component for PdfToText {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        PdfToText {
            file: None,
            lifecycle: Lifecycle::idle(),
            copied: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(selected) => {
                match selected {
                    Some(file) if files::is_pdf_mime(&file.type_()) => {
                        self.file = Some(file);
                        self.lifecycle.clear_error();
                    }
                    Some(_) => {
                        self.file = None;
                        self.lifecycle
                            .fail(ToolError::Validation("Please upload a valid PDF file".into()));
                    }
                    None => {}
                }
                true
            }
            Msg::Submit => {
                if let Err(err) = session::require_user("Please sign in to convert PDFs") {
                    self.lifecycle.fail(err);
                    return true;
                }
                let Some(file) = self.file.clone() else {
                    return false;
                };
                if !self.lifecycle.begin() {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = match build_form(&file) {
                        Some(form) => {
                            api::post_form::<PdfTextResponse>("/api/pdf/to-text", form, FALLBACK)
                                .await
                                .map(|r| Extraction {
                                    text: r.text,
                                    info: r.info,
                                })
                        }
                        None => Err(ToolError::RequestFailed(FALLBACK.to_string())),
                    };
                    link.send_message(Msg::Finished(outcome));
                });
                true
            }
            Msg::Finished(outcome) => {
                let succeeded = outcome.is_ok();
                self.lifecycle.finish(outcome);
                if succeeded {
                    credit_bus::publish();
                }
                true
            }
            Msg::Copy => {
                if let Some(extraction) = self.lifecycle.result() {
                    downloads::copy_to_clipboard(&extraction.text);
                    self.copied = true;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        TimeoutFuture::new(2000).await;
                        link.send_message(Msg::CopyReset);
                    });
                }
                true
            }
            Msg::CopyReset => {
                self.copied = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.lifecycle.in_flight();

        let onchange = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FileSelected(input.files().and_then(|list| list.get(0)))
        });

        let result_pane = match self.lifecycle.result() {
            Some(extraction) => html! {
                <div class="result-pane">
                    <div class="result-header">
                        <h2>{ "Extracted Text" }</h2>
                        { ui::copy_button(self.copied, link.callback(|_| Msg::Copy)) }
                    </div>
                    { render_metadata(extraction.info.as_ref()) }
                    <pre class="extracted-text">{ extraction.text.clone() }</pre>
                </div>
            },
            None if busy => ui::skeleton_text(10),
            None => ui::empty_state("picture_as_pdf", "Choose a PDF above to extract its text"),
        };

        html! {
            <div class="tool-page">
                {
                    ui::page_header(
                        "picture_as_pdf",
                        "PDF to Text",
                        "Extract clean text from any PDF document",
                    )
                }
                {
                    ui::card(html! {
                        <>
                            <input type="file" accept="application/pdf" onchange={onchange} />
                            {
                                self.file.as_ref().map(|f| html! {
                                    <p class="selected-file">{ f.name() }</p>
                                }).unwrap_or_default()
                            }
                            { ui::inline_error(self.lifecycle.error()) }
                            {
                                ui::submit_button(
                                    "Extract Text",
                                    "Extracting...",
                                    busy,
                                    self.file.is_none(),
                                    link.callback(|_| Msg::Submit),
                                )
                            }
                            { result_pane }
                        </>
                    })
                }
                {
                    ui::tips(&[
                        ("Accurate Extraction", "Maintains original text structure"),
                        ("Cost: 1 Credit", "Each page costs 1 credit"),
                        ("Metadata Support", "Extracts page count and version info"),
                    ])
                }
            </div>
        }
    }
}

fn build_form(file: &web_sys::File) -> Option<FormData> {
    let form = FormData::new()
        .map_err(|err| error!("form construction failed", err))
        .ok()?;
    form.append_with_blob("pdf", file).ok()?;
    Some(form)
}

fn render_metadata(info: Option<&PdfInfo>) -> Html {
    let Some(info) = info else {
        return Html::default();
    };
    let mut parts = Vec::new();
    if let Some(pages) = info.pages {
        parts.push(format!("{} pages", pages));
    }
    if let Some(version) = &info.version {
        parts.push(format!("PDF {}", version));
    }
    if parts.is_empty() {
        return Html::default();
    }
    html! { <p class="pdf-metadata">{ parts.join(" · ") }</p> }
}
