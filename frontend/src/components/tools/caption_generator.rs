//! Caption generator: upload an image, pick a mood, get a social-media
//! caption back.

use gloo_console::error;
use gloo_file::ObjectUrl;
use gloo_timers::future::TimeoutFuture;
use web_sys::{FormData, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;
use common::responses::CaptionResponse;

use crate::api;
use crate::components::ui;
use crate::credit_bus;
use crate::downloads;
use crate::files;
use crate::lifecycle::Lifecycle;
use crate::session;

const FALLBACK: &str = "Failed to generate caption. Please try again.";
const BAD_FILE: &str = "Please upload a valid image file";

const MOODS: &[&str] = &["engaging", "funny", "inspirational", "professional", "casual"];

pub enum Msg {
    FileSelected(Option<web_sys::File>),
    SelectMood(String),
    Submit,
    Finished(Result<String, ToolError>),
    Copy,
    CopyReset,
}

pub struct CaptionGenerator {
    file: Option<web_sys::File>,
    preview: Option<ObjectUrl>,
    mood: String,
    lifecycle: Lifecycle<String>,
    copied: bool,
}

impl Component for CaptionGenerator {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CaptionGenerator {
            file: None,
            preview: None,
            mood: "engaging".to_string(),
            lifecycle: Lifecycle::idle(),
            copied: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(selected) => {
                match selected {
                    Some(file) if files::is_image_mime(&file.type_()) => {
                        self.preview = Some(downloads::preview_url(&file));
                        self.file = Some(file);
                        self.lifecycle.clear_error();
                    }
                    Some(_) => {
                        self.file = None;
                        self.preview = None;
                        self.lifecycle.fail(ToolError::Validation(BAD_FILE.into()));
                    }
                    None => {}
                }
                true
            }
            Msg::SelectMood(mood) => {
                self.mood = mood;
                true
            }
            Msg::Submit => {
                if let Err(err) = session::require_user("Please sign in to generate captions") {
                    self.lifecycle.fail(err);
                    return true;
                }
                let Some(file) = self.file.clone() else {
                    return false;
                };
                if !self.lifecycle.begin() {
                    return false;
                }
                let mood = self.mood.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = match build_form(&file, &mood) {
                        Some(form) => {
                            api::post_form::<CaptionResponse>("/api/image/caption", form, FALLBACK)
                                .await
                                .map(|r| r.caption)
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
                if let Some(caption) = self.lifecycle.result() {
                    downloads::copy_to_clipboard(caption);
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

        let preview = self
            .preview
            .as_ref()
            .map(|url| html! { <img class="preview" src={url.to_string()} alt="Selected image" /> })
            .unwrap_or_default();

        let result_pane = match self.lifecycle.result() {
            Some(caption) => html! {
                <div class="result-pane">
                    <div class="result-header">
                        <h2>{ "Your Caption" }</h2>
                        { ui::copy_button(self.copied, link.callback(|_| Msg::Copy)) }
                    </div>
                    <p class="result-text">{ caption.clone() }</p>
                </div>
            },
            None if busy => ui::skeleton_text(3),
            None => ui::empty_state("chat", "Upload an image to generate a caption"),
        };

        html! {
            <div class="tool-page">
                {
                    ui::page_header(
                        "chat",
                        "Caption Generator",
                        "Viral-ready captions for any image",
                    )
                }
                {
                    ui::card(html! {
                        <>
                            <input type="file" accept="image/*" onchange={onchange} />
                            { preview }
                            <label>{ "Mood" }</label>
                            { ui::select(&self.mood, MOODS, link.callback(Msg::SelectMood)) }
                            { ui::inline_error(self.lifecycle.error()) }
                            {
                                ui::submit_button(
                                    "Generate Caption",
                                    "Generating...",
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
                        ("AI Vision", "Advanced image analysis technology"),
                        ("Cost: 1 Credit", "Each caption uses 1 credit"),
                        ("Viral Captions", "Optimized for social media engagement"),
                    ])
                }
            </div>
        }
    }
}

fn build_form(file: &web_sys::File, mood: &str) -> Option<FormData> {
    let form = FormData::new()
        .map_err(|err| error!("form construction failed", err))
        .ok()?;
    form.append_with_blob("image", file).ok()?;
    form.append_with_str("mood", mood).ok()?;
    Some(form)
}
