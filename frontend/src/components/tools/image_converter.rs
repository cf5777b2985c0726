//! Image converter: upload an image, choose a target format, download the
//! converted file.

use gloo_console::error;
use gloo_file::ObjectUrl;
use web_sys::{FormData, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;

use crate::api;
use crate::components::ui;
use crate::credit_bus;
use crate::downloads;
use crate::files;
use crate::lifecycle::Lifecycle;
use crate::session;

const FALLBACK: &str = "Failed to convert image. Please try again.";
const BAD_FILE: &str = "Please upload a valid image file";

const FORMATS: &[&str] = &["png", "jpg", "webp", "avif"];

pub enum Msg {
    FileSelected(Option<web_sys::File>),
    SelectFormat(String),
    Submit,
    Finished(Result<Vec<u8>, ToolError>),
}

pub struct ImageConverter {
    file: Option<web_sys::File>,
    preview: Option<ObjectUrl>,
    format: String,
    lifecycle: Lifecycle<()>,
    last_download: Option<ObjectUrl>,
}

impl Component for ImageConverter {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ImageConverter {
            file: None,
            preview: None,
            format: "png".to_string(),
            lifecycle: Lifecycle::idle(),
            last_download: None,
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
            Msg::SelectFormat(format) => {
                self.format = format;
                true
            }
            Msg::Submit => {
                if let Err(err) = session::require_user("Please sign in to convert images") {
                    self.lifecycle.fail(err);
                    return true;
                }
                let Some(file) = self.file.clone() else {
                    return false;
                };
                if !self.lifecycle.begin() {
                    return false;
                }
                let format = self.format.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = match build_form(&file, &format) {
                        Some(form) => api::post_form_blob("/api/image/convert", form, FALLBACK).await,
                        None => Err(ToolError::RequestFailed(FALLBACK.to_string())),
                    };
                    link.send_message(Msg::Finished(outcome));
                });
                true
            }
            Msg::Finished(outcome) => match outcome {
                Ok(bytes) => {
                    let filename = format!("converted-image.{}", self.format);
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

        let onchange = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FileSelected(input.files().and_then(|list| list.get(0)))
        });

        let preview = self
            .preview
            .as_ref()
            .map(|url| html! { <img class="preview" src={url.to_string()} alt="Selected image" /> })
            .unwrap_or_default();

        let done_note = if self.lifecycle.result().is_some() {
            html! { <p class="download-note">{ "Your converted image download has started." }</p> }
        } else {
            Html::default()
        };

        html! {
            <div class="tool-page">
                {
                    ui::page_header(
                        "swap_horiz",
                        "Image Converter",
                        "Convert images between PNG, JPG, WebP, and AVIF",
                    )
                }
                {
                    ui::card(html! {
                        <>
                            <input type="file" accept="image/*" onchange={onchange} />
                            { preview }
                            <label>{ "Convert to" }</label>
                            { ui::select(&self.format, FORMATS, link.callback(Msg::SelectFormat)) }
                            { ui::inline_error(self.lifecycle.error()) }
                            {
                                ui::submit_button(
                                    "Convert Image",
                                    "Converting...",
                                    busy,
                                    self.file.is_none(),
                                    link.callback(|_| Msg::Submit),
                                )
                            }
                            { done_note }
                        </>
                    })
                }
                {
                    ui::tips(&[
                        ("Multiple Formats", "Support for PNG, JPG, WebP, and AVIF"),
                        ("Fast Conversion", "Lightning fast image processing"),
                        ("High Quality", "Maintains original image quality"),
                    ])
                }
            </div>
        }
    }
}

fn build_form(file: &web_sys::File, format: &str) -> Option<FormData> {
    let form = FormData::new()
        .map_err(|err| error!("form construction failed", err))
        .ok()?;
    form.append_with_blob("image", file).ok()?;
    form.append_with_str("format", format).ok()?;
    Some(form)
}
