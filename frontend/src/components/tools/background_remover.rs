//! Background remover: upload an image, get it back with a transparent
//! background. Non-image files are rejected before any upload; drops are
//! accepted as well as the file picker.

use gloo_console::error;
use gloo_file::ObjectUrl;
use web_sys::{DragEvent, FormData, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;
use common::responses::ImageResponse;

use crate::api;
use crate::components::ui;
use crate::credit_bus;
use crate::downloads;
use crate::files;
use crate::lifecycle::Lifecycle;
use crate::session;

const FALLBACK: &str = "Failed to remove background";
const BAD_FILE: &str = "Please upload an image file (PNG, JPG, WebP)";

pub enum Msg {
    FileSelected(Option<web_sys::File>),
    Dropped(DragEvent),
    Submit,
    Finished(Result<String, ToolError>),
    Download,
}

pub struct BackgroundRemover {
    file: Option<web_sys::File>,
    preview: Option<ObjectUrl>,
    lifecycle: Lifecycle<String>,
}

impl Component for BackgroundRemover {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        BackgroundRemover {
            file: None,
            preview: None,
            lifecycle: Lifecycle::idle(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(selected) => {
                self.accept(selected);
                true
            }
            Msg::Dropped(event) => {
                event.prevent_default();
                let dropped = event
                    .data_transfer()
                    .and_then(|dt| dt.files())
                    .and_then(|list| list.get(0));
                self.accept(dropped);
                true
            }
            Msg::Submit => {
                let user = match session::require_user("Please sign in to remove backgrounds") {
                    Ok(user) => user,
                    Err(err) => {
                        self.lifecycle.fail(err);
                        return true;
                    }
                };
                let Some(file) = self.file.clone() else {
                    return false;
                };
                if !self.lifecycle.begin() {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = match build_form(&file, &user.id) {
                        Some(form) => {
                            api::post_form::<ImageResponse>("/api/image/remove-bg", form, FALLBACK)
                                .await
                                .map(|r| r.image)
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
            Msg::Download => {
                if let (Some(image), Some(file)) = (self.lifecycle.result(), &self.file) {
                    downloads::save_href(image, &format!("nobg-{}", file.name()));
                }
                false
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
        let ondrop = link.callback(Msg::Dropped);
        let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

        let preview = self
            .preview
            .as_ref()
            .map(|url| html! { <img class="preview" src={url.to_string()} alt="Selected image" /> })
            .unwrap_or_default();

        let result_pane = match self.lifecycle.result() {
            Some(image) => html! {
                <div class="result-pane image">
                    <img src={image.clone()} alt="Image with background removed" />
                    { ui::outline_button("Download", link.callback(|_| Msg::Download)) }
                </div>
            },
            None if busy => ui::skeleton_text(6),
            None => ui::empty_state("auto_fix_normal", "Upload an image to strip its background"),
        };

        html! {
            <div class="tool-page">
                {
                    ui::page_header(
                        "auto_fix_normal",
                        "Background Remover",
                        "Cut the background out of any image in one click",
                    )
                }
                {
                    ui::card(html! {
                        <>
                            <div class="drop-zone" ondrop={ondrop} ondragover={ondragover}>
                                <input type="file" accept="image/*" onchange={onchange} />
                                <p>{ "Drop an image here or click to browse" }</p>
                            </div>
                            { preview }
                            { ui::inline_error(self.lifecycle.error()) }
                            {
                                ui::submit_button(
                                    "Remove Background",
                                    "Removing...",
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
                        ("Crisp Edges", "Keeps fine detail like hair and fur"),
                        ("Cost: 2 Credits", "Each removal uses two credits"),
                        ("Transparent PNG", "Result downloads with a clear background"),
                    ])
                }
            </div>
        }
    }
}

impl BackgroundRemover {
    fn accept(&mut self, selected: Option<web_sys::File>) {
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
    }
}

fn build_form(file: &web_sys::File, clerk_id: &str) -> Option<FormData> {
    let form = FormData::new()
        .map_err(|err| error!("form construction failed", err))
        .ok()?;
    form.append_with_blob("image", file).ok()?;
    form.append_with_str("clerkId", clerk_id).ok()?;
    Some(form)
}
