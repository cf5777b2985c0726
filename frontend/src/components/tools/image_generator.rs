//! AI image generator: prompt plus style in, a data-URI image out.

use js_sys::Date;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;
use common::requests::ImageGenerateRequest;
use common::responses::ImageResponse;

use crate::api;
use crate::components::ui;
use crate::credit_bus;
use crate::downloads;
use crate::lifecycle::{require_text, Lifecycle};
use crate::session;

const FALLBACK: &str = "Failed to generate image. Try again.";

/// Advisory prompt length shown next to the counter; not enforced
/// client-side.
const PROMPT_ADVISORY_MAX: usize = 500;

const STYLES: &[(&str, &str)] = &[
    ("realistic", "Realistic"),
    ("anime", "Anime"),
    ("digital-art", "Digital Art"),
    ("isometric", "Isometric 3D"),
    ("cinematic", "Cinematic"),
];

pub enum Msg {
    UpdatePrompt(String),
    SelectStyle(&'static str),
    Submit,
    Finished(Result<String, ToolError>),
    Download,
}

pub struct ImageGenerator {
    prompt: String,
    style: &'static str,
    lifecycle: Lifecycle<String>,
}

impl Component for ImageGenerator {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ImageGenerator {
            prompt: String::new(),
            style: STYLES[0].0,
            lifecycle: Lifecycle::idle(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdatePrompt(text) => {
                self.prompt = text;
                self.lifecycle.clear_error();
                true
            }
            Msg::SelectStyle(style) => {
                self.style = style;
                true
            }
            Msg::Submit => {
                let user = match session::require_user("Please sign in to generate images") {
                    Ok(user) => user,
                    Err(err) => {
                        self.lifecycle.fail(err);
                        return true;
                    }
                };
                let prompt = match require_text(&self.prompt, "Please describe the image to create")
                {
                    Ok(prompt) => prompt,
                    Err(err) => {
                        self.lifecycle.fail(err);
                        return true;
                    }
                };
                if !self.lifecycle.begin() {
                    return false;
                }
                let style = self.style.to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let body = ImageGenerateRequest {
                        clerk_id: user.id,
                        prompt,
                        style,
                    };
                    let outcome =
                        api::post_json::<_, ImageResponse>("/api/image/generate", &body, FALLBACK)
                            .await
                            .map(|r| r.image);
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
                if let Some(image) = self.lifecycle.result() {
                    let filename = format!("generated-image-{}.png", Date::now() as u64);
                    downloads::save_href(image, &filename);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.lifecycle.in_flight();

        let style_picker = html! {
            <div class="style-picker">
                {
                    for STYLES.iter().map(|(id, label)| {
                        let id = *id;
                        html! {
                            <button
                                class={classes!("style-chip", (self.style == id).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SelectStyle(id))}
                            >
                                { *label }
                            </button>
                        }
                    })
                }
            </div>
        };

        let result_pane = match self.lifecycle.result() {
            Some(image) => html! {
                <div class="result-pane image">
                    <img src={image.clone()} alt="Generated image" />
                    { ui::outline_button("Download", link.callback(|_| Msg::Download)) }
                </div>
            },
            None if busy => ui::skeleton_text(6),
            None => ui::empty_state("image", "Describe an image and pick a style to generate it"),
        };

        html! {
            <div class="tool-page">
                {
                    ui::page_header(
                        "image",
                        "AI Image Generator",
                        "Turn your text descriptions into stunning images",
                    )
                }
                {
                    ui::card(html! {
                        <>
                            <label for="image-prompt">{ "What would you like to create?" }</label>
                            {
                                ui::text_area(
                                    "image-prompt",
                                    &self.prompt,
                                    "A futuristic city with flying cars at sunset...",
                                    4,
                                    link.callback(Msg::UpdatePrompt),
                                    None,
                                )
                            }
                            { ui::char_counter(self.prompt.len(), PROMPT_ADVISORY_MAX) }
                            { style_picker }
                            { ui::inline_error(self.lifecycle.error()) }
                            {
                                ui::submit_button(
                                    "Generate Image",
                                    "Generating...",
                                    busy,
                                    self.prompt.trim().is_empty(),
                                    link.callback(|_| Msg::Submit),
                                )
                            }
                            { result_pane }
                        </>
                    })
                }
                {
                    ui::tips(&[
                        ("Vivid Detail", "Mention subject, mood, and lighting"),
                        ("Cost: 2 Credits", "Each image uses two credits"),
                        ("Five Styles", "From photorealism to isometric 3D"),
                    ])
                }
            </div>
        }
    }
}
