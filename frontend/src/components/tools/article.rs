//! Article generator: topic prompt in, markdown article out. The one text
//! tool with a credits-remaining chip and a Ctrl+Enter shortcut.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;
use common::requests::ArticleRequest;
use common::responses::ArticleResponse;

use crate::api;
use crate::components::ui;
use crate::credit_bus;
use crate::downloads;
use crate::lifecycle::{require_text, Lifecycle};
use crate::markdown;
use crate::session;

const FALLBACK: &str = "Failed to generate article. Please try again.";

pub struct GeneratedArticle {
    pub content: String,
    pub credits_remaining: Option<u64>,
}

pub enum Msg {
    UpdatePrompt(String),
    KeyDown(KeyboardEvent),
    Submit,
    Finished(Result<GeneratedArticle, ToolError>),
    Copy,
    CopyReset,
}

pub struct ArticleGenerator {
    prompt: String,
    lifecycle: Lifecycle<GeneratedArticle>,
    copied: bool,
}

impl Component for ArticleGenerator {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ArticleGenerator {
            prompt: String::new(),
            lifecycle: Lifecycle::idle(),
            copied: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdatePrompt(text) => {
                self.prompt = text;
                self.lifecycle.clear_error();
                true
            }
            Msg::KeyDown(event) => {
                if event.key() == "Enter" && event.ctrl_key() {
                    ctx.link().send_message(Msg::Submit);
                }
                false
            }
            Msg::Submit => {
                let user = match session::require_user("Please sign in to generate articles") {
                    Ok(user) => user,
                    Err(err) => {
                        self.lifecycle.fail(err);
                        return true;
                    }
                };
                let prompt = match require_text(&self.prompt, "Please enter a topic for your article")
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
                let link = ctx.link().clone();
                spawn_local(async move {
                    let body = ArticleRequest {
                        clerk_id: user.id,
                        prompt,
                    };
                    let outcome =
                        api::post_json::<_, ArticleResponse>("/api/generate-article", &body, FALLBACK)
                            .await
                            .map(|r| GeneratedArticle {
                                content: r.content,
                                credits_remaining: r.credits_remaining,
                            });
                    link.send_message(Msg::Finished(outcome));
                });
                true
            }
            Msg::Finished(outcome) => {
                let succeeded = outcome.is_ok();
                self.lifecycle.finish(outcome);
                if succeeded {
                    // Consume-and-replace: the topic was spent on this article.
                    self.prompt.clear();
                    credit_bus::publish();
                }
                true
            }
            Msg::Copy => {
                if let Some(article) = self.lifecycle.result() {
                    downloads::copy_to_clipboard(&article.content);
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

        let credits_chip = self
            .lifecycle
            .result()
            .and_then(|a| a.credits_remaining)
            .map(|remaining| {
                html! {
                    <div class="credits-chip">
                        { format!("Credits Remaining: {}", remaining) }
                    </div>
                }
            })
            .unwrap_or_default();

        let result_pane = match self.lifecycle.result() {
            Some(article) => html! {
                <div class="result-pane">
                    <div class="result-header">
                        <h2>{ "Your Article" }</h2>
                        { ui::copy_button(self.copied, link.callback(|_| Msg::Copy)) }
                    </div>
                    { markdown::render(&article.content) }
                </div>
            },
            None if busy => ui::skeleton_text(12),
            None => ui::empty_state(
                "auto_awesome",
                "Enter a topic above and click generate to create your article",
            ),
        };

        html! {
            <div class="tool-page">
                {
                    ui::page_header(
                        "auto_awesome",
                        "AI Article Generator",
                        "Transform your ideas into professional blog articles instantly",
                    )
                }
                { credits_chip }
                {
                    ui::card(html! {
                        <>
                            <label for="article-prompt">{ "What would you like to write about?" }</label>
                            {
                                ui::text_area(
                                    "article-prompt",
                                    &self.prompt,
                                    "E.g., The future of AI in healthcare, Benefits of meditation, How to start a podcast...",
                                    5,
                                    link.callback(Msg::UpdatePrompt),
                                    Some(link.callback(Msg::KeyDown)),
                                )
                            }
                            <p class="helper-text">{ "Press Ctrl+Enter to generate or click the button below" }</p>
                            { ui::inline_error(self.lifecycle.error()) }
                            {
                                ui::submit_button(
                                    "Generate Article",
                                    "Generating Article...",
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
                        ("Be Specific", "Use detailed topics for better results"),
                        ("1 Credit Per Article", "Each generation uses one credit"),
                        ("Quick Generate", "Press Ctrl+Enter for faster workflow"),
                    ])
                }
            </div>
        }
    }
}
