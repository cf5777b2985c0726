//! SEO optimizer: content plus an optional keyword list, markdown result.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;
use common::requests::SeoRequest;
use common::responses::SeoResponse;

use crate::api;
use crate::components::ui;
use crate::credit_bus;
use crate::lifecycle::{require_text, Lifecycle};
use crate::markdown;
use crate::session;

const FALLBACK: &str = "Failed to optimize content. Please try again.";

pub enum Msg {
    UpdateContent(String),
    UpdateKeywords(String),
    Submit,
    Finished(Result<String, ToolError>),
}

pub struct SeoOptimizer {
    content: String,
    keywords: String,
    lifecycle: Lifecycle<String>,
}

impl Component for SeoOptimizer {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        SeoOptimizer {
            content: String::new(),
            keywords: String::new(),
            lifecycle: Lifecycle::idle(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateContent(text) => {
                self.content = text;
                self.lifecycle.clear_error();
                true
            }
            Msg::UpdateKeywords(text) => {
                self.keywords = text;
                true
            }
            Msg::Submit => {
                let user = match session::require_user("Please sign in to optimize content") {
                    Ok(user) => user,
                    Err(err) => {
                        self.lifecycle.fail(err);
                        return true;
                    }
                };
                let content = match require_text(&self.content, "Please enter content to optimize") {
                    Ok(content) => content,
                    Err(err) => {
                        self.lifecycle.fail(err);
                        return true;
                    }
                };
                if !self.lifecycle.begin() {
                    return false;
                }
                let keywords = self.keywords.trim().to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let body = SeoRequest {
                        clerk_id: user.id,
                        content,
                        keywords,
                    };
                    let outcome =
                        api::post_json::<_, SeoResponse>("/api/optimize-seo", &body, FALLBACK)
                            .await
                            .map(|r| r.optimized_content);
                    link.send_message(Msg::Finished(outcome));
                });
                true
            }
            Msg::Finished(outcome) => {
                let succeeded = outcome.is_ok();
                self.lifecycle.finish(outcome);
                if succeeded {
                    self.content.clear();
                    credit_bus::publish();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.lifecycle.in_flight();

        let result_pane = match self.lifecycle.result() {
            Some(optimized) => html! {
                <div class="result-pane">
                    <h2>{ "Optimized Content" }</h2>
                    { markdown::render(optimized) }
                </div>
            },
            None if busy => ui::skeleton_text(10),
            None => ui::empty_state("trending_up", "Paste content above to optimize it for search"),
        };

        html! {
            <div class="tool-page">
                {
                    ui::page_header(
                        "trending_up",
                        "SEO Optimizer",
                        "Rework your content to rank higher for the keywords that matter",
                    )
                }
                {
                    ui::card(html! {
                        <>
                            <label for="seo-content">{ "Content" }</label>
                            {
                                ui::text_area(
                                    "seo-content",
                                    &self.content,
                                    "Paste the content you want optimized...",
                                    8,
                                    link.callback(Msg::UpdateContent),
                                    None,
                                )
                            }
                            <label for="seo-keywords">{ "Target keywords (comma separated)" }</label>
                            {
                                ui::text_input(
                                    &self.keywords,
                                    "e.g. rust wasm, yew tutorial",
                                    link.callback(Msg::UpdateKeywords),
                                )
                            }
                            { ui::inline_error(self.lifecycle.error()) }
                            {
                                ui::submit_button(
                                    "Optimize Content",
                                    "Optimizing...",
                                    busy,
                                    self.content.trim().is_empty(),
                                    link.callback(|_| Msg::Submit),
                                )
                            }
                            { result_pane }
                        </>
                    })
                }
                {
                    ui::tips(&[
                        ("Keyword Aware", "Weaves your target keywords in naturally"),
                        ("Cost: 1 Credit", "Each optimization uses one credit"),
                        ("Structure Kept", "Headings and lists survive the rewrite"),
                    ])
                }
            </div>
        }
    }
}
