//! Generic screen for the single-text tools (humanizer, grammar checker,
//! paraphraser): one textarea in, one plain-text result out. Each tool is
//! a static `SimpleTextToolConfig` (endpoint call, labels, tips)
//! instantiated through the shared lifecycle.

use std::future::Future;
use std::pin::Pin;

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;
use common::requests::TextToolRequest;
use common::responses::{GrammarResponse, HumanizeResponse, ParaphraseResponse};

use crate::api;
use crate::components::ui;
use crate::credit_bus;
use crate::downloads;
use crate::lifecycle::{require_text, Lifecycle};
use crate::session;

type FetchFuture = Pin<Box<dyn Future<Output = Result<String, ToolError>>>>;

/// Everything that distinguishes one single-text tool from another.
#[derive(PartialEq)]
pub struct SimpleTextToolConfig {
    pub icon: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub sign_in_prompt: &'static str,
    pub empty_prompt: &'static str,
    pub placeholder: &'static str,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    pub result_heading: &'static str,
    pub empty_hint: &'static str,
    pub tips: &'static [(&'static str, &'static str)],
    /// Issues the tool's single request; `clerk_id` + trimmed text in,
    /// result text out.
    pub fetch: fn(String, String) -> FetchFuture,
}

pub static HUMANIZER: SimpleTextToolConfig = SimpleTextToolConfig {
    icon: "auto_fix_high",
    title: "AI Humanizer",
    tagline: "Make AI-generated text sound natural and human-written",
    sign_in_prompt: "Please sign in to humanize text",
    empty_prompt: "Please enter text to humanize",
    placeholder: "Paste your AI-generated text here...",
    submit_label: "Humanize Text",
    busy_label: "Humanizing...",
    result_heading: "Humanized Text",
    empty_hint: "Paste text above and click humanize to get started",
    tips: &[
        ("Natural Tone", "Rewrites stiff phrasing into conversational prose"),
        ("Cost: 1 Credit", "Each humanization uses one credit"),
        ("Keeps Meaning", "Content stays intact, only the voice changes"),
    ],
    fetch: |clerk_id, text| {
        Box::pin(async move {
            let body = TextToolRequest { clerk_id, text };
            api::post_json::<_, HumanizeResponse>(
                "/api/humanize",
                &body,
                "Failed to humanize text. Please try again.",
            )
            .await
            .map(|r| r.humanized_text)
        })
    },
};

pub static GRAMMAR: SimpleTextToolConfig = SimpleTextToolConfig {
    icon: "spellcheck",
    title: "Grammar Checker",
    tagline: "Fix grammar, spelling, and punctuation in one pass",
    sign_in_prompt: "Please sign in to check grammar",
    empty_prompt: "Please enter text to check",
    placeholder: "Paste the text you want checked...",
    submit_label: "Check Grammar",
    busy_label: "Checking...",
    result_heading: "Corrected Text",
    empty_hint: "Paste text above and click check to get started",
    tips: &[
        ("Deep Check", "Grammar, spelling, and punctuation together"),
        ("Cost: 1 Credit", "Each check uses one credit"),
        ("Clean Output", "Returns the corrected text ready to paste"),
    ],
    fetch: |clerk_id, text| {
        Box::pin(async move {
            let body = TextToolRequest { clerk_id, text };
            api::post_json::<_, GrammarResponse>(
                "/api/check-grammar",
                &body,
                "Failed to check grammar. Please try again.",
            )
            .await
            .map(|r| r.corrected_text)
        })
    },
};

pub static PARAPHRASER: SimpleTextToolConfig = SimpleTextToolConfig {
    icon: "sync_alt",
    title: "Paraphraser",
    tagline: "Rewrite any passage with fresh wording",
    sign_in_prompt: "Please sign in to paraphrase text",
    empty_prompt: "Please enter text to paraphrase",
    placeholder: "Paste the text you want rephrased...",
    submit_label: "Paraphrase",
    busy_label: "Paraphrasing...",
    result_heading: "Paraphrased Text",
    empty_hint: "Paste text above and click paraphrase to get started",
    tips: &[
        ("Fresh Wording", "New phrasing without losing the point"),
        ("Cost: 1 Credit", "Each paraphrase uses one credit"),
        ("Any Length", "Works on sentences or whole passages"),
    ],
    fetch: |clerk_id, text| {
        Box::pin(async move {
            let body = TextToolRequest { clerk_id, text };
            api::post_json::<_, ParaphraseResponse>(
                "/api/paraphrase",
                &body,
                "Failed to paraphrase text. Please try again.",
            )
            .await
            .map(|r| r.paraphrased_text)
        })
    },
};

pub enum Msg {
    UpdateInput(String),
    Submit,
    Finished(Result<String, ToolError>),
    Copy,
    CopyReset,
}

#[derive(Properties, PartialEq)]
pub struct SimpleTextProps {
    pub config: &'static SimpleTextToolConfig,
}

pub struct SimpleTextTool {
    input: String,
    lifecycle: Lifecycle<String>,
    copied: bool,
}

impl Component for SimpleTextTool {
    type Message = Msg;
    type Properties = SimpleTextProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SimpleTextTool {
            input: String::new(),
            lifecycle: Lifecycle::idle(),
            copied: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let config = ctx.props().config;
        match msg {
            Msg::UpdateInput(text) => {
                self.input = text;
                self.lifecycle.clear_error();
                true
            }
            Msg::Submit => {
                let user = match session::require_user(config.sign_in_prompt) {
                    Ok(user) => user,
                    Err(err) => {
                        self.lifecycle.fail(err);
                        return true;
                    }
                };
                let text = match require_text(&self.input, config.empty_prompt) {
                    Ok(text) => text,
                    Err(err) => {
                        self.lifecycle.fail(err);
                        return true;
                    }
                };
                if !self.lifecycle.begin() {
                    return false;
                }
                let link = ctx.link().clone();
                let fetch = config.fetch;
                spawn_local(async move {
                    link.send_message(Msg::Finished(fetch(user.id, text).await));
                });
                true
            }
            Msg::Finished(outcome) => {
                let succeeded = outcome.is_ok();
                self.lifecycle.finish(outcome);
                if succeeded {
                    // Consume-and-replace: the input was spent on this result.
                    self.input.clear();
                    credit_bus::publish();
                }
                true
            }
            Msg::Copy => {
                if let Some(result) = self.lifecycle.result() {
                    downloads::copy_to_clipboard(result);
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
        let config = ctx.props().config;
        let link = ctx.link();
        let busy = self.lifecycle.in_flight();

        let result_pane = match self.lifecycle.result() {
            Some(result) => html! {
                <div class="result-pane">
                    <div class="result-header">
                        <h2>{ config.result_heading }</h2>
                        { ui::copy_button(self.copied, link.callback(|_| Msg::Copy)) }
                    </div>
                    <p class="result-text">{ result.clone() }</p>
                </div>
            },
            None if busy => ui::skeleton_text(8),
            None => ui::empty_state(config.icon, config.empty_hint),
        };

        html! {
            <div class="tool-page">
                { ui::page_header(config.icon, config.title, config.tagline) }
                {
                    ui::card(html! {
                        <>
                            {
                                ui::text_area(
                                    "simple-text-input",
                                    &self.input,
                                    config.placeholder,
                                    8,
                                    link.callback(Msg::UpdateInput),
                                    None,
                                )
                            }
                            { ui::inline_error(self.lifecycle.error()) }
                            {
                                ui::submit_button(
                                    config.submit_label,
                                    config.busy_label,
                                    busy,
                                    self.input.trim().is_empty(),
                                    link.callback(|_| Msg::Submit),
                                )
                            }
                            { result_pane }
                        </>
                    })
                }
                { ui::tips(config.tips) }
            </div>
        }
    }
}
