//! Plagiarism checker: the one text tool with a structured result, a
//! similarity score bucketed into three color bands plus the matched
//! sources with per-source percentages.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;
use common::model::plagiarism::PlagiarismReport;
use common::requests::TextToolRequest;
use common::responses::PlagiarismResponse;

use crate::api;
use crate::components::ui;
use crate::credit_bus;
use crate::lifecycle::{require_text, Lifecycle};
use crate::session;

const FALLBACK: &str = "Failed to check plagiarism. Please try again.";

pub enum Msg {
    UpdateInput(String),
    Submit,
    Finished(Result<PlagiarismReport, ToolError>),
}

pub struct PlagiarismChecker {
    input: String,
    lifecycle: Lifecycle<PlagiarismReport>,
}

impl Component for PlagiarismChecker {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        PlagiarismChecker {
            input: String::new(),
            lifecycle: Lifecycle::idle(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateInput(text) => {
                self.input = text;
                self.lifecycle.clear_error();
                true
            }
            Msg::Submit => {
                let user = match session::require_user("Please sign in to check plagiarism") {
                    Ok(user) => user,
                    Err(err) => {
                        self.lifecycle.fail(err);
                        return true;
                    }
                };
                let text = match require_text(&self.input, "Please enter text to check") {
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
                spawn_local(async move {
                    let body = TextToolRequest {
                        clerk_id: user.id,
                        text,
                    };
                    let outcome = api::post_json::<_, PlagiarismResponse>(
                        "/api/check-plagiarism",
                        &body,
                        FALLBACK,
                    )
                    .await
                    .and_then(|r| {
                        r.report
                            .ok_or_else(|| ToolError::RequestFailed(FALLBACK.to_string()))
                    });
                    link.send_message(Msg::Finished(outcome));
                });
                true
            }
            Msg::Finished(outcome) => {
                let succeeded = outcome.is_ok();
                self.lifecycle.finish(outcome);
                if succeeded {
                    self.input.clear();
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
            Some(report) => render_report(report),
            None if busy => ui::skeleton_text(6),
            None => ui::empty_state("shield", "Paste text above to scan it for matches"),
        };

        html! {
            <div class="tool-page">
                {
                    ui::page_header(
                        "shield",
                        "Plagiarism Checker",
                        "Scan your text against billions of web pages",
                    )
                }
                {
                    ui::card(html! {
                        <>
                            {
                                ui::text_area(
                                    "plagiarism-input",
                                    &self.input,
                                    "Paste the text you want to check...",
                                    8,
                                    link.callback(Msg::UpdateInput),
                                    None,
                                )
                            }
                            { ui::inline_error(self.lifecycle.error()) }
                            {
                                ui::submit_button(
                                    "Check Plagiarism",
                                    "Scanning...",
                                    busy,
                                    self.input.trim().is_empty(),
                                    link.callback(|_| Msg::Submit),
                                )
                            }
                            { result_pane }
                        </>
                    })
                }
                {
                    ui::tips(&[
                        ("Comprehensive Scan", "Scans billions of web pages"),
                        ("Cost: 2 Credits", "Each check uses 2 credits"),
                        ("Detailed Report", "Get similarity percentage and sources"),
                    ])
                }
            </div>
        }
    }
}

fn render_report(report: &PlagiarismReport) -> Html {
    let band = report.band();
    let sources = if report.sources.is_empty() {
        html! { <p class="no-sources">{ "No matching sources found." }</p> }
    } else {
        html! {
            <ul class="source-list">
                {
                    for report.sources.iter().map(|source| html! {
                        <li class="source-item">
                            <a href={source.url.clone()} target="_blank" rel="noopener noreferrer">
                                { source.title.clone() }
                            </a>
                            <span class="source-match">{ format!("{:.1}% match", source.percentage) }</span>
                        </li>
                    })
                }
            </ul>
        }
    };

    html! {
        <div class="result-pane report">
            <div class="score-dial" style={format!("color: {};", band.color())}>
                <span class="score">{ format!("{:.1}%", report.similarity_percentage) }</span>
                <span class="band">{ band.label() }</span>
            </div>
            <h3>{ "Matched Sources" }</h3>
            { sources }
        </div>
    }
}
