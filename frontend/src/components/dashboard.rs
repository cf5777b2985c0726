//! Landing grid of tool cards, grouped by audience section. Clicking a
//! card activates the matching tab in the shell.

use yew::prelude::*;

use crate::tabs::{Section, Tab};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_navigate: Callback<Tab>,
}

pub struct Dashboard;

impl Component for Dashboard {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Dashboard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = &ctx.props().on_navigate;
        html! {
            <div class="dashboard">
                <div class="dashboard-hero">
                    <h1>{ "What do you want to make today?" }</h1>
                    <p>{ "Every tool below runs on your credit balance. One click to start." }</p>
                </div>
                { for Section::ALL.iter().map(|section| build_section(*section, on_navigate)) }
            </div>
        }
    }
}

fn build_section(section: Section, on_navigate: &Callback<Tab>) -> Html {
    html! {
        <section class="dashboard-section">
            <h2>{ section.label() }</h2>
            <div class="tool-grid">
                { for section.tabs().iter().map(|tab| build_tool_card(*tab, on_navigate)) }
            </div>
        </section>
    }
}

fn build_tool_card(tab: Tab, on_navigate: &Callback<Tab>) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(tab))
    };
    let badge = match tab.badge() {
        Some(text) => html! { <span class="badge">{ text }</span> },
        None => Html::default(),
    };
    html! {
        <button class="tool-card" onclick={onclick}>
            <i class="material-icons">{ icon(tab) }</i>
            <h3>{ tab.label() }{ badge }</h3>
            <p>{ blurb(tab) }</p>
        </button>
    }
}

fn icon(tab: Tab) -> &'static str {
    match tab {
        Tab::ArticleGenerator => "article",
        Tab::Humanizer => "psychology",
        Tab::Plagiarism => "plagiarism",
        Tab::Seo => "trending_up",
        Tab::Grammar => "spellcheck",
        Tab::Paraphrase => "loop",
        Tab::FileConverter => "description",
        Tab::PdfToText => "picture_as_pdf",
        Tab::TextToPdf => "post_add",
        Tab::ImageGenerator => "palette",
        Tab::BackgroundRemover => "auto_fix_high",
        Tab::ImageConverter => "photo_size_select_large",
        Tab::CaptionGenerator => "subtitles",
        Tab::Dashboard | Tab::Pricing => "apps",
    }
}

fn blurb(tab: Tab) -> &'static str {
    match tab {
        Tab::ArticleGenerator => "Long-form articles from a one-line topic",
        Tab::Humanizer => "Rewrite AI output so it reads naturally",
        Tab::Plagiarism => "Similarity score with matched sources",
        Tab::Seo => "Rework content around your keywords",
        Tab::Grammar => "Fix grammar, spelling, and punctuation",
        Tab::Paraphrase => "Say the same thing a different way",
        Tab::FileConverter => "PDF, Word, markdown, CSV, and more",
        Tab::PdfToText => "Pull clean text out of any PDF",
        Tab::TextToPdf => "Turn plain text into a titled PDF",
        Tab::ImageGenerator => "Images from a prompt in five styles",
        Tab::BackgroundRemover => "Cut the background out of a photo",
        Tab::ImageConverter => "Switch between PNG, JPG, WebP, AVIF",
        Tab::CaptionGenerator => "Social captions matched to a mood",
        Tab::Dashboard | Tab::Pricing => "",
    }
}
