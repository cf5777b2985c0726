//! Application shell. Signed-out visitors get a landing page with the
//! provider's sign-in and sign-up modals; signed-in users get the sidebar
//! plus whichever tool tab is active. Exactly one tool is mounted at a
//! time, so switching tabs resets the previous tool's state.

use yew::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::pricing::Pricing;
use crate::components::sidebar::Sidebar;
use crate::components::tools::article::ArticleGenerator;
use crate::components::tools::background_remover::BackgroundRemover;
use crate::components::tools::caption_generator::CaptionGenerator;
use crate::components::tools::file_converter::FileConverter;
use crate::components::tools::image_converter::ImageConverter;
use crate::components::tools::image_generator::ImageGenerator;
use crate::components::tools::pdf_to_text::PdfToText;
use crate::components::tools::plagiarism::PlagiarismChecker;
use crate::components::tools::seo::SeoOptimizer;
use crate::components::tools::simple_text::{self, SimpleTextTool};
use crate::components::tools::text_to_pdf::TextToPdf;
use crate::session;
use crate::tabs::Tab;

pub enum Msg {
    SwitchTab(Tab),
}

pub struct App {
    active_tab: Tab,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            active_tab: Tab::Dashboard,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SwitchTab(tab) => {
                if self.active_tab == tab {
                    false
                } else {
                    self.active_tab = tab;
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if session::current_user().is_none() {
            return build_landing();
        }
        let on_tab_change = ctx.link().callback(Msg::SwitchTab);
        html! {
            <div class="app-shell">
                <Sidebar active_tab={self.active_tab} on_tab_change={on_tab_change.clone()} />
                <main class="app-content">
                    { self.build_active_tab(on_tab_change) }
                </main>
            </div>
        }
    }
}

impl App {
    fn build_active_tab(&self, on_navigate: Callback<Tab>) -> Html {
        match self.active_tab {
            Tab::Dashboard => html! { <Dashboard on_navigate={on_navigate} /> },
            Tab::ArticleGenerator => html! { <ArticleGenerator /> },
            Tab::Humanizer => html! { <SimpleTextTool config={&simple_text::HUMANIZER} /> },
            Tab::Grammar => html! { <SimpleTextTool config={&simple_text::GRAMMAR} /> },
            Tab::Paraphrase => html! { <SimpleTextTool config={&simple_text::PARAPHRASER} /> },
            Tab::Plagiarism => html! { <PlagiarismChecker /> },
            Tab::Seo => html! { <SeoOptimizer /> },
            Tab::FileConverter => html! { <FileConverter /> },
            Tab::PdfToText => html! { <PdfToText /> },
            Tab::TextToPdf => html! { <TextToPdf /> },
            Tab::ImageGenerator => html! { <ImageGenerator /> },
            Tab::BackgroundRemover => html! { <BackgroundRemover /> },
            Tab::ImageConverter => html! { <ImageConverter /> },
            Tab::CaptionGenerator => html! { <CaptionGenerator /> },
            Tab::Pricing => html! { <Pricing /> },
        }
    }
}

fn build_landing() -> Html {
    let sign_in = Callback::from(|_| session::open_sign_in());
    let sign_up = Callback::from(|_| session::open_sign_up());
    html! {
        <div class="landing">
            <div class="landing-hero">
                <i class="material-icons">{ "auto_awesome" }</i>
                <h1>{ "ExtraHands" }</h1>
                <p>
                    { "Write articles, polish text, generate images, and convert \
                       files. One credit balance across every tool." }
                </p>
                <div class="landing-actions">
                    <button class="btn btn-primary" onclick={sign_up}>{ "Get Started" }</button>
                    <button class="btn btn-outline" onclick={sign_in}>{ "Sign In" }</button>
                </div>
            </div>
        </div>
    }
}
