//! Universal file converter: root module wiring the Yew `Component`
//! implementation to submodules for state, update logic, view rendering,
//! and helpers.
//!
//! Responsibilities
//! - Accept a file by picker or drag and drop, gated by the supported
//!   conversion graph before any upload.
//! - Offer the target formats valid for the source extension.
//! - Upload as multipart form data, download the converted blob under the
//!   original stem with the new extension.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::FileConverter;

impl Component for FileConverter {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        FileConverter::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
