use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod credit_bus;
mod downloads;
mod files;
mod lifecycle;
mod markdown;
mod session;
mod tabs;

fn main() {
    yew::Renderer::<App>::new().render();
}
