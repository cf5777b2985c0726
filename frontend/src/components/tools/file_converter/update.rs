//! Update function for the universal file converter, Elm-style: mutate
//! state from a message, return whether the view should re-render.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;

use crate::api;
use crate::credit_bus;
use crate::downloads;
use crate::files;
use crate::session;

use super::helpers::{build_form, first_dropped_file};
use super::messages::Msg;
use super::state::FileConverter;

const FALLBACK: &str = "Failed to convert file. Please try again.";

pub fn update(component: &mut FileConverter, ctx: &Context<FileConverter>, msg: Msg) -> bool {
    match msg {
        Msg::FileSelected(selected) => {
            accept(component, selected);
            true
        }
        Msg::Dropped(event) => {
            event.prevent_default();
            let dropped = first_dropped_file(&event);
            accept(component, dropped);
            true
        }
        Msg::SelectTarget(target) => {
            component.target = Some(target);
            true
        }
        Msg::Submit => {
            let user = match session::require_user("Please sign in to convert files") {
                Ok(user) => user,
                Err(err) => {
                    component.lifecycle.fail(err);
                    return true;
                }
            };
            let (Some(file), Some(target)) = (component.file.clone(), component.target.clone())
            else {
                return false;
            };
            if !component.lifecycle.begin() {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = match build_form(&file, &user.id, &target) {
                    Some(form) => api::post_form_blob("/api/convert", form, FALLBACK).await,
                    None => Err(ToolError::RequestFailed(FALLBACK.to_string())),
                };
                link.send_message(Msg::Finished(outcome));
            });
            true
        }
        Msg::Finished(outcome) => match outcome {
            Ok(bytes) => {
                if let (Some(file), Some(target)) = (&component.file, &component.target) {
                    let filename = files::download_name(&file.name(), target);
                    component.last_download = Some(downloads::save_bytes(&bytes, &filename));
                }
                component.lifecycle.finish(Ok(()));
                credit_bus::publish();
                true
            }
            Err(err) => {
                component.lifecycle.finish(Err(err));
                true
            }
        },
    }
}

/// Gates an incoming file on the conversion graph; rejected extensions
/// never leave the client.
fn accept(component: &mut FileConverter, selected: Option<web_sys::File>) {
    let Some(file) = selected else { return };
    match files::extension(&file.name()).filter(|ext| files::conversions_for(ext).is_some()) {
        Some(ext) => {
            let targets = files::conversions_for(&ext).unwrap_or_default();
            component.target = targets.first().map(|t| t.to_string());
            component.source_ext = Some(ext);
            component.file = Some(file);
            component.lifecycle.clear_error();
        }
        None => {
            let ext = files::extension(&file.name()).unwrap_or_default();
            component.file = None;
            component.source_ext = None;
            component.target = None;
            component.lifecycle.fail(ToolError::Validation(format!(
                ".{} files are not supported yet.",
                ext
            )));
        }
    }
}
