//! Presentational primitives shared by every screen. Stateless helper
//! functions returning `Html`; screens own all state.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use common::error::ToolError;

pub fn card(body: Html) -> Html {
    html! {
        <div class="card">{ body }</div>
    }
}

/// Page header: icon glyph, title, tagline.
pub fn page_header(icon: &str, title: &str, tagline: &str) -> Html {
    html! {
        <div class="page-header">
            <div class="page-icon"><i class="material-icons">{ icon }</i></div>
            <h1>{ title }</h1>
            <p class="tagline">{ tagline }</p>
        </div>
    }
}

pub fn submit_button(
    label: &str,
    busy_label: &str,
    busy: bool,
    disabled: bool,
    onclick: Callback<MouseEvent>,
) -> Html {
    html! {
        <button
            class={classes!("btn", "btn-primary", busy.then_some("busy"))}
            disabled={busy || disabled}
            onclick={onclick}
        >
            { if busy { busy_label } else { label } }
        </button>
    }
}

pub fn outline_button(label: &str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button class="btn btn-outline" onclick={onclick}>{ label }</button>
    }
}

pub fn copy_button(copied: bool, onclick: Callback<MouseEvent>) -> Html {
    outline_button(if copied { "Copied!" } else { "Copy" }, onclick)
}

pub fn text_area(
    id: &str,
    value: &str,
    placeholder: &str,
    rows: u32,
    oninput: Callback<String>,
    onkeydown: Option<Callback<KeyboardEvent>>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        oninput.emit(textarea.value());
    });
    html! {
        <textarea
            id={id.to_string()}
            value={value.to_string()}
            placeholder={placeholder.to_string()}
            rows={rows.to_string()}
            oninput={oninput}
            onkeydown={onkeydown}
        />
    }
}

pub fn text_input(value: &str, placeholder: &str, oninput: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        oninput.emit(input.value());
    });
    html! {
        <input
            type="text"
            value={value.to_string()}
            placeholder={placeholder.to_string()}
            oninput={oninput}
        />
    }
}

/// `<select>` over string options, reporting the chosen value.
pub fn select(value: &str, options: &[&str], onchange: Callback<String>) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        onchange.emit(select.value());
    });
    html! {
        <select onchange={onchange}>
            {
                for options.iter().map(|opt| html! {
                    <option value={opt.to_string()} selected={*opt == value}>
                        { opt.to_uppercase() }
                    </option>
                })
            }
        </select>
    }
}

/// Inline error displayed next to the triggering input. Credit exhaustion
/// gets its own emphasis class so the purchase call-to-action stands out.
pub fn inline_error(error: Option<&ToolError>) -> Html {
    match error {
        Some(err) => {
            let class = if err.wants_purchase() {
                "inline-error credits"
            } else {
                "inline-error"
            };
            html! { <div class={class} role="alert">{ err.to_string() }</div> }
        }
        None => Html::default(),
    }
}

/// Static loading placeholder shown while a request is in flight.
pub fn skeleton_text(lines: usize) -> Html {
    html! {
        <div class="skeleton">
            { for (0..lines).map(|_| html! { <div class="skeleton-line" /> }) }
        </div>
    }
}

pub fn empty_state(icon: &str, message: &str) -> Html {
    html! {
        <div class="empty-state">
            <i class="material-icons">{ icon }</i>
            <p>{ message }</p>
        </div>
    }
}

/// Display-only character counter; the server enforces real limits.
pub fn char_counter(len: usize, advisory_max: usize) -> Html {
    html! {
        <span class="char-counter">{ format!("{}/{}", len, advisory_max) }</span>
    }
}

/// The per-screen strip of hint cards under the main card.
pub fn tips(entries: &[(&str, &str)]) -> Html {
    html! {
        <div class="tips-grid">
            {
                for entries.iter().map(|(title, description)| html! {
                    <div class="tip-card">
                        <h3>{ *title }</h3>
                        <p>{ *description }</p>
                    </div>
                })
            }
        </div>
    }
}
