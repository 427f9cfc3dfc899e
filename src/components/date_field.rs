//! Date Field Component
//!
//! Masked DD/MM/YYYY text input with a native calendar behind a button.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

/// Open the native picker; browsers without `showPicker` get focus + click
fn open_picker(input: &web_sys::HtmlInputElement) {
    let show = js_sys::Reflect::get(input, &JsValue::from_str("showPicker"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    match show {
        Some(show) if show.call0(input).is_ok() => {}
        _ => {
            let _ = input.focus();
            input.click();
        }
    }
}

#[component]
pub fn DateField(
    /// Masked text, also what the hidden picker is synced from
    value: RwSignal<String>,
    /// Raw text typed into the field
    #[prop(into)] on_input: Callback<String>,
    /// `YYYY-MM-DD` chosen in the calendar
    #[prop(into)] on_pick: Callback<String>,
    /// Picker value derived from the masked text
    #[prop(into)] picker_value: Signal<String>,
) -> impl IntoView {
    let picker_ref = NodeRef::<html::Input>::new();

    view! {
        <div class="date-field">
            <input
                type="text"
                inputmode="numeric"
                placeholder="dd/mm/aaaa"
                maxlength="10"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    else {
                        return;
                    };
                    on_input.run(input.value());
                    // Keep the caret text in step with the mask even when the signal is unchanged
                    input.set_value(&value.get_untracked());
                }
            />
            <button
                type="button"
                class="ghost-btn"
                on:click=move |_| {
                    if let Some(input) = picker_ref.get() {
                        open_picker(&input);
                    }
                }
            >
                "Calendario"
            </button>
            <input
                type="date"
                class="picker-hidden"
                tabindex="-1"
                aria-hidden="true"
                node_ref=picker_ref
                prop:value=move || picker_value.get()
                on:change=move |ev| on_pick.run(event_target_value(&ev))
            />
        </div>
    }
}
