//! Status Banner Component

use leptos::prelude::*;

/// Message strip shown above the table while `message` is set
#[component]
pub fn StatusBanner(kind: &'static str, #[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! { <div class=format!("banner banner-{}", kind)>{text}</div> }
        })
    }
}
