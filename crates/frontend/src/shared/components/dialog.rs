use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;

/// Title row of a stacked dialog with its close button.
#[component]
pub fn DialogHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    handle: ModalHandle,
) -> impl IntoView {
    view! {
        <div class="modal-header">
            <div>
                <h3 class="modal-title">{title}</h3>
                {subtitle.map(|s| view! { <p class="modal-subtitle">{s}</p> })}
            </div>
            <button class="modal-close" aria-label="Close" on:click=move |_| handle.close()>
                {icon("close")}
            </button>
        </div>
    }
}

#[component]
pub fn DialogFooter(children: Children) -> impl IntoView {
    view! { <div class="modal-footer">{children()}</div> }
}
