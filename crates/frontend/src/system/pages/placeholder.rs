use leptos::prelude::*;
use thaw::*;

use crate::shared::config::use_config;

/// The only loading indicator in the app (one Suspense around the route outlet).
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    let text = use_config().ui.loading_text;

    view! {
        <div class="placeholder placeholder--loading" role="status">
            <Spinner />
            <p>{text}</p>
        </div>
    }
}

/// Shown when a view fails to render; no retry.
#[component]
pub fn ErrorPlaceholder(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let messages = move || {
        errors
            .get()
            .into_iter()
            .map(|(_, err)| err.to_string())
            .collect::<Vec<_>>()
    };

    Effect::new({
        let messages = messages.clone();
        move |_| {
            for message in messages() {
                log::error!("view failed to load: {message}");
            }
        }
    });

    view! {
        <div class="placeholder placeholder--error" role="alert">
            <MessageBar intent=MessageBarIntent::Error>
                <MessageBarBody>
                    <MessageBarTitle>"Something went wrong"</MessageBarTitle>
                    "This view could not be loaded."
                </MessageBarBody>
            </MessageBar>
            <ul class="placeholder__details">
                {move || messages().into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
            </ul>
        </div>
    }
}
