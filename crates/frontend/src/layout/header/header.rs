use contracts::enums::view::View;
use contracts::navigation::NavigationIntent;
use leptos::prelude::*;

use crate::layout::navigation_bridge::use_navigate_with_intent;
use crate::shared::config::use_config;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::use_auth;

/// Top bar shared by every view. `children` lands on the right, before the
/// theme switch (role dashboards put their own widgets there).
#[component]
pub fn Header(
    /// Role name shown after the app title
    #[prop(optional, into)]
    subtitle: Option<String>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let config = use_config();
    let auth = use_auth();
    let go = use_navigate_with_intent();

    let go_home = {
        let go = go.clone();
        move |_| go(NavigationIntent::new(View::Home))
    };
    let go_sign_in = move |_| go(NavigationIntent::new(View::SignIn));

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button class="header__title" on:click=go_home>
                    {crate::shared::icons::icon("truck")}
                    <span>{config.app.title.clone()}</span>
                </button>
                {subtitle.map(|s| view! { <span class="header__subtitle">{s}</span> })}
            </div>
            <div class="header__actions">
                {children.map(|c| c())}
                <ThemeToggle />
                {move || match auth.current_user() {
                    Some(user) => view! {
                        <span class="header__user" title=user.email.clone()>{user.name.clone()}</span>
                        <button class="button button--ghost" on:click=move |_| auth.sign_out()>
                            "Sign out"
                        </button>
                    }.into_any(),
                    None => view! {
                        <button class="button button--ghost" on:click=go_sign_in.clone()>
                            "Sign in"
                        </button>
                    }.into_any(),
                }}
            </div>
        </header>
    }
}
