use leptos::prelude::*;

use crate::shared::icons::icon;

/// Panel header: optional icon, title and subtitle on the left, actions
/// (children) on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Name for `icon()`, drawn before the title
    #[prop(optional)]
    icon_name: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let has_actions = children.is_some();

    view! {
        <div class="page-header" class:page-header--with-actions=has_actions>
            <div class="page-header__text">
                <h2 class="page-header__title">
                    {icon_name.map(|name| icon(name))}
                    {title}
                </h2>
                {move || subtitle.get().map(|text| view! {
                    <p class="page-header__subtitle">{text}</p>
                })}
            </div>
            {children.map(|actions| view! {
                <div class="page-header__actions">{actions()}</div>
            })}
        </div>
    }
}
