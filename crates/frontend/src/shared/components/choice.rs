use contracts::domain::common::{Choice, Coded};
use leptos::prelude::*;

/// `<option>` list for a thaw `Select` bound to a `Choice<T>` code.
pub fn choice_options<T: Coded>(all_label: &'static str) -> impl IntoView {
    Choice::<T>::options(all_label)
        .into_iter()
        .map(|(code, label)| view! { <option value=code>{label}</option> })
        .collect_view()
}

/// `<option>` list of every value of `T`, without "all".
pub fn choice_options_of<T: Coded>() -> impl IntoView {
    T::ALL
        .iter()
        .map(|value| view! { <option value=value.code()>{value.display_name()}</option> })
        .collect_view()
}

/// Select value signal starting at "all".
pub fn all_choice<T: Coded>() -> RwSignal<String> {
    RwSignal::new(Choice::<T>::ALL_CODE.to_string())
}

/// Secondary tab strip inside a panel (billing, analytics).
#[component]
pub fn SubTabs(
    tabs: &'static [(&'static str, &'static str)],
    active: RwSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="detail-tabs">
            {tabs
                .iter()
                .map(|&(key, label)| {
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if active.get() == key {
                                    "detail-tabs__item detail-tabs__item--active"
                                } else {
                                    "detail-tabs__item"
                                }
                            }
                            on:click=move |_| active.set(key)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
