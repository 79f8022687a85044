use contracts::domain::a106_notification::NotificationFeed;
use contracts::domain::a108_driver::{driver_profile, DriverAvailability};
use contracts::navigation::DriverTab;
use leptos::prelude::*;
use thaw::*;

use crate::layout::dashboard::use_shell;
use crate::layout::header::Header;
use crate::shared::icons::icon;

/// Header with the availability switch and the notification bell.
#[component]
pub fn DriverHeader(feed: RwSignal<NotificationFeed>) -> impl IntoView {
    let shell = use_shell::<DriverTab>();
    let available = RwSignal::new(driver_profile().status == DriverAvailability::Available);

    Effect::new(move |prev: Option<bool>| {
        let now = available.get();
        if prev.is_some() {
            log::info!("driver availability: {}", if now { "available" } else { "offline" });
        }
        now
    });

    let unread = move || feed.with(|f| f.unread_count());

    view! {
        <Header subtitle="Driver Dashboard">
            <Switch checked=available label="Available" />
            <button
                type="button"
                class="header__bell"
                title="Notifications"
                on:click=move |_| shell.switch_to(DriverTab::Notifications)
            >
                {icon("bell")}
                {move || {
                    let count = unread();
                    (count > 0).then(|| view! { <span class="header__bell-count">{count}</span> })
                }}
            </button>
        </Header>
    }
}
