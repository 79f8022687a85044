use contracts::domain::a106_notification::{customer_notifications, NotificationFeed};
use contracts::enums::view::View;
use contracts::navigation::CustomerTab;
use leptos::prelude::*;

use super::contact::ContactPanel;
use crate::domain::a106_notification::ui::NotificationCenter;
use crate::domain::a107_customer::ui::{
    CustomerOrdersPanel, CustomerPreferences, CustomerTrackingPanel,
};
use crate::layout::dashboard::dashboard_shell;
use crate::layout::header::Header;

#[component]
pub fn CustomerDashboard() -> impl IntoView {
    // Лента живёт столько же, сколько дашборд
    let feed = RwSignal::new(NotificationFeed::new(customer_notifications()));

    dashboard_shell::<CustomerTab, _, _>(
        "d402_customer--dashboard",
        || view! { <Header subtitle="Customer Dashboard" /> }.into_any(),
        move |tab| match tab {
            CustomerTab::Tracking => view! { <CustomerTrackingPanel /> }.into_any(),
            CustomerTab::Orders => view! { <CustomerOrdersPanel /> }.into_any(),
            CustomerTab::Notifications => {
                view! { <NotificationCenter feed=feed current=View::Customer /> }.into_any()
            }
            CustomerTab::Contact => view! { <ContactPanel /> }.into_any(),
            CustomerTab::Preferences => view! { <CustomerPreferences /> }.into_any(),
        },
    )
}
