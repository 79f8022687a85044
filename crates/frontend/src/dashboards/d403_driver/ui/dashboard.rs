use contracts::domain::a106_notification::{driver_notifications, NotificationFeed};
use contracts::enums::view::View;
use contracts::navigation::DriverTab;
use leptos::prelude::*;

use super::header::DriverHeader;
use super::overview::DriverOverview;
use crate::domain::a106_notification::ui::NotificationCenter;
use crate::domain::a108_driver::ui::{
    ActiveDeliveryPanel, AvailableOrdersPanel, DeliveryHistoryPanel, DriverProfilePanel,
};
use crate::layout::dashboard::dashboard_shell;

#[component]
pub fn DriverDashboard() -> impl IntoView {
    // Колокольчик в шапке и вкладка уведомлений читают одну ленту
    let feed = RwSignal::new(NotificationFeed::new(driver_notifications()));

    dashboard_shell::<DriverTab, _, _>(
        "d403_driver--dashboard",
        move || view! { <DriverHeader feed=feed /> }.into_any(),
        move |tab| match tab {
            DriverTab::Dashboard => view! { <DriverOverview /> }.into_any(),
            DriverTab::AvailableOrders => view! { <AvailableOrdersPanel /> }.into_any(),
            DriverTab::ActiveDelivery => view! { <ActiveDeliveryPanel /> }.into_any(),
            DriverTab::History => view! { <DeliveryHistoryPanel /> }.into_any(),
            DriverTab::Notifications => {
                view! { <NotificationCenter feed=feed current=View::Driver /> }.into_any()
            }
            DriverTab::Profile => view! { <DriverProfilePanel /> }.into_any(),
        },
    )
}
