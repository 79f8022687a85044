use contracts::navigation::ClientTab;
use leptos::prelude::*;

use crate::domain::a103_invoice::ui::BillingPanel;
use crate::domain::a104_delivery_tracking::ui::DeliveryTrackingPanel;
use crate::domain::a105_conversation::ui::MessageCenter;
use crate::domain::a111_client_order::ui::ClientOrdersPanel;
use crate::layout::dashboard::dashboard_shell;
use crate::layout::header::Header;

#[component]
pub fn ClientDashboard() -> impl IntoView {
    dashboard_shell::<ClientTab, _, _>(
        "d401_client--dashboard",
        || view! { <Header subtitle="Client Dashboard" /> }.into_any(),
        |tab| match tab {
            ClientTab::Orders => view! { <ClientOrdersPanel /> }.into_any(),
            ClientTab::Tracking => view! { <DeliveryTrackingPanel /> }.into_any(),
            ClientTab::Communication => view! { <MessageCenter /> }.into_any(),
            ClientTab::Billing => view! { <BillingPanel /> }.into_any(),
        },
    )
}
