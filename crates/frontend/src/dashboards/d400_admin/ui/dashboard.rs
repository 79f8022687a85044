use contracts::navigation::AdminTab;
use leptos::prelude::*;

use super::overview::AdminOverview;
use super::settings::SystemSettings;
use crate::domain::a101_vehicle::ui::VehicleList;
use crate::domain::a102_personnel::ui::PersonnelList;
use crate::domain::a109_analytics::ui::AnalyticsPanel;
use crate::layout::dashboard::dashboard_shell;
use crate::layout::header::Header;

/// Admin dashboard: overview, fleet, personnel, analytics, settings
#[component]
pub fn AdminDashboard() -> impl IntoView {
    dashboard_shell::<AdminTab, _, _>(
        "d400_admin--dashboard",
        || view! { <Header subtitle="Admin Dashboard" /> }.into_any(),
        |tab| match tab {
            AdminTab::Overview => view! { <AdminOverview /> }.into_any(),
            AdminTab::Fleet => view! { <VehicleList /> }.into_any(),
            AdminTab::Personnel => view! { <PersonnelList /> }.into_any(),
            AdminTab::Analytics => view! { <AnalyticsPanel /> }.into_any(),
            AdminTab::Settings => view! { <SystemSettings /> }.into_any(),
        },
    )
}
