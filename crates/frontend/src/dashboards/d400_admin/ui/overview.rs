use contracts::navigation::{AdminTab, DashboardTab};
use leptos::prelude::*;
use thaw::*;

use crate::layout::dashboard::use_shell;
use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::icons::icon;

const RECENT_ACTIVITY: &[(&str, &str)] = &[
    ("09:43", "Driver #12 started shift"),
    ("09:41", "Vehicle #08 maintenance completed"),
    ("09:32", "New delivery order #4392 assigned"),
    ("09:21", "Delivery #4387 completed"),
    ("09:15", "System backup completed"),
];

/// Quick links: (tab, icon, description)
const QUICK_LINKS: &[(AdminTab, &str, &str)] = &[
    (AdminTab::Fleet, "truck", "Vehicles, maintenance and driver assignment"),
    (AdminTab::Personnel, "users", "Drivers, dispatchers and other staff"),
    (AdminTab::Analytics, "bar-chart", "Performance metrics and reports"),
    (AdminTab::Settings, "settings", "System preferences and access controls"),
];

#[component]
pub fn AdminOverview() -> impl IntoView {
    let shell = use_shell::<AdminTab>();

    view! {
        <div class="panel">
            <PageHeader title="Overview" subtitle="Today at a glance" />

            <div class="stat-grid">
                <StatCard
                    label="Active Deliveries"
                    icon_name="truck"
                    value=Signal::derive(|| "24".to_string())
                    subtitle="+5% from last hour"
                />
                <StatCard
                    label="Active Drivers"
                    icon_name="users"
                    value=Signal::derive(|| "18".to_string())
                    subtitle="+2 since yesterday"
                />
                <StatCard
                    label="Completed Today"
                    icon_name="check"
                    value=Signal::derive(|| "127".to_string())
                    tone=StatTone::Good
                    change=(19.0, true)
                />
                <StatCard
                    label="Efficiency Rate"
                    icon_name="bar-chart"
                    value=Signal::derive(|| "94.2%".to_string())
                    change=(2.1, true)
                />
            </div>

            <div class="overview-grid">
                <div class="card">
                    <h3 class="card__title">"Recent Activity"</h3>
                    <p class="card__subtitle">"Latest system events"</p>
                    <ul class="activity-list">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|(time, event)| {
                                view! {
                                    <li class="activity-list__item">
                                        <span class="activity-list__time">{*time}</span>
                                        <span>{*event}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="card">
                    <h3 class="card__title">"Quick Links"</h3>
                    <div class="quick-links">
                        {QUICK_LINKS
                            .iter()
                            .map(|&(tab, icon_name, description)| {
                                view! {
                                    <div class="quick-links__item">
                                        {icon(icon_name)}
                                        <div>
                                            <div>{tab.label()}</div>
                                            <div class="text-muted">{description}</div>
                                        </div>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| shell.switch_to(tab)
                                        >
                                            {icon("chevron-right")}
                                        </Button>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
