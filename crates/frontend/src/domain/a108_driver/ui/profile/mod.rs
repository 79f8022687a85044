use contracts::domain::a108_driver::{driver_profile, driver_stats, PeriodStats};
use contracts::domain::common::Coded;
use leptos::prelude::*;

use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::config::use_config;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

#[component]
fn PeriodRow(label: &'static str, stats: PeriodStats) -> impl IntoView {
    let currency = use_config().ui.currency_symbol;
    view! {
        <tr>
            <td>{label}</td>
            <td>{stats.deliveries}</td>
            <td>{format_money(stats.earnings, &currency)}</td>
            <td>{format!("{:.1} mi", stats.distance)}</td>
            <td>{format!("{:.1} h", stats.hours)}</td>
        </tr>
    }
}

/// Профиль водителя: данные, транспорт, статистика и разбивка оценок
#[component]
pub fn DriverProfilePanel() -> impl IntoView {
    let profile = driver_profile();
    let stats = driver_stats();

    view! {
        <div class="panel">
            <PageHeader title="Driver Profile" subtitle="Your personal details and performance" />

            <div class="stat-grid">
                <StatCard
                    label="Rating"
                    icon_name="star"
                    value=Signal::derive(move || format!("{:.1}", stats.rating_average))
                    subtitle=format!("{} ratings", stats.rating_count)
                    tone=StatTone::Good
                />
                <StatCard
                    label="Total Deliveries"
                    icon_name="package"
                    value=Signal::derive(move || profile.total_deliveries.to_string())
                />
                <StatCard
                    label="Max Distance"
                    icon_name="navigation"
                    value=Signal::derive(move || format!("{} mi", profile.max_distance))
                />
            </div>

            <div class="settings-grid">
                <div class="card">
                    <h3 class="card__title">{icon("user")}{profile.name.clone()}</h3>
                    <div class="contact-row">{icon("mail")}<span>{profile.email.clone()}</span></div>
                    <div class="contact-row">{icon("phone")}<span>{profile.phone.clone()}</span></div>
                    <div class="contact-row">{icon("map-pin")}<span>{profile.address.clone()}</span></div>
                    <div class="contact-row">
                        {icon("clock")}
                        <span>{format!("{} - {}", profile.working_hours.0, profile.working_hours.1)}</span>
                    </div>
                    <div class="text-muted">{format!("Status: {}", profile.status.display_name())}</div>
                    <div class="chip-row">
                        {profile
                            .preferred_zones
                            .iter()
                            .map(|zone| view! { <span class="chip">{zone.clone()}</span> })
                            .collect_view()}
                    </div>
                </div>

                <div class="card">
                    <h3 class="card__title">{icon("truck")}"Vehicle"</h3>
                    <div>{format!("{} ({})", profile.vehicle.model, profile.vehicle.vehicle_type)}</div>
                    <div class="text-muted">{format!("Plate {}", profile.vehicle.license_plate)}</div>
                    <div class="text-muted">{format!("Color: {}", profile.vehicle.color)}</div>
                </div>

                <div class="card">
                    <h3 class="card__title">{icon("bar-chart")}"Performance"</h3>
                    <table class="simple-table">
                        <thead>
                            <tr>
                                <th>""</th>
                                <th>"Deliveries"</th>
                                <th>"Earnings"</th>
                                <th>"Distance"</th>
                                <th>"Hours"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <PeriodRow label="Today" stats=stats.today />
                            <PeriodRow label="This week" stats=stats.weekly />
                            <PeriodRow label="This month" stats=stats.monthly />
                        </tbody>
                    </table>
                </div>

                <div class="card">
                    <h3 class="card__title">{icon("star")}"Ratings"</h3>
                    {(1..=5u8)
                        .rev()
                        .map(|stars| {
                            let share = stats.rating_share(stars);
                            view! {
                                <div class="progress-row">
                                    <span>{format!("{stars} ★")}</span>
                                    <div class="progress">
                                        <div class="progress__bar" style=format!("width: {share}%")></div>
                                    </div>
                                    <span class="text-muted">{format!("{share}%")}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
