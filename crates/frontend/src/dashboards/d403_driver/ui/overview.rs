use contracts::domain::a108_driver::{
    active_delivery, available_orders, driver_deliveries, driver_stats, DriverDeliveryStatus,
};
use contracts::domain::common::Coded;
use contracts::navigation::DriverTab;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a104_delivery_tracking::ui::RouteProgress;
use crate::domain::a108_driver::ui::{driver_status_tone, priority_tone};
use crate::layout::dashboard::use_shell;
use crate::shared::components::{PageHeader, StatCard, StatTone, StatusBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

const RECENT_LIMIT: usize = 3;

#[component]
pub fn DriverOverview() -> impl IntoView {
    let shell = use_shell::<DriverTab>();
    let currency = use_config().ui.currency_symbol;
    let stats = driver_stats();

    let today_earnings = format_money(stats.today.earnings, &currency);
    let weekly_earnings = format_money(stats.weekly.earnings, &currency);

    let current = active_delivery(driver_deliveries())
        .filter(|d| d.status.is_in_progress() || d.status == DriverDeliveryStatus::Accepted)
        .cloned();

    let recent = driver_deliveries()
        .iter()
        .filter(|d| d.status == DriverDeliveryStatus::Delivered)
        .take(RECENT_LIMIT)
        .cloned()
        .collect::<Vec<_>>();

    let nearby = available_orders().iter().take(RECENT_LIMIT).cloned().collect::<Vec<_>>();

    view! {
        <div class="panel">
            <PageHeader title="Dashboard" subtitle="Your day at a glance" />

            <div class="stat-grid">
                <StatCard
                    label="Today's Deliveries"
                    icon_name="package"
                    value=Signal::derive(move || stats.today.deliveries.to_string())
                    subtitle=format!("{:.1} mi · {:.1} h", stats.today.distance, stats.today.hours)
                />
                <StatCard
                    label="Today's Earnings"
                    icon_name="dollar"
                    value=Signal::derive(move || today_earnings.clone())
                    tone=StatTone::Good
                />
                <StatCard
                    label="This Week"
                    icon_name="bar-chart"
                    value=Signal::derive(move || weekly_earnings.clone())
                    subtitle=format!("{} deliveries", stats.weekly.deliveries)
                />
                <StatCard
                    label="Rating"
                    icon_name="star"
                    value=Signal::derive(move || format!("{:.1}", stats.rating_average))
                    subtitle=format!("{} ratings", stats.rating_count)
                />
            </div>

            <div class="overview-grid">
                <div class="card">
                    <h3 class="card__title">"Current Delivery"</h3>
                    {match current {
                        Some(delivery) => view! {
                            <div class="card__head">
                                <div>
                                    <strong>{format!("Order {}", delivery.order_id)}</strong>
                                    <div class="text-muted">{delivery.client_name.clone()}</div>
                                </div>
                                <StatusBadge
                                    tone=driver_status_tone(delivery.status)
                                    label=delivery.status.display_name()
                                />
                            </div>
                            <div class="tracking-route">
                                <div>{icon("package")}{delivery.pickup.address.clone()}</div>
                                <div>{icon("map-pin")}{delivery.dropoff.address.clone()}</div>
                            </div>
                            <RouteProgress
                                current=delivery.current_step
                                total=delivery.total_steps
                                percent=(delivery.current_step * 100).checked_div(delivery.total_steps).unwrap_or(0)
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| shell.switch_to(DriverTab::ActiveDelivery)
                            >
                                "View Details"
                                {icon("chevron-right")}
                            </Button>
                        }
                        .into_any(),
                        None => view! {
                            <p class="text-muted">"No delivery in progress"</p>
                        }
                        .into_any(),
                    }}
                </div>

                <div class="card">
                    <h3 class="card__title">"Recent Deliveries"</h3>
                    <ul class="activity-list">
                        {recent
                            .into_iter()
                            .map(|d| {
                                let when = d.completed_at.clone().unwrap_or_else(|| d.accepted.clone());
                                view! {
                                    <li class="activity-list__item">
                                        <span class="activity-list__time">{format_date(&when)}</span>
                                        <span>{format!("{} · {}", d.order_id, d.client_name)}</span>
                                        <span>{format_money(d.earnings.total, &currency)}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| shell.switch_to(DriverTab::History)
                    >
                        "View All Deliveries"
                    </Button>
                </div>

                <div class="card">
                    <h3 class="card__title">"Available Orders Nearby"</h3>
                    <ul class="activity-list">
                        {nearby
                            .into_iter()
                            .map(|o| {
                                view! {
                                    <li class="activity-list__item">
                                        <span>{o.order_id.clone()}</span>
                                        <span class="text-muted">{format!("{:.1} mi", o.distance)}</span>
                                        <StatusBadge tone=priority_tone(o.priority) label=o.priority.display_name() />
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| shell.switch_to(DriverTab::AvailableOrders)
                    >
                        "View All Orders"
                    </Button>
                </div>
            </div>
        </div>
    }
}
