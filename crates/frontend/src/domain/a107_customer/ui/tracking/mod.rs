use contracts::domain::a107_customer::{customer_deliveries, focused_delivery, CustomerDelivery};
use contracts::domain::common::Coded;
use contracts::navigation::CustomerTab;
use leptos::prelude::*;

use crate::domain::a104_delivery_tracking::ui::{delivery_status_tone, TrackingTimeline};
use crate::layout::dashboard::use_shell;
use crate::shared::components::{PageHeader, StatusBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

/// Live tracking. The selected delivery is the shell's focus, so a
/// notification link or the orders tab can point at one directly.
#[component]
pub fn CustomerTrackingPanel() -> impl IntoView {
    let shell = use_shell::<CustomerTab>();
    let items = customer_deliveries();
    let active: Vec<CustomerDelivery> = items
        .iter()
        .filter(|d| d.status.is_active())
        .cloned()
        .collect();

    let current = move || {
        shell
            .focus
            .with(|focus| focused_delivery(items, focus.as_deref()).cloned())
    };
    let current_id = move || current().map(|d| d.id);

    view! {
        <div class="panel">
            <PageHeader title="Live Tracking" icon_name="navigation" subtitle="Follow your packages in real time" />

            <div class="chip-row">
                {active
                    .into_iter()
                    .map(|delivery| {
                        let id = delivery.id.clone();
                        let id_for_click = id.clone();
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if current_id().as_deref() == Some(id.as_str()) {
                                        "chip chip--active"
                                    } else {
                                        "chip"
                                    }
                                }
                                on:click=move |_| shell.focus.set(Some(id_for_click.clone()))
                            >
                                {format!("Order {}", delivery.order_id)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match current() {
                None => view! {
                    <div class="card empty-state">
                        {icon("package")}
                        <p>"You have no deliveries to track"</p>
                    </div>
                }
                .into_any(),
                Some(delivery) => view! { <DeliveryCard delivery=delivery /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DeliveryCard(delivery: CustomerDelivery) -> impl IntoView {
    let currency = use_config().ui.currency_symbol;
    let arrival = match &delivery.actual_delivery {
        Some(actual) => format!("Delivered {}", format_datetime(actual)),
        None => format!("Estimated {}", format_datetime(&delivery.estimated_delivery)),
    };

    view! {
        <div class="card">
            <div class="card__head">
                <div>
                    <h3 class="card__title">{format!("Order {}", delivery.order_id)}</h3>
                    <span class="text-muted">{format!("Tracking # {}", delivery.tracking_number)}</span>
                </div>
                <StatusBadge
                    tone=delivery_status_tone(delivery.status)
                    label=delivery.status.display_name()
                />
            </div>

            <div class="tracking-summary">
                {icon("clock")}
                <span>{arrival}</span>
            </div>
            <div class="tracking-route">
                <div>{icon("package")}{delivery.origin.clone()}</div>
                <div>{icon("map-pin")}{delivery.destination.clone()}</div>
            </div>

            <div class="map-placeholder">
                {icon("navigation")}
                <span>"Map view"</span>
            </div>

            {delivery.driver.clone().map(|driver| view! {
                <div class="tracking-driver">
                    <span class="avatar">{driver.initials()}</span>
                    <div>
                        <div>{driver.name.clone()}</div>
                        <div class="text-muted">{icon("phone")}{driver.phone.clone()}</div>
                    </div>
                </div>
            })}

            <h4>{format!("Items ({})", delivery.item_count())}</h4>
            <ul class="line-items">
                {delivery
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="line-items__row">
                                <span>{format!("{} × {}", item.quantity, item.name)}</span>
                                <span>{format_money(item.price * item.quantity as f64, &currency)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
                <li class="line-items__row line-items__row--total">
                    <span>"Total"</span>
                    <span>{format_money(delivery.total_amount, &currency)}</span>
                </li>
            </ul>

            <h4>"Delivery Updates"</h4>
            <TrackingTimeline updates=delivery.updates.clone() />
        </div>
    }
}
