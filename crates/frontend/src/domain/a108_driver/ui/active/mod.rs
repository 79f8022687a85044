use contracts::domain::a108_driver::{
    active_delivery, driver_deliveries, DriverDelivery, DriverDeliveryStatus, Stop,
};
use contracts::domain::common::Coded;
use contracts::navigation::DriverTab;
use leptos::prelude::*;
use thaw::*;

use super::driver_status_tone;
use crate::domain::a104_delivery_tracking::ui::RouteProgress;
use crate::layout::dashboard::use_shell;
use crate::shared::components::{PageHeader, StatusBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

/// Шаг маршрута после перехода в `status`; не уходит за последний шаг
fn step_after(delivery: &DriverDelivery, status: DriverDeliveryStatus) -> u32 {
    let advanced = match status {
        DriverDeliveryStatus::Delivered => delivery.total_steps,
        _ => delivery.current_step + 1,
    };
    advanced.min(delivery.total_steps)
}

fn percent(current: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((current as f64 / total as f64) * 100.0).round() as u32
}

fn stop_view(title: &'static str, icon_name: &'static str, stop: Stop) -> impl IntoView {
    view! {
        <div class="card stop-card">
            <h4 class="card__title">{icon(icon_name)}{title}</h4>
            <div>{stop.address}</div>
            {stop.contact_name.map(|name| view! { <div class="text-muted">{icon("user")}{name}</div> })}
            {stop.contact_phone.map(|phone| view! { <div class="text-muted">{icon("phone")}{phone}</div> })}
            {stop.instructions.map(|text| view! { <div class="stop-card__note">{icon("alert")}{text}</div> })}
        </div>
    }
}

/// Current delivery with the status action button and driver notes.
#[component]
pub fn ActiveDeliveryPanel() -> impl IntoView {
    let shell = use_shell::<DriverTab>();

    match active_delivery(driver_deliveries()).cloned() {
        Some(delivery) => view! { <ActiveDeliveryCard delivery=delivery /> }.into_any(),
        None => view! {
            <div class="panel">
                <PageHeader title="Active Delivery" />
                <div class="card empty-state">
                    {icon("truck")}
                    <p>"No active delivery"</p>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| shell.switch_to(DriverTab::AvailableOrders)
                    >
                        "Find Orders"
                    </Button>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ActiveDeliveryCard(delivery: DriverDelivery) -> impl IntoView {
    let currency = use_config().ui.currency_symbol;
    let total = delivery.total_steps;

    let status = RwSignal::new(delivery.status);
    let step = RwSignal::new(delivery.current_step);
    let notes = RwSignal::new(delivery.notes.clone().unwrap_or_default());
    let notes_saved = RwSignal::new(false);

    let order_id = StoredValue::new(delivery.order_id.clone());
    let snapshot = StoredValue::new(delivery.clone());

    let advance = move |_| {
        let Some(next) = status.get_untracked().next() else {
            return;
        };
        let next_step = snapshot.with_value(|d| step_after(d, next));
        log::info!(
            "delivery {} -> {}",
            order_id.get_value(),
            next.display_name()
        );
        status.set(next);
        step.set(next_step);
    };

    let save_notes = move |_| {
        log::info!("notes for {}: {}", order_id.get_value(), notes.get_untracked());
        notes_saved.set(true);
    };

    let call_client = {
        let phone = delivery.client_phone.clone();
        move |_| log::info!("calling client at {phone}")
    };

    view! {
        <div class="panel">
            <PageHeader title="Active Delivery" subtitle=format!("Order {}", delivery.order_id)>
                {move || {
                    let current = status.get();
                    view! {
                        <StatusBadge tone=driver_status_tone(current) label=current.display_name() />
                    }
                }}
            </PageHeader>

            <div class="card">
                {move || view! {
                    <RouteProgress current=step.get() total=total percent=percent(step.get(), total) />
                }}
                <div class="order-card__meta">
                    <span>{icon("navigation")}{format!("{:.1} mi", delivery.distance)}</span>
                    <span>{icon("clock")}{format!("{} min", delivery.estimated_time)}</span>
                    <span>{icon("dollar")}{format_money(delivery.earnings.total, &currency)}</span>
                </div>
                <div class="text-muted">
                    {format!("Accepted {}", format_datetime(&delivery.accepted))}
                </div>
                <div class="action-row">
                    {move || {
                        let current = status.get();
                        match current.next() {
                            Some(_) => view! {
                                <Button appearance=ButtonAppearance::Primary on_click=advance>
                                    {icon("check")}
                                    {current.action_label()}
                                </Button>
                            }
                            .into_any(),
                            None => view! {
                                <span class="text-muted">
                                    {if current == DriverDeliveryStatus::Delivered {
                                        "Delivery completed"
                                    } else {
                                        "Delivery cancelled"
                                    }}
                                </span>
                            }
                            .into_any(),
                        }
                    }}
                    <Button appearance=ButtonAppearance::Secondary on_click=call_client>
                        {icon("phone")}
                        "Call Customer"
                    </Button>
                </div>
            </div>

            <div class="settings-grid">
                {stop_view("Pickup", "package", delivery.pickup.clone())}
                {stop_view("Drop-off", "map-pin", delivery.dropoff.clone())}
                <div class="card">
                    <h4 class="card__title">{icon("package")}"Package"</h4>
                    <div>{delivery.package.description.clone()}</div>
                    <div class="text-muted">{delivery.package.summary()}</div>
                </div>
                <div class="card">
                    <h4 class="card__title">{icon("dollar")}"Earnings"</h4>
                    <div class="line-items__row">
                        <span>"Base"</span>
                        <span>{format_money(delivery.earnings.base, &currency)}</span>
                    </div>
                    <div class="line-items__row">
                        <span>"Tips"</span>
                        <span>{format_money(delivery.earnings.tips, &currency)}</span>
                    </div>
                    <div class="line-items__row">
                        <span>"Bonus"</span>
                        <span>{format_money(delivery.earnings.bonus, &currency)}</span>
                    </div>
                    <div class="line-items__row line-items__row--total">
                        <span>"Total"</span>
                        <span>{format_money(delivery.earnings.total, &currency)}</span>
                    </div>
                </div>
            </div>

            <div class="card">
                <h4 class="card__title">"Delivery Notes"</h4>
                <Textarea value=notes placeholder="Add notes about this delivery..." />
                <Button appearance=ButtonAppearance::Secondary on_click=save_notes>"Save Notes"</Button>
                {move || notes_saved.get().then(|| view! {
                    <span class="text-muted">"Notes saved"</span>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_after() {
        let delivery = active_delivery(driver_deliveries()).unwrap().clone();
        let next = step_after(&delivery, DriverDeliveryStatus::InTransit);
        assert!(next <= delivery.total_steps);
        assert_eq!(
            step_after(&delivery, DriverDeliveryStatus::Delivered),
            delivery.total_steps
        );
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(2, 4), 50);
        assert_eq!(percent(1, 3), 33);
    }
}
