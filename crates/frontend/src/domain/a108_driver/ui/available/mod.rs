use contracts::domain::a108_driver::{
    available_orders, AvailableOrder, AvailableOrderFilter, DistanceLimit, OrderPriority,
};
use contracts::domain::common::{Choice, Coded};
use contracts::navigation::DriverTab;
use leptos::prelude::*;
use thaw::*;

use super::priority_tone;
use crate::layout::dashboard::use_shell;
use crate::shared::components::{all_choice, choice_options, PageHeader, StatusBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

/// Minutes as "1 h 05 min" / "25 min"
fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{} h {:02} min", minutes / 60, minutes % 60)
    }
}

/// Orders near the driver. Accepted orders leave the list for this visit.
#[component]
pub fn AvailableOrdersPanel() -> impl IntoView {
    let shell = use_shell::<DriverTab>();
    let currency = use_config().ui.currency_symbol;

    let query = RwSignal::new(String::new());
    let distance = all_choice::<DistanceLimit>();
    let priority = all_choice::<OrderPriority>();
    let filter = Memo::new(move |_| AvailableOrderFilter {
        query: query.get(),
        distance: Choice::from_code(&distance.get()),
        priority: Choice::from_code(&priority.get()),
    });

    let accepted = RwSignal::new(Vec::<String>::new());
    let last_accepted = RwSignal::new(None::<String>);

    let visible = move || {
        let taken = accepted.get();
        filter
            .get()
            .apply(available_orders())
            .into_iter()
            .filter(|o| !taken.contains(&o.id))
            .cloned()
            .collect::<Vec<AvailableOrder>>()
    };

    let accept = move |order: AvailableOrder| {
        log::info!("order {} accepted ({})", order.order_id, order.id);
        accepted.update(|ids| ids.push(order.id.clone()));
        last_accepted.set(Some(order.order_id));
    };

    view! {
        <div class="panel">
            <PageHeader title="Available Orders" subtitle="Orders available for pickup in your area" />

            {move || last_accepted.get().map(|order_id| view! {
                <MessageBar intent=MessageBarIntent::Success>
                    <MessageBarBody>
                        {format!("Order {order_id} accepted. ")}
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| shell.switch_to(DriverTab::ActiveDelivery)
                        >
                            "Go to Active Delivery"
                        </Button>
                    </MessageBarBody>
                </MessageBar>
            })}

            <div class="filter-bar">
                <Input value=query placeholder="Search by order ID or address..." />
                <Select value=distance>
                    {choice_options::<DistanceLimit>("Any distance")}
                </Select>
                <Select value=priority>
                    {choice_options::<OrderPriority>("All priorities")}
                </Select>
            </div>

            <div class="card-list">
                {move || {
                    let currency = currency.clone();
                    let orders = visible();
                    if orders.is_empty() {
                        return view! {
                            <div class="card empty-state">
                                {icon("search")}
                                <p>"No orders match your filters"</p>
                            </div>
                        }
                        .into_any();
                    }
                    orders
                        .into_iter()
                        .map(|order| {
                            let for_accept = order.clone();
                            view! {
                                <div class="card order-card">
                                    <div class="card__head">
                                        <div>
                                            <h3 class="card__title">{format!("Order {}", order.order_id)}</h3>
                                            <span class="text-muted">{order.client_name.clone()}</span>
                                        </div>
                                        <StatusBadge
                                            tone=priority_tone(order.priority)
                                            label=order.priority.display_name()
                                        />
                                    </div>
                                    <div class="tracking-route">
                                        <div>{icon("package")}{order.pickup.clone()}</div>
                                        <div>{icon("map-pin")}{order.delivery.clone()}</div>
                                    </div>
                                    <div class="order-card__meta">
                                        <span>{icon("navigation")}{format!("{:.1} mi", order.distance)}</span>
                                        <span>{icon("clock")}{format_duration(order.estimated_time)}</span>
                                        <span>{icon("dollar")}{format_money(order.estimated_earnings, &currency)}</span>
                                    </div>
                                    <div class="text-muted">{order.package.summary()}</div>
                                    <div class="text-muted">
                                        {format!("Expires {}", format_datetime(&order.expires_at))}
                                    </div>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| accept(for_accept.clone())
                                    >
                                        {icon("check")}
                                        "Accept Order"
                                    </Button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(25), "25 min");
        assert_eq!(format_duration(65), "1 h 05 min");
        assert_eq!(format_duration(120), "2 h 00 min");
    }
}
