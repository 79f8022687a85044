use contracts::domain::a111_client_order::{recent_orders, ClientOrder, OrderStage};
use contracts::domain::common::Coded;
use leptos::prelude::*;
use thaw::*;

use super::create::CreateOrderDialog;
use crate::domain::a103_invoice::ui::RecentInvoicesDialog;
use crate::domain::a104_delivery_tracking::ui::TrackingDialog;
use crate::domain::a105_conversation::ui::SupportDialog;
use crate::shared::components::{PageHeader, StatCard, StatusBadge, Tone};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;

fn stage_tone(stage: OrderStage) -> Tone {
    match stage {
        OrderStage::Processing => Tone::Warning,
        OrderStage::InTransit => Tone::Info,
        OrderStage::Delivered => Tone::Success,
    }
}

/// Client orders tab: summary cards, recent orders and Quick Actions dialogs.
#[component]
pub fn ClientOrdersPanel() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let orders = RwSignal::new(recent_orders().to_vec());

    let open_create = move |_| {
        modal_stack.push(move |handle| {
            view! { <CreateOrderDialog orders=orders handle=handle /> }.into_any()
        });
    };
    let open_tracking = move |_| {
        modal_stack.push(|handle| view! { <TrackingDialog handle=handle /> }.into_any());
    };
    let open_invoices = move |_| {
        modal_stack.push(|handle| view! { <RecentInvoicesDialog handle=handle /> }.into_any());
    };
    let open_support = move |_| {
        modal_stack.push(|handle| view! { <SupportDialog handle=handle /> }.into_any());
    };

    let active = move || {
        orders.with(|list| list.iter().filter(|o| o.stage != OrderStage::Delivered).count())
    };
    let in_transit = move || {
        orders.with(|list| list.iter().filter(|o| o.stage == OrderStage::InTransit).count())
    };

    view! {
        <div class="panel">
            <PageHeader title="Orders" subtitle="Your most recent delivery orders" />

            <div class="stat-grid">
                <StatCard
                    label="Active Orders"
                    icon_name="package"
                    value=Signal::derive(move || active().to_string())
                />
                <StatCard
                    label="In Transit"
                    icon_name="truck"
                    value=Signal::derive(move || in_transit().to_string())
                />
                <StatCard
                    label="Completed This Week"
                    icon_name="file-text"
                    value=Signal::derive(|| "43".to_string())
                    change=(12.0, true)
                />
                <StatCard
                    label="Unread Messages"
                    icon_name="message"
                    value=Signal::derive(|| "5".to_string())
                    subtitle="3 new since yesterday"
                />
            </div>

            <div class="overview-grid">
                <div class="card">
                    <h3 class="card__title">"Recent Orders"</h3>
                    <ul class="order-list">
                        <For
                            each=move || orders.get()
                            key=|order: &ClientOrder| order.order_id.clone()
                            children=|order: ClientOrder| {
                                view! {
                                    <li class="order-list__item">
                                        <div>
                                            <div><strong>{format!("Order {}", order.order_id)}</strong></div>
                                            <div class="text-muted">{order.destination.clone()}</div>
                                        </div>
                                        <div class="order-list__status">
                                            <StatusBadge tone=stage_tone(order.stage) label=order.stage.display_name() />
                                            <span class="text-muted">{order.eta.clone()}</span>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>

                <div class="card">
                    <h3 class="card__title">"Quick Actions"</h3>
                    <p class="card__subtitle">"Common tasks and actions"</p>
                    <div class="quick-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=open_create>
                            {icon("plus")}
                            "Create New Order"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=open_tracking>
                            {icon("map-pin")}
                            "Track Active Deliveries"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=open_support>
                            {icon("message")}
                            "Contact Support"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=open_invoices>
                            {icon("file-text")}
                            "View Invoices"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_tones() {
        assert_eq!(stage_tone(OrderStage::Delivered), Tone::Success);
        assert_eq!(stage_tone(OrderStage::Processing), Tone::Warning);
    }
}
