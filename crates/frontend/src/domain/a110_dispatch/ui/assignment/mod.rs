use contracts::domain::a108_driver::DriverAvailability;
use contracts::domain::a110_dispatch::{DispatchBoard, DispatchDriver, PendingOrder};
use contracts::domain::common::{Coded, Searchable};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a108_driver::ui::priority_tone;
use crate::shared::components::{DialogFooter, DialogHeader, StatusBadge, Tone};
use crate::shared::date_utils::format_time;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;

/// Result line shown under the lists after an assignment attempt
#[derive(Clone, Debug, PartialEq)]
enum Outcome {
    Assigned(String),
    Failed(String),
}

fn availability_tone(status: DriverAvailability) -> Tone {
    match status {
        DriverAvailability::Available => Tone::Success,
        DriverAvailability::Busy => Tone::Warning,
        DriverAvailability::Offline => Tone::Neutral,
    }
}

/// Диалог назначения: слева очередь заказов, справа свободные водители.
#[component]
pub fn DriverAssignment(board: RwSignal<DispatchBoard>, handle: ModalHandle) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let selected_order = RwSignal::new(board.with_untracked(|b| b.orders.first().map(|o| o.id.clone())));
    let selected_driver = RwSignal::new(None::<String>);
    let outcome = RwSignal::new(None::<Outcome>);

    let orders = move || {
        let q = query.get();
        board.with(|b| {
            b.orders
                .iter()
                .filter(|o| o.matches_filter(&q))
                .cloned()
                .collect::<Vec<PendingOrder>>()
        })
    };
    let drivers = move || board.with(|b| b.drivers.clone());

    let assign = move |_| {
        let (Some(order_id), Some(driver_id)) = (selected_order.get(), selected_driver.get()) else {
            return;
        };
        let result = board.try_update(|b| b.assign(&order_id, &driver_id));
        match result {
            Some(Ok(assignment)) => {
                log::info!(
                    "order {} assigned to {}",
                    assignment.order_id,
                    assignment.driver_name
                );
                outcome.set(Some(Outcome::Assigned(format!(
                    "Order {} assigned to {}",
                    assignment.order_id, assignment.driver_name
                ))));
                selected_driver.set(None);
                selected_order.set(board.with_untracked(|b| b.orders.first().map(|o| o.id.clone())));
            }
            Some(Err(err)) => {
                log::warn!("assignment rejected: {err}");
                outcome.set(Some(Outcome::Failed(err.to_string())));
            }
            None => {}
        }
    };

    let can_assign = move || selected_order.get().is_some() && selected_driver.get().is_some();

    view! {
        <DialogHeader
            title="Driver Assignment"
            subtitle="Assign pending orders to available drivers"
            handle=handle
        />
        <div class="modal-body assignment">
            <div class="assignment__column">
                <h4>"Pending Orders"</h4>
                <Input value=query placeholder="Search orders..." />
                <div class="assignment__list">
                    {move || {
                        let orders = orders();
                        if orders.is_empty() {
                            return view! { <p class="text-muted">"No pending orders"</p> }.into_any();
                        }
                        orders
                            .into_iter()
                            .map(|order| {
                                let id = order.id.clone();
                                let id_for_click = id.clone();
                                view! {
                                    <div
                                        class=move || {
                                            if selected_order.get().as_deref() == Some(id.as_str()) {
                                                "assignment__item assignment__item--selected"
                                            } else {
                                                "assignment__item"
                                            }
                                        }
                                        on:click=move |_| selected_order.set(Some(id_for_click.clone()))
                                    >
                                        <div class="assignment__item-head">
                                            <strong>{order.order_id.clone()}</strong>
                                            <StatusBadge
                                                tone=priority_tone(order.priority)
                                                label=order.priority.display_name()
                                            />
                                        </div>
                                        <div>{order.client_name.clone()}</div>
                                        <div class="text-muted">
                                            {icon("map-pin")}
                                            {format!("{} → {}", order.pickup, order.delivery)}
                                        </div>
                                        <div class="text-muted">
                                            {icon("clock")}
                                            {format!("{} · {}", format_time(&order.created_at), order.package)}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>

            <div class="assignment__column">
                <h4>"Drivers"</h4>
                <div class="assignment__list">
                    {move || {
                        drivers()
                            .into_iter()
                            .map(|driver: DispatchDriver| {
                                let id = driver.id.clone();
                                let id_for_click = id.clone();
                                let available = driver.status == DriverAvailability::Available;
                                view! {
                                    <div
                                        class=move || {
                                            let mut class = String::from("assignment__item");
                                            if selected_driver.get().as_deref() == Some(id.as_str()) {
                                                class.push_str(" assignment__item--selected");
                                            }
                                            if !available {
                                                class.push_str(" assignment__item--disabled");
                                            }
                                            class
                                        }
                                        on:click=move |_| {
                                            if available {
                                                selected_driver.set(Some(id_for_click.clone()));
                                            }
                                        }
                                    >
                                        <div class="assignment__item-head">
                                            <strong>{driver.name.clone()}</strong>
                                            <StatusBadge
                                                tone=availability_tone(driver.status)
                                                label=driver.status.display_name()
                                            />
                                        </div>
                                        <div class="text-muted">{driver.vehicle.clone()}</div>
                                        <div class="text-muted">
                                            {icon("map-pin")}
                                            {driver.location.clone()}
                                        </div>
                                        <div class="text-muted">
                                            {icon("star")}
                                            {format!(
                                                "{:.1} · {} active · {} today",
                                                driver.rating,
                                                driver.active_deliveries,
                                                driver.completed_today,
                                            )}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>

        {move || outcome.get().map(|outcome| match outcome {
            Outcome::Assigned(text) => view! {
                <MessageBar intent=MessageBarIntent::Success>
                    <MessageBarBody>{text}</MessageBarBody>
                </MessageBar>
            }
            .into_any(),
            Outcome::Failed(text) => view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{text}</MessageBarBody>
                </MessageBar>
            }
            .into_any(),
        })}

        <DialogFooter>
            <Button on_click=move |_| handle.close()>"Close"</Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || !can_assign())
                on_click=assign
            >
                "Assign Driver"
            </Button>
        </DialogFooter>
    }
}
