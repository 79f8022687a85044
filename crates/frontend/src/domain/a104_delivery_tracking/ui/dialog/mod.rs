use contracts::domain::a104_delivery_tracking::tracking_data;
use contracts::domain::common::Coded;
use contracts::navigation::{ClientTab, NavigationIntent};
use leptos::prelude::*;
use thaw::*;

use super::{delivery_status_tone, RouteProgress, TrackingTimeline};
use crate::layout::navigation_bridge::use_navigate_with_intent;
use crate::shared::components::{DialogFooter, DialogHeader, StatusBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;

/// Quick look at the current delivery; the full view lives on the Tracking tab.
#[component]
pub fn TrackingDialog(handle: ModalHandle) -> impl IntoView {
    let go = use_navigate_with_intent();

    let Some(delivery) = tracking_data().first().cloned() else {
        return view! {
            <DialogHeader title="Delivery Tracking" handle=handle />
            <div class="modal-body">
                <p class="text-muted">"No active deliveries"</p>
            </div>
        }
        .into_any();
    };

    let target = delivery.id.clone();
    let view_full = move |_| {
        go(NavigationIntent::to_tab(ClientTab::Tracking).with_path(target.clone()));
    };
    let latest: Vec<_> = delivery.updates.iter().rev().take(3).rev().cloned().collect();

    view! {
        <DialogHeader
            title="Delivery Tracking"
            subtitle=format!("Order {} · {}", delivery.order_id, delivery.id)
            handle=handle
        />
        <div class="modal-body">
            <div class="tracking-summary">
                <StatusBadge
                    tone=delivery_status_tone(delivery.status)
                    label=delivery.status.display_name()
                />
                <span>
                    {icon("clock")}
                    {format!("ETA {}", format_datetime(&delivery.estimated_delivery))}
                </span>
            </div>
            <div class="tracking-route">
                <div>{icon("package")}{delivery.route.origin.clone()}</div>
                <div>{icon("map-pin")}{delivery.route.destination.clone()}</div>
            </div>
            <RouteProgress
                current=delivery.route.current_step
                total=delivery.route.total_steps
                percent=delivery.route.progress_percent()
            />
            <div class="tracking-driver">
                <span class="avatar">{delivery.driver.initials()}</span>
                <div>
                    <div>{delivery.driver.name.clone()}</div>
                    <div class="text-muted">{icon("phone")}{delivery.driver.phone.clone()}</div>
                </div>
            </div>
            <TrackingTimeline updates=latest />
        </div>
        <DialogFooter>
            <Button on_click=move |_| handle.close()>"Close"</Button>
            <Button appearance=ButtonAppearance::Primary on_click=view_full>
                "View Full Tracking"
            </Button>
        </DialogFooter>
    }
    .into_any()
}
