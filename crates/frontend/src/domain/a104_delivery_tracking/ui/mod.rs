pub mod dialog;
pub mod list;

use contracts::domain::a104_delivery_tracking::{DeliveryStatus, TrackingUpdate};
use leptos::prelude::*;

use crate::shared::components::Tone;
use crate::shared::date_utils::format_datetime;

pub use dialog::TrackingDialog;
pub use list::DeliveryTrackingPanel;

pub fn delivery_status_tone(status: DeliveryStatus) -> Tone {
    match status {
        DeliveryStatus::Pending => Tone::Info,
        DeliveryStatus::InTransit => Tone::Info,
        DeliveryStatus::Delivered => Tone::Success,
        DeliveryStatus::Delayed => Tone::Warning,
        DeliveryStatus::Cancelled => Tone::Danger,
    }
}

/// Vertical list of status updates, newest first.
#[component]
pub fn TrackingTimeline(updates: Vec<TrackingUpdate>) -> impl IntoView {
    view! {
        <ol class="timeline">
            {updates
                .into_iter()
                .rev()
                .map(|update| {
                    view! {
                        <li class="timeline__item">
                            <div class="timeline__dot"></div>
                            <div class="timeline__content">
                                <div class="timeline__head">
                                    <strong>{update.status}</strong>
                                    <span class="text-muted">{format_datetime(&update.timestamp)}</span>
                                </div>
                                <p>{update.message}</p>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

/// Route progress bar with "step N of M".
#[component]
pub fn RouteProgress(current: u32, total: u32, percent: u32) -> impl IntoView {
    view! {
        <div class="route-progress">
            <div class="progress">
                <div class="progress__bar" style=format!("width: {percent}%")></div>
            </div>
            <span class="text-muted">{format!("Step {current} of {total} · {percent}%")}</span>
        </div>
    }
}
