use contracts::domain::a104_delivery_tracking::{
    tracking_data, DeliveryStatus, DeliveryTracking, TrackingFilter,
};
use contracts::domain::common::{Choice, Coded};
use contracts::navigation::ClientTab;
use leptos::prelude::*;
use thaw::*;

use super::{delivery_status_tone, RouteProgress, TrackingTimeline};
use crate::layout::dashboard::use_shell;
use crate::shared::components::{all_choice, choice_options, PageHeader, StatusBadge};
use crate::shared::date_utils::{format_datetime, relative_time};
use crate::shared::icons::icon;

/// Focused id if it names a known delivery, else the first one.
fn initial_selection(items: &[DeliveryTracking], focus: Option<&str>) -> Option<String> {
    focus
        .and_then(|id| items.iter().find(|d| d.id == id || d.order_id == id))
        .or_else(|| items.first())
        .map(|d| d.id.clone())
}

/// Client tracking tab: searchable delivery list and the selected delivery.
#[component]
pub fn DeliveryTrackingPanel() -> impl IntoView {
    let shell = use_shell::<ClientTab>();
    let items = tracking_data();

    let query = RwSignal::new(String::new());
    let status = all_choice::<DeliveryStatus>();
    let selected = RwSignal::new(initial_selection(
        items,
        shell.focus.get_untracked().as_deref(),
    ));

    // Повторный интент на уже открытую вкладку тоже переводит фокус
    Effect::new(move |_| {
        if let Some(focus) = shell.focus.get() {
            if let Some(id) = initial_selection(items, Some(&focus)) {
                selected.set(Some(id));
            }
        }
    });

    let filtered = Memo::new(move |_| {
        TrackingFilter {
            query: query.get(),
            status: Choice::from_code(&status.get()),
        }
        .apply(items)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>()
    });

    let current = move || {
        let id = selected.get()?;
        items.iter().find(|d| d.id == id).cloned()
    };

    view! {
        <div class="panel">
            <PageHeader title="Delivery Tracking" subtitle="Track the real-time status of your deliveries" />

            <div class="filter-bar">
                <Input value=query placeholder="Search by tracking number, order ID or recipient..." />
                <Select value=status>
                    {choice_options::<DeliveryStatus>("All Statuses")}
                </Select>
            </div>

            <div class="split-view">
                <div class="split-view__list">
                    {move || {
                        let rows = filtered.get();
                        if rows.is_empty() {
                            return view! { <p class="text-muted">"No deliveries found"</p> }.into_any();
                        }
                        rows.into_iter()
                            .map(|delivery| {
                                let id = delivery.id.clone();
                                let id_for_click = id.clone();
                                view! {
                                    <div
                                        class=move || {
                                            if selected.get().as_deref() == Some(id.as_str()) {
                                                "list-card list-card--selected"
                                            } else {
                                                "list-card"
                                            }
                                        }
                                        on:click=move |_| selected.set(Some(id_for_click.clone()))
                                    >
                                        <div class="list-card__head">
                                            <strong>{delivery.id.clone()}</strong>
                                            <StatusBadge
                                                tone=delivery_status_tone(delivery.status)
                                                label=delivery.status.display_name()
                                            />
                                        </div>
                                        <div>{format!("Order {}", delivery.order_id)}</div>
                                        <div class="text-muted">{delivery.route.destination.clone()}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>

                <div class="split-view__detail">
                    {move || match current() {
                        None => view! {
                            <div class="card empty-state">
                                {icon("package")}
                                <p>"Select a delivery to see its details"</p>
                            </div>
                        }
                        .into_any(),
                        Some(delivery) => view! {
                            <div class="card">
                                <div class="card__head">
                                    <h3 class="card__title">{format!("Tracking {}", delivery.id)}</h3>
                                    <StatusBadge
                                        tone=delivery_status_tone(delivery.status)
                                        label=delivery.status.display_name()
                                    />
                                </div>
                                <div class="details-grid">
                                    <div class="form__group">
                                        <span class="form__label">"Order"</span>
                                        <span>{delivery.order_id.clone()}</span>
                                    </div>
                                    <div class="form__group">
                                        <span class="form__label">"Estimated Delivery"</span>
                                        <span>{format_datetime(&delivery.estimated_delivery)}</span>
                                    </div>
                                    <div class="form__group">
                                        <span class="form__label">"From"</span>
                                        <span>{delivery.route.origin.clone()}</span>
                                    </div>
                                    <div class="form__group">
                                        <span class="form__label">"To"</span>
                                        <span>{delivery.route.destination.clone()}</span>
                                    </div>
                                    <div class="form__group">
                                        <span class="form__label">"Driver"</span>
                                        <span>{format!("{} · {}", delivery.driver.name, delivery.driver.phone)}</span>
                                    </div>
                                    <div class="form__group">
                                        <span class="form__label">"Remaining"</span>
                                        <span>
                                            {format!(
                                                "{:.1} mi · {} min",
                                                delivery.route.distance_remaining,
                                                delivery.route.time_remaining,
                                            )}
                                        </span>
                                    </div>
                                </div>
                                <RouteProgress
                                    current=delivery.route.current_step
                                    total=delivery.route.total_steps
                                    percent=delivery.route.progress_percent()
                                />
                                <div class="map-placeholder">
                                    {icon("map-pin")}
                                    <span>{delivery.location.address.clone()}</span>
                                    <span class="text-muted">
                                        {format!(
                                            "{:.4}, {:.4} · updated {}",
                                            delivery.location.latitude,
                                            delivery.location.longitude,
                                            relative_time(&delivery.location.last_updated),
                                        )}
                                    </span>
                                </div>
                                <h4>"Delivery Timeline"</h4>
                                <TrackingTimeline updates=delivery.updates.clone() />
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_selects_matching_delivery() {
        let items = tracking_data();
        assert_eq!(initial_selection(items, Some("TRK003")).as_deref(), Some("TRK003"));
        assert_eq!(initial_selection(items, Some("#4391")).as_deref(), Some("TRK002"));
    }

    #[test]
    fn test_unknown_focus_falls_back_to_first() {
        let items = tracking_data();
        assert_eq!(initial_selection(items, Some("TRK999")).as_deref(), Some("TRK001"));
        assert_eq!(initial_selection(items, None).as_deref(), Some("TRK001"));
        assert_eq!(initial_selection(&[], None), None);
    }
}
