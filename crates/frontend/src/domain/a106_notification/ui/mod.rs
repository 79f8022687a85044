//! Notification feed shared by the customer and driver dashboards.
//!
//! The feed signal belongs to the dashboard, so the header bell and the
//! notifications tab see the same read state while the dashboard is mounted.

use contracts::domain::a106_notification::{Notification, NotificationFeed, NotificationKind};
use contracts::domain::common::{Choice, Coded};
use contracts::enums::view::View;
use contracts::navigation::NavigationIntent;
use leptos::prelude::*;
use thaw::*;

use crate::layout::navigation_bridge::use_navigate_with_intent;
use crate::shared::components::PageHeader;
use crate::shared::date_utils::relative_time;
use crate::shared::icons::icon;

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Delivery => "truck",
        NotificationKind::Order => "package",
        NotificationKind::Message => "message",
        NotificationKind::Feedback => "star",
        NotificationKind::System => "bell",
    }
}

/// Intent for a notification's action link, resolved against the view
/// that shows the feed.
pub fn action_intent(notification: &Notification, current: View) -> Option<NavigationIntent> {
    notification
        .action
        .as_deref()
        .map(|link| NavigationIntent::parse_link(link, current))
}

#[component]
pub fn NotificationCenter(feed: RwSignal<NotificationFeed>, current: View) -> impl IntoView {
    let go = use_navigate_with_intent();
    let kind = RwSignal::new(Choice::<NotificationKind>::All);

    let unread = move || feed.with(|f| f.unread_count());
    let visible = move || feed.with(|f| f.filtered(kind.get()));

    let filter_button = move |choice: Choice<NotificationKind>, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if kind.get() == choice {
                        "detail-tabs__item detail-tabs__item--active"
                    } else {
                        "detail-tabs__item"
                    }
                }
                on:click=move |_| kind.set(choice)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="panel">
            <PageHeader title="Notifications" icon_name="bell">
                <span class="text-muted">{move || format!("{} unread", unread())}</span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || unread() == 0)
                    on_click=move |_| feed.update(|f| f.mark_all_read())
                >
                    {icon("check")}
                    "Mark all as read"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || feed.with(|f| f.is_empty()))
                    on_click=move |_| feed.update(|f| f.clear())
                >
                    {icon("close")}
                    "Clear all"
                </Button>
            </PageHeader>

            <div class="detail-tabs">
                {filter_button(Choice::All, "All")}
                {move || {
                    feed.with(|f| f.kinds())
                        .into_iter()
                        .map(|k| filter_button(Choice::Only(k), k.display_name()))
                        .collect_view()
                }}
            </div>

            {move || {
                let items = visible();
                if items.is_empty() {
                    return view! {
                        <div class="card empty-state">
                            {icon("bell")}
                            <p>"No notifications"</p>
                        </div>
                    }
                    .into_any();
                }
                items
                    .into_iter()
                    .map(|notification| {
                        let id = notification.id.clone();
                        let intent = action_intent(&notification, current);
                        let go = go.clone();
                        let class = if notification.is_read {
                            "notification"
                        } else {
                            "notification notification--unread"
                        };
                        view! {
                            <div class=class on:click=move |_| feed.update(|f| f.mark_read(&id))>
                                <div class="notification__icon">{icon(kind_icon(notification.kind))}</div>
                                <div class="notification__body">
                                    <div class="notification__head">
                                        <strong>{notification.title.clone()}</strong>
                                        <span class="text-muted">{relative_time(&notification.timestamp)}</span>
                                    </div>
                                    <p>{notification.message.clone()}</p>
                                    {intent.map(|intent| view! {
                                        <a
                                            href="#"
                                            class="notification__action"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                go(intent.clone());
                                            }
                                        >
                                            "View details"
                                            {icon("chevron-right")}
                                        </a>
                                    })}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a106_notification::{customer_notifications, driver_notifications};
    use contracts::navigation::{initial_tab, CustomerTab, DriverTab};

    #[test]
    fn test_driver_link_opens_tab() {
        let intent = action_intent(&driver_notifications()[0], View::Driver).unwrap();
        assert_eq!(intent.target_view, View::Driver);
        assert_eq!(initial_tab::<DriverTab>(Some(&intent)), DriverTab::AvailableOrders);
    }

    #[test]
    fn test_customer_link_carries_delivery_id() {
        let intent = action_intent(&customer_notifications()[0], View::Customer).unwrap();
        assert_eq!(intent.target_view, View::Customer);
        assert_eq!(initial_tab::<CustomerTab>(Some(&intent)), CustomerTab::Tracking);
        assert_eq!(intent.target_path.as_deref(), Some("DEL001"));
    }

    #[test]
    fn test_unknown_link_tab_falls_back() {
        // "/driver/messages" has no matching tab
        let intent = action_intent(&driver_notifications()[2], View::Driver).unwrap();
        assert_eq!(initial_tab::<DriverTab>(Some(&intent)), DriverTab::Dashboard);
    }
}
