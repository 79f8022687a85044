use once_cell::sync::Lazy;

use super::aggregate::{Notification, NotificationKind};

#[allow(clippy::too_many_arguments)]
fn notification(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    timestamp: &str,
    is_read: bool,
    related_id: Option<&str>,
    action: &str,
) -> Notification {
    Notification {
        id: id.into(),
        kind,
        title: title.into(),
        message: message.into(),
        timestamp: timestamp.into(),
        is_read,
        related_id: related_id.map(str::to_string),
        action: Some(action.into()),
    }
}

static CLIENT: Lazy<Vec<Notification>> = Lazy::new(|| {
    use NotificationKind::*;
    vec![
        notification("NOTIF001", Message, "New Message", "You have a new message regarding order #4392", "2023-12-15T12:30:00", false, None, "/client/communication"),
        notification("NOTIF002", Delivery, "Delivery Update", "Your delivery #4389 has been delayed", "2023-12-15T11:30:00", true, None, "/client/tracking"),
        notification("NOTIF003", Delivery, "Delivery Completed", "Your delivery #4390 has been completed", "2023-12-14T15:45:00", true, None, "/client/tracking"),
        notification("NOTIF004", Order, "Order Processed", "Your order #4391 has been processed", "2023-12-15T09:30:00", true, None, "/client/orders"),
        notification("NOTIF005", Feedback, "Feedback Request", "Please provide feedback for your delivery #4388", "2023-12-14T14:00:00", true, None, "/client/communication"),
    ]
});

static CUSTOMER: Lazy<Vec<Notification>> = Lazy::new(|| {
    use NotificationKind::*;
    vec![
        notification("NOTIF001", Delivery, "Package Out for Delivery", "Your package #4392 is out for delivery and will arrive today between 2:00 PM and 4:00 PM.", "2023-12-15T11:15:00", false, Some("DEL001"), "/tracking/DEL001"),
        notification("NOTIF002", Delivery, "Delivery Delayed", "Your delivery #4389 is experiencing delays due to heavy traffic. New ETA: 2:15 PM.", "2023-12-15T11:30:00", true, Some("DEL004"), "/tracking/DEL004"),
        notification("NOTIF003", Delivery, "Package Delivered", "Your package #4390 has been delivered. Thank you for choosing our service!", "2023-12-14T15:45:00", true, Some("DEL003"), "/tracking/DEL003"),
        notification("NOTIF004", Message, "New Message from Driver", "I'm about 30 minutes away now. Will deliver to Robert if you're not home.", "2023-12-15T12:30:00", false, Some("DEL001"), "/messages/CONV001"),
        notification("NOTIF005", System, "Order Processed", "Your order #4391 has been processed and is scheduled for delivery tomorrow.", "2023-12-15T09:30:00", true, Some("DEL002"), "/tracking/DEL002"),
    ]
});

static DRIVER: Lazy<Vec<Notification>> = Lazy::new(|| {
    use NotificationKind::*;
    vec![
        notification("DN001", Order, "New Order Available", "There's a new high-priority delivery available near your location. Tap to view details.", "2023-12-15T12:15:00", false, Some("AO002"), "/driver/available-orders"),
        notification("DN002", Order, "Delivery Update", "Your current delivery's ETA has been updated due to traffic conditions.", "2023-12-15T11:45:00", true, Some("DD001"), "/driver/active-delivery"),
        notification("DN003", Message, "New Message from Customer", "Alex Johnson: Please leave the package with the doorman if I'm not home.", "2023-12-15T11:10:00", true, Some("DD001"), "/driver/messages"),
        notification("DN004", System, "Earnings Update", "Your earnings for yesterday have been processed. Total: $85.50", "2023-12-15T08:30:00", true, None, "/driver/earnings"),
        notification("DN005", System, "Schedule Reminder", "You're scheduled to work tomorrow from 8:00 AM to 6:00 PM.", "2023-12-15T07:00:00", false, None, "/driver/schedule"),
    ]
});

pub fn client_notifications() -> &'static [Notification] {
    &CLIENT
}

pub fn customer_notifications() -> &'static [Notification] {
    &CUSTOMER
}

pub fn driver_notifications() -> &'static [Notification] {
    &DRIVER
}
