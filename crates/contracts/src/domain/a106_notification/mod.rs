pub mod aggregate;
pub mod fixtures;

pub use aggregate::{Notification, NotificationFeed, NotificationKind};
pub use fixtures::{client_notifications, customer_notifications, driver_notifications};
