pub mod aggregate;
pub mod fixtures;

pub use aggregate::{
    CustomerDelivery, CustomerDeliveryFilter, CustomerProfile, DeliveryPreferences, LineItem,
    NotificationPreferences, focused_delivery,
};
pub use fixtures::{customer_deliveries, customer_profile};
