pub mod common;

pub mod a101_vehicle;
pub mod a102_personnel;
pub mod a103_invoice;
pub mod a104_delivery_tracking;
pub mod a105_conversation;
pub mod a106_notification;
pub mod a107_customer;
pub mod a108_driver;
pub mod a109_analytics;
pub mod a110_dispatch;
pub mod a111_client_order;
