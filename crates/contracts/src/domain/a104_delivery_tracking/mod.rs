pub mod aggregate;
pub mod fixtures;

pub use aggregate::{
    DeliveryStatus, DeliveryTracking, DriverContact, GeoPoint, TrackingFilter, TrackingRoute,
    TrackingUpdate,
};
pub use fixtures::tracking_data;
