pub mod aggregate;
pub mod fixtures;

pub use aggregate::{
    active_delivery, AvailableOrder, AvailableOrderFilter, DistanceLimit, DriverAvailability,
    DriverDelivery, DriverDeliveryFilter, DriverDeliveryStatus, DriverProfile, DriverStats,
    DriverVehicle, Earnings, OrderPriority, PackageDetails, PeriodStats, Stop,
};
pub use fixtures::{available_orders, driver_deliveries, driver_profile, driver_stats};
