pub mod aggregate;
pub mod fixtures;

pub use aggregate::{Assignment, DispatchBoard, DispatchDriver, DispatchError, PendingOrder};
pub use fixtures::{dispatch_drivers, pending_orders};
