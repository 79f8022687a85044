pub mod aggregate;
pub mod fixtures;

pub use aggregate::{Vehicle, VehicleFilter, VehicleStatus};
pub use fixtures::vehicles;
