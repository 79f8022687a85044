mod dashboard;
mod header;
mod overview;

pub use dashboard::DriverDashboard;
