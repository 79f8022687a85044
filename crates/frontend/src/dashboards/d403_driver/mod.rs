pub mod ui;

pub use ui::DriverDashboard;
