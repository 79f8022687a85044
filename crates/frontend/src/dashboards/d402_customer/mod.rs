pub mod ui;

pub use ui::CustomerDashboard;
