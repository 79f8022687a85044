pub mod ui;

pub use ui::AdminDashboard;
