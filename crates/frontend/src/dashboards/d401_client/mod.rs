pub mod ui;

pub use ui::ClientDashboard;
