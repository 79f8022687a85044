mod dashboard;
mod overview;
mod settings;

pub use dashboard::AdminDashboard;
