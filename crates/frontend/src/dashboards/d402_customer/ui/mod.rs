mod contact;
mod dashboard;

pub use dashboard::CustomerDashboard;
