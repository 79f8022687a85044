pub mod assignment;

pub use assignment::DriverAssignment;
