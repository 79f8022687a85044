pub mod aggregate;
pub mod fixtures;

pub use aggregate::{Personnel, PersonnelFilter, PersonnelRole, PersonnelStatus, PersonnelSummary};
pub use fixtures::personnel;
