pub mod center;
pub mod support;

pub use center::MessageCenter;
pub use support::SupportDialog;
