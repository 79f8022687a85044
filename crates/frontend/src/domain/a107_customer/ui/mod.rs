pub mod orders;
pub mod profile;
pub mod tracking;

pub use orders::CustomerOrdersPanel;
pub use profile::CustomerPreferences;
pub use tracking::CustomerTrackingPanel;
