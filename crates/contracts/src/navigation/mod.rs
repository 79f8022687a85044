//! Навигация между представлениями: намерение (intent), одноразовый слот
//! для его передачи через переход маршрута и перечисления вкладок дашбордов.

pub mod error;
pub mod intent;
pub mod tabs;

pub use error::NavigationError;
pub use intent::{NavigationIntent, PendingIntent};
pub use tabs::{initial_tab, AdminTab, ClientTab, CustomerTab, DashboardTab, DriverTab};
