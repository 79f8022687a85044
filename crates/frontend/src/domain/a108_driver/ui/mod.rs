pub mod active;
pub mod available;
pub mod history;
pub mod profile;

use contracts::domain::a108_driver::{DriverDeliveryStatus, OrderPriority};

use crate::shared::components::Tone;

pub use active::ActiveDeliveryPanel;
pub use available::AvailableOrdersPanel;
pub use history::DeliveryHistoryPanel;
pub use profile::DriverProfilePanel;

pub fn priority_tone(priority: OrderPriority) -> Tone {
    match priority {
        OrderPriority::Express => Tone::Danger,
        OrderPriority::High => Tone::Warning,
        OrderPriority::Normal => Tone::Neutral,
    }
}

pub fn driver_status_tone(status: DriverDeliveryStatus) -> Tone {
    match status {
        DriverDeliveryStatus::Accepted | DriverDeliveryStatus::InTransit => Tone::Info,
        DriverDeliveryStatus::PickedUp => Tone::Warning,
        DriverDeliveryStatus::Delivered => Tone::Success,
        DriverDeliveryStatus::Cancelled => Tone::Danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tones() {
        assert_eq!(priority_tone(OrderPriority::Express), Tone::Danger);
        assert_eq!(priority_tone(OrderPriority::Normal), Tone::Neutral);
        assert_eq!(driver_status_tone(DriverDeliveryStatus::Delivered), Tone::Success);
        assert_eq!(driver_status_tone(DriverDeliveryStatus::Cancelled), Tone::Danger);
    }
}
