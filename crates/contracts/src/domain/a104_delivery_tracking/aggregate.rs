use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::domain::common::{matches_any, Choice, Searchable};

coded_enum! {
    /// Статус доставки с точки зрения отправителя и получателя
    pub enum DeliveryStatus {
        Pending => ("pending", "Pending"),
        InTransit => ("in-transit", "In Transit"),
        Delivered => ("delivered", "Delivered"),
        Delayed => ("delayed", "Delayed"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

impl DeliveryStatus {
    /// Доставка ещё в пути (её показывают в "активных")
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            DeliveryStatus::Pending | DeliveryStatus::InTransit | DeliveryStatus::Delayed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverContact {
    pub id: String,
    pub name: String,
    pub phone: String,
}

impl DriverContact {
    /// Инициалы для аватара
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRoute {
    pub origin: String,
    pub destination: String,
    #[serde(rename = "currentStep")]
    pub current_step: u32,
    #[serde(rename = "totalSteps")]
    pub total_steps: u32,
    /// мили
    #[serde(rename = "distanceRemaining")]
    pub distance_remaining: f64,
    /// минуты; статическое значение, не таймер
    #[serde(rename = "timeRemaining")]
    pub time_remaining: u32,
}

impl TrackingRoute {
    /// Прогресс маршрута, 0..=100
    pub fn progress_percent(&self) -> u32 {
        if self.total_steps == 0 {
            return 0;
        }
        (self.current_step.min(self.total_steps) * 100) / self.total_steps
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingUpdate {
    pub timestamp: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTracking {
    pub id: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub status: DeliveryStatus,
    #[serde(rename = "estimatedDelivery")]
    pub estimated_delivery: String,
    #[serde(rename = "actualDelivery")]
    pub actual_delivery: Option<String>,
    pub location: GeoPoint,
    pub driver: DriverContact,
    pub route: TrackingRoute,
    pub updates: Vec<TrackingUpdate>,
}

impl Searchable for DeliveryTracking {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            &[&self.id, &self.order_id, &self.route.destination, &self.driver.name],
            filter,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingFilter {
    pub query: String,
    pub status: Choice<DeliveryStatus>,
}

impl TrackingFilter {
    pub fn matches(&self, tracking: &DeliveryTracking) -> bool {
        tracking.matches_filter(&self.query) && self.status.matches(tracking.status)
    }

    pub fn apply<'a>(&self, items: &'a [DeliveryTracking]) -> Vec<&'a DeliveryTracking> {
        items.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a104_delivery_tracking::tracking_data;

    #[test]
    fn test_progress() {
        let route = &tracking_data()[0].route;
        assert_eq!(route.progress_percent(), 60);

        let empty = TrackingRoute {
            total_steps: 0,
            ..route.clone()
        };
        assert_eq!(empty.progress_percent(), 0);
    }

    #[test]
    fn test_search_by_recipient_address() {
        let filter = TrackingFilter {
            query: "seattle".into(),
            status: Choice::All,
        };
        let found = filter.apply(tracking_data());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "TRK004");
    }

    #[test]
    fn test_delivered_is_not_active() {
        assert!(!DeliveryStatus::Delivered.is_active());
        assert!(DeliveryStatus::Delayed.is_active());
    }

    #[test]
    fn test_initials() {
        assert_eq!(tracking_data()[0].driver.initials(), "JS");
    }
}
