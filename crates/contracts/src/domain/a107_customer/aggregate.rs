use serde::{Deserialize, Serialize};

use crate::domain::a104_delivery_tracking::{DeliveryStatus, DriverContact, TrackingUpdate};
use crate::domain::common::{matches_any, Choice, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliveryPreferences {
    #[serde(rename = "leaveAtDoor")]
    pub leave_at_door: bool,
    #[serde(rename = "requireSignature")]
    pub require_signature: bool,
    #[serde(rename = "allowNeighborDelivery")]
    pub allow_neighbor_delivery: bool,
    #[serde(rename = "specialInstructions")]
    pub special_instructions: String,
}

/// Профиль получателя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub notifications: NotificationPreferences,
    pub delivery: DeliveryPreferences,
}

impl CustomerProfile {
    pub fn full_address(&self) -> String {
        format!("{}, {}, {} {}", self.address, self.city, self.state, self.zip)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Доставка глазами получателя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDelivery {
    pub id: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub status: DeliveryStatus,
    #[serde(rename = "estimatedDelivery")]
    pub estimated_delivery: String,
    #[serde(rename = "actualDelivery")]
    pub actual_delivery: Option<String>,
    #[serde(rename = "trackingNumber")]
    pub tracking_number: String,
    pub origin: String,
    pub destination: String,
    pub items: Vec<LineItem>,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
    pub driver: Option<DriverContact>,
    pub updates: Vec<TrackingUpdate>,
}

impl CustomerDelivery {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Последнее событие доставки
    pub fn latest_update(&self) -> Option<&TrackingUpdate> {
        self.updates.last()
    }
}

impl Searchable for CustomerDelivery {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(&[&self.order_id, &self.tracking_number], filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDeliveryFilter {
    pub query: String,
    pub status: Choice<DeliveryStatus>,
}

impl CustomerDeliveryFilter {
    pub fn matches(&self, delivery: &CustomerDelivery) -> bool {
        delivery.matches_filter(&self.query) && self.status.matches(delivery.status)
    }

    pub fn apply<'a>(&self, items: &'a [CustomerDelivery]) -> Vec<&'a CustomerDelivery> {
        items.iter().filter(|d| self.matches(d)).collect()
    }
}

/// Доставка для панели отслеживания: запрошенная по id, иначе первая активная, иначе первая
pub fn focused_delivery<'a>(items: &'a [CustomerDelivery], focus: Option<&str>) -> Option<&'a CustomerDelivery> {
    focus
        .and_then(|id| items.iter().find(|d| d.id == id))
        .or_else(|| items.iter().find(|d| d.status.is_active()))
        .or_else(|| items.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a107_customer::customer_deliveries;

    #[test]
    fn test_search_by_tracking_number() {
        let filter = CustomerDeliveryFilter {
            query: "dss4390".into(),
            status: Choice::All,
        };
        let found = filter.apply(customer_deliveries());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "DEL003");
    }

    #[test]
    fn test_status_filter() {
        let filter = CustomerDeliveryFilter {
            query: String::new(),
            status: Choice::Only(DeliveryStatus::Delivered),
        };
        assert_eq!(filter.apply(customer_deliveries()).len(), 2);
    }

    #[test]
    fn test_focused_delivery() {
        let items = customer_deliveries();
        assert_eq!(focused_delivery(items, Some("DEL004")).map(|d| d.id.as_str()), Some("DEL004"));
        // Неизвестный id: первая активная доставка
        assert_eq!(focused_delivery(items, Some("NOPE")).map(|d| d.id.as_str()), Some("DEL001"));
        assert_eq!(focused_delivery(items, None).map(|d| d.id.as_str()), Some("DEL001"));
        assert!(focused_delivery(&[], None).is_none());
    }

    #[test]
    fn test_item_count() {
        assert_eq!(customer_deliveries()[0].item_count(), 3);
    }
}
