use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::domain::common::{matches_any, Choice, Searchable};

coded_enum! {
    pub enum DriverAvailability {
        Available => ("available", "Available"),
        Busy => ("busy", "Busy"),
        Offline => ("offline", "Offline"),
    }
}

coded_enum! {
    pub enum OrderPriority {
        Express => ("express", "Express"),
        High => ("high", "High Priority"),
        Normal => ("normal", "Normal"),
    }
}

coded_enum! {
    /// Ограничение расстояния в фильтре доступных заказов, мили
    pub enum DistanceLimit {
        One => ("1", "Within 1 mile"),
        Three => ("3", "Within 3 miles"),
        Five => ("5", "Within 5 miles"),
        Ten => ("10", "Within 10 miles"),
    }
}

impl DistanceLimit {
    pub fn miles(&self) -> f64 {
        match self {
            DistanceLimit::One => 1.0,
            DistanceLimit::Three => 3.0,
            DistanceLimit::Five => 5.0,
            DistanceLimit::Ten => 10.0,
        }
    }
}

coded_enum! {
    pub enum DriverDeliveryStatus {
        Accepted => ("accepted", "Accepted"),
        PickedUp => ("picked-up", "Picked Up"),
        InTransit => ("in-transit", "In Transit"),
        Delivered => ("delivered", "Delivered"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

impl DriverDeliveryStatus {
    /// Следующий шаг доставки для кнопки действия
    pub fn next(&self) -> Option<Self> {
        match self {
            DriverDeliveryStatus::Accepted => Some(DriverDeliveryStatus::PickedUp),
            DriverDeliveryStatus::PickedUp => Some(DriverDeliveryStatus::InTransit),
            DriverDeliveryStatus::InTransit => Some(DriverDeliveryStatus::Delivered),
            DriverDeliveryStatus::Delivered | DriverDeliveryStatus::Cancelled => None,
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            DriverDeliveryStatus::Accepted => "Mark as Picked Up",
            DriverDeliveryStatus::PickedUp => "Start Delivery",
            DriverDeliveryStatus::InTransit => "Complete Delivery",
            DriverDeliveryStatus::Delivered | DriverDeliveryStatus::Cancelled => "",
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            DriverDeliveryStatus::PickedUp | DriverDeliveryStatus::InTransit
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverVehicle {
    pub id: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    #[serde(rename = "licensePlate")]
    pub license_plate: String,
    pub model: String,
    pub color: String,
}

/// Профиль водителя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: DriverAvailability,
    pub address: String,
    pub vehicle: DriverVehicle,
    pub rating: f32,
    #[serde(rename = "totalDeliveries")]
    pub total_deliveries: u32,
    #[serde(rename = "workingHours")]
    pub working_hours: (String, String),
    #[serde(rename = "maxDistance")]
    pub max_distance: u32,
    #[serde(rename = "preferredZones")]
    pub preferred_zones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDetails {
    pub size: String,
    pub weight: f64,
    pub quantity: u32,
    pub description: String,
}

impl PackageDetails {
    pub fn summary(&self) -> String {
        format!("{} · {:.1} lbs · {} pcs", self.size, self.weight, self.quantity)
    }
}

/// Точка забора или доставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub address: String,
    #[serde(rename = "contactName")]
    pub contact_name: Option<String>,
    #[serde(rename = "contactPhone")]
    pub contact_phone: Option<String>,
    pub instructions: Option<String>,
}

/// Заказ, доступный для принятия водителем
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableOrder {
    pub id: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub pickup: String,
    pub delivery: String,
    /// мили
    pub distance: f64,
    /// минуты
    #[serde(rename = "estimatedTime")]
    pub estimated_time: u32,
    #[serde(rename = "estimatedEarnings")]
    pub estimated_earnings: f64,
    pub package: PackageDetails,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: String,
    pub priority: OrderPriority,
}

impl Searchable for AvailableOrder {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(&[&self.order_id, &self.delivery], filter)
    }
}

/// Поиск И расстояние И приоритет
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailableOrderFilter {
    pub query: String,
    pub distance: Choice<DistanceLimit>,
    pub priority: Choice<OrderPriority>,
}

impl AvailableOrderFilter {
    pub fn matches(&self, order: &AvailableOrder) -> bool {
        let within = match self.distance {
            Choice::All => true,
            Choice::Only(limit) => order.distance <= limit.miles(),
        };
        order.matches_filter(&self.query) && within && self.priority.matches(order.priority)
    }

    pub fn apply<'a>(&self, items: &'a [AvailableOrder]) -> Vec<&'a AvailableOrder> {
        items.iter().filter(|o| self.matches(o)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Earnings {
    pub base: f64,
    pub tips: f64,
    pub bonus: f64,
    pub total: f64,
}

/// Доставка водителя (текущая и история)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverDelivery {
    pub id: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub status: DriverDeliveryStatus,
    #[serde(rename = "clientName")]
    pub client_name: String,
    #[serde(rename = "clientPhone")]
    pub client_phone: String,
    pub pickup: Stop,
    pub dropoff: Stop,
    pub package: PackageDetails,
    /// Время принятия заказа и последнего изменения статуса
    pub accepted: String,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<String>,
    /// мили
    pub distance: f64,
    #[serde(rename = "estimatedTime")]
    pub estimated_time: u32,
    #[serde(rename = "currentStep")]
    pub current_step: u32,
    #[serde(rename = "totalSteps")]
    pub total_steps: u32,
    pub earnings: Earnings,
    pub notes: Option<String>,
}

impl Searchable for DriverDelivery {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(&[&self.order_id, &self.dropoff.address], filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverDeliveryFilter {
    pub query: String,
    pub status: Choice<DriverDeliveryStatus>,
}

impl DriverDeliveryFilter {
    pub fn matches(&self, delivery: &DriverDelivery) -> bool {
        delivery.matches_filter(&self.query) && self.status.matches(delivery.status)
    }

    pub fn apply<'a>(&self, items: &'a [DriverDelivery]) -> Vec<&'a DriverDelivery> {
        items.iter().filter(|d| self.matches(d)).collect()
    }
}

/// Текущая доставка: первая в пути или забранная, иначе первая в списке
pub fn active_delivery(items: &[DriverDelivery]) -> Option<&DriverDelivery> {
    items
        .iter()
        .find(|d| d.status.is_in_progress())
        .or_else(|| items.first())
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodStats {
    pub deliveries: u32,
    pub earnings: f64,
    pub distance: f64,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DriverStats {
    pub today: PeriodStats,
    pub weekly: PeriodStats,
    pub monthly: PeriodStats,
    #[serde(rename = "ratingAverage")]
    pub rating_average: f32,
    #[serde(rename = "ratingCount")]
    pub rating_count: u32,
    /// Количество оценок 5..=1 (индекс 0 - пятёрки)
    #[serde(rename = "ratingBreakdown")]
    pub rating_breakdown: [u32; 5],
}

impl DriverStats {
    /// Доля оценок `stars` в процентах
    pub fn rating_share(&self, stars: u8) -> u32 {
        if !(1..=5).contains(&stars) || self.rating_count == 0 {
            return 0;
        }
        let count = self.rating_breakdown[(5 - stars) as usize];
        ((count as f64 / self.rating_count as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a108_driver::{available_orders, driver_deliveries, driver_stats};

    fn ids<T, F: Fn(&T) -> &str>(items: Vec<&T>, f: F) -> Vec<String> {
        items.into_iter().map(|i| f(i).to_string()).collect()
    }

    #[test]
    fn test_distance_filter() {
        let filter = AvailableOrderFilter {
            distance: Choice::Only(DistanceLimit::One),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(available_orders()), |o| o.id.as_str()), vec!["AO003"]);
    }

    #[test]
    fn test_all_conditions_are_combined() {
        let filter = AvailableOrderFilter {
            query: "new york".into(),
            distance: Choice::Only(DistanceLimit::Three),
            priority: Choice::Only(OrderPriority::High),
        };
        assert_eq!(
            ids(filter.apply(available_orders()), |o| o.id.as_str()),
            vec!["AO002", "AO005"]
        );
    }

    #[test]
    fn test_search_by_address() {
        let filter = AvailableOrderFilter {
            query: "bryant".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(available_orders()), |o| o.id.as_str()), vec!["AO004"]);
    }

    #[test]
    fn test_active_delivery() {
        let active = active_delivery(driver_deliveries()).unwrap();
        assert_eq!(active.id, "DD001");
        assert!(active_delivery(&[]).is_none());

        let finished: Vec<DriverDelivery> = driver_deliveries()
            .iter()
            .filter(|d| !d.status.is_in_progress())
            .cloned()
            .collect();
        assert_eq!(active_delivery(&finished).map(|d| d.id.as_str()), Some("DD002"));
    }

    #[test]
    fn test_status_progression() {
        let mut status = DriverDeliveryStatus::Accepted;
        let mut steps = vec![status];
        while let Some(next) = status.next() {
            status = next;
            steps.push(status);
        }
        assert_eq!(
            steps,
            vec![
                DriverDeliveryStatus::Accepted,
                DriverDeliveryStatus::PickedUp,
                DriverDeliveryStatus::InTransit,
                DriverDeliveryStatus::Delivered,
            ]
        );
        assert!(DriverDeliveryStatus::Cancelled.next().is_none());
    }

    #[test]
    fn test_history_filter() {
        let filter = DriverDeliveryFilter {
            query: String::new(),
            status: Choice::Only(DriverDeliveryStatus::Delivered),
        };
        assert_eq!(filter.apply(driver_deliveries()).len(), 3);
    }

    #[test]
    fn test_rating_share() {
        let stats = driver_stats();
        assert_eq!(stats.rating_share(5), 82);
        assert_eq!(stats.rating_share(1), 0);
        assert_eq!(stats.rating_share(6), 0);
    }
}
