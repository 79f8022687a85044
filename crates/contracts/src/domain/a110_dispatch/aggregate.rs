use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a108_driver::{DriverAvailability, OrderPriority};
use crate::domain::common::{matches_any, Searchable};

/// Заказ, ожидающий назначения водителя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub id: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub pickup: String,
    pub delivery: String,
    pub package: String,
    pub priority: OrderPriority,
}

impl Searchable for PendingOrder {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(&[&self.order_id, &self.client_name], filter)
    }
}

/// Водитель в панели диспетчера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchDriver {
    pub id: String,
    pub name: String,
    pub status: DriverAvailability,
    pub location: String,
    pub vehicle: String,
    pub rating: f32,
    #[serde(rename = "activeDeliveries")]
    pub active_deliveries: u32,
    #[serde(rename = "completedToday")]
    pub completed_today: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("order {0} is not pending")]
    UnknownOrder(String),
    #[error("driver {0} not found")]
    UnknownDriver(String),
    #[error("driver {0} is not available")]
    DriverUnavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub order_id: String,
    pub driver_id: String,
    pub driver_name: String,
}

/// Локальное состояние диспетчерской: заказы без водителя и водители
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchBoard {
    pub orders: Vec<PendingOrder>,
    pub drivers: Vec<DispatchDriver>,
}

impl DispatchBoard {
    pub fn new(orders: &[PendingOrder], drivers: &[DispatchDriver]) -> Self {
        Self {
            orders: orders.to_vec(),
            drivers: drivers.to_vec(),
        }
    }

    pub fn available_drivers(&self) -> impl Iterator<Item = &DispatchDriver> {
        self.drivers
            .iter()
            .filter(|d| d.status == DriverAvailability::Available)
    }

    /// Назначить водителя: заказ уходит из очереди, водитель становится занят
    pub fn assign(&mut self, order_id: &str, driver_id: &str) -> Result<Assignment, DispatchError> {
        let order_index = self
            .orders
            .iter()
            .position(|o| o.id == order_id)
            .ok_or_else(|| DispatchError::UnknownOrder(order_id.to_string()))?;
        let driver = self
            .drivers
            .iter_mut()
            .find(|d| d.id == driver_id)
            .ok_or_else(|| DispatchError::UnknownDriver(driver_id.to_string()))?;
        if driver.status != DriverAvailability::Available {
            return Err(DispatchError::DriverUnavailable(driver.name.clone()));
        }

        driver.status = DriverAvailability::Busy;
        driver.active_deliveries += 1;
        let order = self.orders.remove(order_index);

        Ok(Assignment {
            order_id: order.order_id,
            driver_id: driver.id.clone(),
            driver_name: driver.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a110_dispatch::{dispatch_drivers, pending_orders};

    fn board() -> DispatchBoard {
        DispatchBoard::new(pending_orders(), dispatch_drivers())
    }

    #[test]
    fn test_assign_moves_order_and_occupies_driver() {
        let mut board = board();
        let assignment = board.assign("PO001", "DRV002").unwrap();
        assert_eq!(assignment.order_id, "#4400");
        assert_eq!(assignment.driver_name, "Sarah Johnson");
        assert_eq!(board.orders.len(), 2);

        let driver = board.drivers.iter().find(|d| d.id == "DRV002").unwrap();
        assert_eq!(driver.status, DriverAvailability::Busy);
        assert_eq!(driver.active_deliveries, 1);
    }

    #[test]
    fn test_busy_driver_is_rejected() {
        let mut board = board();
        let err = board.assign("PO001", "DRV003").unwrap_err();
        assert_eq!(err, DispatchError::DriverUnavailable("David Wilson".into()));
        assert_eq!(board.orders.len(), 3);
    }

    #[test]
    fn test_unknown_ids() {
        let mut board = board();
        assert_eq!(
            board.assign("PO999", "DRV001").unwrap_err(),
            DispatchError::UnknownOrder("PO999".into())
        );
        assert_eq!(
            board.assign("PO001", "DRV999").unwrap_err(),
            DispatchError::UnknownDriver("DRV999".into())
        );
    }

    #[test]
    fn test_available_drivers() {
        assert_eq!(board().available_drivers().count(), 3);
    }
}
