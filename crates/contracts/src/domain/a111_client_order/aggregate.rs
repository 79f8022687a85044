use serde::{Deserialize, Serialize};

use crate::coded_enum;

coded_enum! {
    pub enum OrderType {
        Standard => ("standard", "Standard Delivery"),
        Express => ("express", "Express Delivery"),
        SameDay => ("same-day", "Same Day Delivery"),
        Scheduled => ("scheduled", "Scheduled Delivery"),
    }
}

coded_enum! {
    pub enum PackageSize {
        Small => ("small", "Small (up to 5 lbs)"),
        Medium => ("medium", "Medium (5-20 lbs)"),
        Large => ("large", "Large (20-50 lbs)"),
        ExtraLarge => ("extra-large", "Extra Large (50+ lbs)"),
    }
}

coded_enum! {
    /// Стадия заказа в списке "Recent Orders"
    pub enum OrderStage {
        Processing => ("processing", "Processing"),
        InTransit => ("in-transit", "In Transit"),
        Delivered => ("delivered", "Delivered"),
    }
}

/// Строка списка последних заказов клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientOrder {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub stage: OrderStage,
    pub destination: String,
    pub eta: String,
}

/// Черновик формы создания заказа
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub order_type: OrderType,
    pub pickup: String,
    pub delivery: String,
    pub package_size: PackageSize,
    pub delivery_date: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub instructions: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            order_type: OrderType::Standard,
            pickup: String::new(),
            delivery: String::new(),
            package_size: PackageSize::Medium,
            delivery_date: String::new(),
            contact_name: String::new(),
            contact_phone: String::new(),
            instructions: String::new(),
        }
    }
}

impl OrderDraft {
    /// Незаполненные обязательные поля (названия для сообщения в форме)
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Pickup Address", &self.pickup),
            ("Delivery Address", &self.delivery),
            ("Contact Name", &self.contact_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    pub fn to_order(&self, order_id: String) -> ClientOrder {
        let eta = if self.delivery_date.trim().is_empty() {
            "Scheduling".to_string()
        } else {
            self.delivery_date.trim().to_string()
        };
        ClientOrder {
            order_id,
            stage: OrderStage::Processing,
            destination: self.delivery.trim().to_string(),
            eta,
        }
    }
}

/// Следующий номер заказа вида `#NNNN`
pub fn next_order_id(orders: &[ClientOrder]) -> String {
    let max = orders
        .iter()
        .filter_map(|o| o.order_id.trim_start_matches('#').parse::<u32>().ok())
        .max()
        .unwrap_or(4000);
    format!("#{}", max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a111_client_order::recent_orders;

    #[test]
    fn test_missing_fields() {
        let draft = OrderDraft::default();
        assert_eq!(
            draft.missing_fields(),
            vec!["Pickup Address", "Delivery Address", "Contact Name"]
        );

        let draft = OrderDraft {
            pickup: "350 5th Ave".into(),
            delivery: "20 W 34th St".into(),
            contact_name: "  ".into(),
            ..Default::default()
        };
        assert_eq!(draft.missing_fields(), vec!["Contact Name"]);
    }

    #[test]
    fn test_next_order_id() {
        assert_eq!(next_order_id(recent_orders()), "#4393");
        assert_eq!(next_order_id(&[]), "#4001");
    }

    #[test]
    fn test_to_order() {
        let draft = OrderDraft {
            delivery: " 20 W 34th St ".into(),
            ..Default::default()
        };
        let order = draft.to_order("#4393".into());
        assert_eq!(order.stage, OrderStage::Processing);
        assert_eq!(order.destination, "20 W 34th St");
        assert_eq!(order.eta, "Scheduling");
    }
}
