use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDeliveries {
    pub date: String,
    pub completed: u32,
    #[serde(rename = "onTime")]
    pub on_time: u32,
    pub delayed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub name: String,
    pub value: f64,
    pub change: f64,
    pub unit: String,
}

impl PerformanceMetric {
    /// Для времени и стоимости рост - это плохо
    pub fn lower_is_better(&self) -> bool {
        matches!(self.unit.as_str(), "min" | "$")
    }

    pub fn is_improvement(&self) -> bool {
        if self.lower_is_better() {
            self.change < 0.0
        } else {
            self.change > 0.0
        }
    }

    pub fn formatted_value(&self) -> String {
        match self.unit.as_str() {
            "$" => format!("${:.2}", self.value),
            "%" => format!("{}%", self.value),
            unit => format!("{} {}", self.value, unit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalData {
    pub region: String,
    pub deliveries: u32,
    /// %
    pub efficiency: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerFeedback {
    pub id: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
}

/// Итоги по дневной статистике доставок
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeliveryTotals {
    pub completed: u32,
    pub on_time: u32,
    pub delayed: u32,
}

impl DeliveryTotals {
    pub fn of(days: &[DailyDeliveries]) -> Self {
        days.iter().fold(Self::default(), |acc, d| Self {
            completed: acc.completed + d.completed,
            on_time: acc.on_time + d.on_time,
            delayed: acc.delayed + d.delayed,
        })
    }

    pub fn on_time_rate(&self) -> f64 {
        if self.completed == 0 {
            return 0.0;
        }
        self.on_time as f64 * 100.0 / self.completed as f64
    }
}

/// Средняя оценка отзывов
pub fn average_rating(feedback: &[CustomerFeedback]) -> f64 {
    if feedback.is_empty() {
        return 0.0;
    }
    feedback.iter().map(|f| f.rating as f64).sum::<f64>() / feedback.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a109_analytics::{customer_feedback, delivery_data, performance_metrics};

    #[test]
    fn test_totals() {
        let totals = DeliveryTotals::of(delivery_data());
        assert_eq!(totals.completed, 2230);
        assert_eq!(totals.on_time + totals.delayed, totals.completed);
        assert!(totals.on_time_rate() > 90.0);
        assert_eq!(DeliveryTotals::of(&[]).on_time_rate(), 0.0);
    }

    #[test]
    fn test_improvement_direction() {
        let metrics = performance_metrics();
        let time = metrics.iter().find(|m| m.unit == "min").unwrap();
        assert!(time.is_improvement());
        let on_time = metrics.iter().find(|m| m.name == "On-Time Delivery Rate").unwrap();
        assert!(on_time.is_improvement());
        assert_eq!(on_time.formatted_value(), "94.2%");
    }

    #[test]
    fn test_average_rating() {
        assert!((average_rating(customer_feedback()) - 4.125).abs() < 1e-9);
        assert_eq!(average_rating(&[]), 0.0);
    }
}
