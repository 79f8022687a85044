pub mod aggregate;
pub mod fixtures;

pub use aggregate::{
    average_rating, CustomerFeedback, DailyDeliveries, DeliveryTotals, PerformanceMetric,
    RegionalData,
};
pub use fixtures::{customer_feedback, delivery_data, performance_metrics, regional_data};
