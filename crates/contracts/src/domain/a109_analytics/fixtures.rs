use once_cell::sync::Lazy;

use super::aggregate::{CustomerFeedback, DailyDeliveries, PerformanceMetric, RegionalData};

static DELIVERY_DATA: Lazy<Vec<DailyDeliveries>> = Lazy::new(|| {
    [
        ("2023-12-01", 120, 110, 10),
        ("2023-12-02", 135, 125, 10),
        ("2023-12-03", 115, 105, 10),
        ("2023-12-04", 140, 130, 10),
        ("2023-12-05", 145, 135, 10),
        ("2023-12-06", 160, 145, 15),
        ("2023-12-07", 170, 155, 15),
        ("2023-12-08", 155, 145, 10),
        ("2023-12-09", 165, 150, 15),
        ("2023-12-10", 175, 160, 15),
        ("2023-12-11", 180, 165, 15),
        ("2023-12-12", 190, 175, 15),
        ("2023-12-13", 185, 170, 15),
        ("2023-12-14", 195, 180, 15),
    ]
    .into_iter()
    .map(|(date, completed, on_time, delayed)| DailyDeliveries {
        date: date.into(),
        completed,
        on_time,
        delayed,
    })
    .collect()
});

static METRICS: Lazy<Vec<PerformanceMetric>> = Lazy::new(|| {
    [
        ("On-Time Delivery Rate", 94.2, 2.1, "%"),
        ("Average Delivery Time", 45.0, -5.0, "min"),
        ("Fuel Efficiency", 8.6, 0.4, "mpg"),
        ("Customer Satisfaction", 4.8, 0.2, "/5"),
        ("Vehicle Utilization", 87.5, 3.5, "%"),
        ("Cost per Delivery", 12.75, -0.85, "$"),
    ]
    .into_iter()
    .map(|(name, value, change, unit)| PerformanceMetric {
        name: name.into(),
        value,
        change,
        unit: unit.into(),
    })
    .collect()
});

static REGIONS: Lazy<Vec<RegionalData>> = Lazy::new(|| {
    [
        ("Downtown", 450, 92, "#4ade80"),
        ("North", 380, 88, "#60a5fa"),
        ("East", 320, 90, "#f472b6"),
        ("South", 410, 85, "#facc15"),
        ("West", 350, 91, "#fb923c"),
        ("Central", 290, 89, "#a78bfa"),
    ]
    .into_iter()
    .map(|(region, deliveries, efficiency, color)| RegionalData {
        region: region.into(),
        deliveries,
        efficiency,
        color: color.into(),
    })
    .collect()
});

static FEEDBACK: Lazy<Vec<CustomerFeedback>> = Lazy::new(|| {
    [
        ("F001", "Alex Johnson", 5, "Delivery was super fast and the driver was very professional.", "2023-12-14", "#4385"),
        ("F002", "Maria Garcia", 4, "Good service, but the package was slightly damaged.", "2023-12-14", "#4382"),
        ("F003", "Sam Wilson", 5, "Excellent service! Driver called ahead to confirm delivery time.", "2023-12-13", "#4378"),
        ("F004", "Jessica Lee", 3, "Delivery was late by an hour, but driver was apologetic.", "2023-12-13", "#4375"),
        ("F005", "Daniel Brown", 5, "Perfect delivery experience. Will use again!", "2023-12-12", "#4370"),
        ("F006", "Emma Davis", 4, "Delivery was on time and the driver was friendly.", "2023-12-12", "#4368"),
        ("F007", "Michael Smith", 5, "Excellent service and communication throughout the delivery process.", "2023-12-11", "#4365"),
        ("F008", "Olivia Martinez", 2, "Delivery was very late and no communication from the driver.", "2023-12-11", "#4362"),
    ]
    .into_iter()
    .map(|(id, customer_name, rating, comment, date, order_id)| CustomerFeedback {
        id: id.into(),
        customer_name: customer_name.into(),
        rating,
        comment: comment.into(),
        date: date.into(),
        order_id: order_id.into(),
    })
    .collect()
});

pub fn delivery_data() -> &'static [DailyDeliveries] {
    &DELIVERY_DATA
}

pub fn performance_metrics() -> &'static [PerformanceMetric] {
    &METRICS
}

pub fn regional_data() -> &'static [RegionalData] {
    &REGIONS
}

pub fn customer_feedback() -> &'static [CustomerFeedback] {
    &FEEDBACK
}
