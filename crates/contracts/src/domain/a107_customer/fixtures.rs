use once_cell::sync::Lazy;

use super::aggregate::{
    CustomerDelivery, CustomerProfile, DeliveryPreferences, LineItem, NotificationPreferences,
};
use crate::domain::a104_delivery_tracking::fixtures::{
    contact, update, MSG_DELAYED, MSG_DELIVERED, MSG_OUT, MSG_PROCESSED,
};
use crate::domain::a104_delivery_tracking::DeliveryStatus;

fn line(name: &str, quantity: u32, price: f64) -> LineItem {
    LineItem {
        name: name.into(),
        quantity,
        price,
    }
}

static PROFILE: Lazy<CustomerProfile> = Lazy::new(|| CustomerProfile {
    id: "CUST001".into(),
    name: "Alex Johnson".into(),
    email: "alex.johnson@example.com".into(),
    phone: "(555) 123-4567".into(),
    address: "123 Main Street, Apt 4B".into(),
    city: "New York".into(),
    state: "NY".into(),
    zip: "10001".into(),
    country: "USA".into(),
    created_at: "2023-01-15".into(),
    notifications: NotificationPreferences {
        email: true,
        sms: true,
        push: false,
    },
    delivery: DeliveryPreferences {
        leave_at_door: true,
        require_signature: false,
        allow_neighbor_delivery: true,
        special_instructions: "Please leave packages by the side door if no one answers.".into(),
    },
});

static DELIVERIES: Lazy<Vec<CustomerDelivery>> = Lazy::new(|| {
    vec![
        CustomerDelivery {
            id: "DEL001".into(),
            order_id: "#4392".into(),
            status: DeliveryStatus::InTransit,
            estimated_delivery: "2023-12-15T14:30:00".into(),
            actual_delivery: None,
            tracking_number: "DSS4392TRK".into(),
            origin: "Distribution Center, Queens, NY".into(),
            destination: "123 Main Street, Apt 4B, New York, NY 10001".into(),
            items: vec![line("Wireless Headphones", 1, 129.99), line("Smartphone Case", 2, 19.99)],
            total_amount: 169.97,
            driver: Some(contact("P001", "John Smith", "(555) 123-4567")),
            updates: vec![
                update("2023-12-15T10:30:00", "Order Processed", MSG_PROCESSED),
                update("2023-12-15T11:15:00", "Out for Delivery", MSG_OUT),
                update("2023-12-15T12:15:00", "In Transit", "Your delivery is on its way and will arrive shortly."),
            ],
        },
        CustomerDelivery {
            id: "DEL002".into(),
            order_id: "#4391".into(),
            status: DeliveryStatus::Pending,
            estimated_delivery: "2023-12-16T10:00:00".into(),
            actual_delivery: None,
            tracking_number: "DSS4391TRK".into(),
            origin: "Distribution Center, Queens, NY".into(),
            destination: "456 Park Ave, Boston, MA 02108".into(),
            items: vec![
                line("Laptop", 1, 899.99),
                line("Wireless Mouse", 1, 29.99),
                line("Laptop Sleeve", 1, 24.99),
            ],
            total_amount: 954.97,
            driver: None,
            updates: vec![update(
                "2023-12-15T09:30:00",
                "Order Processed",
                "Your order has been processed and is scheduled for delivery tomorrow.",
            )],
        },
        CustomerDelivery {
            id: "DEL003".into(),
            order_id: "#4390".into(),
            status: DeliveryStatus::Delivered,
            estimated_delivery: "2023-12-14T16:00:00".into(),
            actual_delivery: Some("2023-12-14T15:45:00".into()),
            tracking_number: "DSS4390TRK".into(),
            origin: "Distribution Center, Chicago, IL".into(),
            destination: "789 Oak Dr, Chicago, IL 60601".into(),
            items: vec![line("Coffee Maker", 1, 89.99), line("Coffee Beans", 2, 14.99)],
            total_amount: 119.97,
            driver: Some(contact("P003", "Michael Brown", "(555) 345-6789")),
            updates: vec![
                update("2023-12-14T10:30:00", "Order Processed", MSG_PROCESSED),
                update("2023-12-14T11:15:00", "Out for Delivery", MSG_OUT),
                update("2023-12-14T15:45:00", "Delivered", MSG_DELIVERED),
            ],
        },
        CustomerDelivery {
            id: "DEL004".into(),
            order_id: "#4389".into(),
            status: DeliveryStatus::Delayed,
            estimated_delivery: "2023-12-15T13:00:00".into(),
            actual_delivery: None,
            tracking_number: "DSS4389TRK".into(),
            origin: "Distribution Center, Tacoma, WA".into(),
            destination: "321 Pine St, Seattle, WA 98101".into(),
            items: vec![line("Smart Speaker", 1, 79.99), line("Smart Bulb Set", 1, 49.99)],
            total_amount: 129.98,
            driver: Some(contact("P004", "David Wilson", "(555) 456-7890")),
            updates: vec![
                update("2023-12-15T09:30:00", "Order Processed", MSG_PROCESSED),
                update("2023-12-15T10:15:00", "Out for Delivery", MSG_OUT),
                update("2023-12-15T11:30:00", "Delayed", MSG_DELAYED),
            ],
        },
        CustomerDelivery {
            id: "DEL005".into(),
            order_id: "#4388".into(),
            status: DeliveryStatus::Delivered,
            estimated_delivery: "2023-12-14T14:00:00".into(),
            actual_delivery: Some("2023-12-14T13:50:00".into()),
            tracking_number: "DSS4388TRK".into(),
            origin: "Distribution Center, Denver, CO".into(),
            destination: "654 Maple Rd, Denver, CO 80202".into(),
            items: vec![line("Fitness Tracker", 1, 99.99)],
            total_amount: 99.99,
            driver: Some(contact("P005", "Emily Davis", "(555) 567-8901")),
            updates: vec![
                update("2023-12-14T09:30:00", "Order Processed", MSG_PROCESSED),
                update("2023-12-14T10:15:00", "Out for Delivery", MSG_OUT),
                update("2023-12-14T13:50:00", "Delivered", MSG_DELIVERED),
            ],
        },
    ]
});

pub fn customer_profile() -> &'static CustomerProfile {
    &PROFILE
}

pub fn customer_deliveries() -> &'static [CustomerDelivery] {
    &DELIVERIES
}
