use once_cell::sync::Lazy;

use super::aggregate::{
    DeliveryStatus, DeliveryTracking, DriverContact, GeoPoint, TrackingRoute, TrackingUpdate,
};

pub(crate) fn update(timestamp: &str, status: &str, message: &str) -> TrackingUpdate {
    TrackingUpdate {
        timestamp: timestamp.into(),
        status: status.into(),
        message: message.into(),
    }
}

pub(crate) fn contact(id: &str, name: &str, phone: &str) -> DriverContact {
    DriverContact {
        id: id.into(),
        name: name.into(),
        phone: phone.into(),
    }
}

fn point(latitude: f64, longitude: f64, address: &str, last_updated: &str) -> GeoPoint {
    GeoPoint {
        latitude,
        longitude,
        address: address.into(),
        last_updated: last_updated.into(),
    }
}

fn route(origin: &str, destination: &str, steps: (u32, u32), distance_remaining: f64, time_remaining: u32) -> TrackingRoute {
    TrackingRoute {
        origin: origin.into(),
        destination: destination.into(),
        current_step: steps.0,
        total_steps: steps.1,
        distance_remaining,
        time_remaining,
    }
}

pub(crate) const MSG_PROCESSED: &str = "Your order has been processed and is ready for delivery.";
pub(crate) const MSG_OUT: &str = "Your package is now out for delivery with our driver.";
pub(crate) const MSG_DELIVERED: &str = "Your package has been delivered. Thank you for choosing our service!";
pub(crate) const MSG_DELAYED: &str =
    "Your delivery is experiencing delays due to heavy traffic. New ETA: 2:15 PM.";

static TRACKING: Lazy<Vec<DeliveryTracking>> = Lazy::new(|| {
    vec![
        DeliveryTracking {
            id: "TRK001".into(),
            order_id: "#4392".into(),
            status: DeliveryStatus::InTransit,
            estimated_delivery: "2023-12-15T14:30:00".into(),
            actual_delivery: None,
            location: point(40.7128, -74.006, "Broadway & W 34th St, New York, NY", "2023-12-15T12:15:00"),
            driver: contact("P001", "John Smith", "(555) 123-4567"),
            route: route("Distribution Center, Queens, NY", "123 Main Street, Apt 4B, New York, NY 10001", (3, 5), 2.5, 15),
            updates: vec![
                update("2023-12-15T10:30:00", "Order Processed", MSG_PROCESSED),
                update("2023-12-15T11:15:00", "Out for Delivery", MSG_OUT),
                update("2023-12-15T12:15:00", "In Transit", "Your delivery is on its way and will arrive shortly."),
            ],
        },
        DeliveryTracking {
            id: "TRK002".into(),
            order_id: "#4391".into(),
            status: DeliveryStatus::Pending,
            estimated_delivery: "2023-12-16T10:00:00".into(),
            actual_delivery: None,
            location: point(40.7282, -73.794, "Distribution Center, Queens, NY", "2023-12-15T09:30:00"),
            driver: contact("P002", "Sarah Johnson", "(555) 234-5678"),
            route: route("Distribution Center, Queens, NY", "456 Park Ave, Boston, MA 02108", (0, 8), 215.3, 240),
            updates: vec![update(
                "2023-12-15T09:30:00",
                "Order Processed",
                "Your order has been processed and is scheduled for delivery tomorrow.",
            )],
        },
        DeliveryTracking {
            id: "TRK003".into(),
            order_id: "#4390".into(),
            status: DeliveryStatus::Delivered,
            estimated_delivery: "2023-12-14T16:00:00".into(),
            actual_delivery: Some("2023-12-14T15:45:00".into()),
            location: point(41.8781, -87.6298, "789 Oak Dr, Chicago, IL 60601", "2023-12-14T15:45:00"),
            driver: contact("P003", "Michael Brown", "(555) 345-6789"),
            route: route("Distribution Center, Chicago, IL", "789 Oak Dr, Chicago, IL 60601", (5, 5), 0.0, 0),
            updates: vec![
                update("2023-12-14T10:30:00", "Order Processed", MSG_PROCESSED),
                update("2023-12-14T11:15:00", "Out for Delivery", MSG_OUT),
                update("2023-12-14T15:45:00", "Delivered", MSG_DELIVERED),
            ],
        },
        DeliveryTracking {
            id: "TRK004".into(),
            order_id: "#4389".into(),
            status: DeliveryStatus::Delayed,
            estimated_delivery: "2023-12-15T13:00:00".into(),
            actual_delivery: None,
            location: point(47.6062, -122.3321, "I-5 North, Seattle, WA", "2023-12-15T11:30:00"),
            driver: contact("P004", "David Wilson", "(555) 456-7890"),
            route: route("Distribution Center, Tacoma, WA", "321 Pine St, Seattle, WA 98101", (2, 4), 12.8, 45),
            updates: vec![
                update("2023-12-15T09:30:00", "Order Processed", MSG_PROCESSED),
                update("2023-12-15T10:15:00", "Out for Delivery", MSG_OUT),
                update("2023-12-15T11:30:00", "Delayed", MSG_DELAYED),
            ],
        },
        DeliveryTracking {
            id: "TRK005".into(),
            order_id: "#4388".into(),
            status: DeliveryStatus::Delivered,
            estimated_delivery: "2023-12-14T14:00:00".into(),
            actual_delivery: Some("2023-12-14T13:50:00".into()),
            location: point(39.7392, -104.9903, "654 Maple Rd, Denver, CO 80202", "2023-12-14T13:50:00"),
            driver: contact("P005", "Emily Davis", "(555) 567-8901"),
            route: route("Distribution Center, Denver, CO", "654 Maple Rd, Denver, CO 80202", (6, 6), 0.0, 0),
            updates: vec![
                update("2023-12-14T09:30:00", "Order Processed", MSG_PROCESSED),
                update("2023-12-14T10:15:00", "Out for Delivery", MSG_OUT),
                update("2023-12-14T13:50:00", "Delivered", MSG_DELIVERED),
            ],
        },
    ]
});

pub fn tracking_data() -> &'static [DeliveryTracking] {
    &TRACKING
}
