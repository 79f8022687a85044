use once_cell::sync::Lazy;

use super::aggregate::{DispatchDriver, PendingOrder};
use crate::domain::a108_driver::{DriverAvailability, OrderPriority};

static PENDING: Lazy<Vec<PendingOrder>> = Lazy::new(|| {
    [
        ("PO001", "#4400", "Tech Solutions Inc.", "2023-12-15T10:30:00", "350 5th Ave, New York, NY 10118", "20 W 34th St, New York, NY 10001", "Electronics - Medium (5.2 lbs)", OrderPriority::High),
        ("PO002", "#4401", "Fashion Outlet", "2023-12-15T10:45:00", "89 E 42nd St, New York, NY 10017", "234 W 42nd St, New York, NY 10036", "Clothing - Small (2.0 lbs)", OrderPriority::Normal),
        ("PO003", "#4402", "Gourmet Eats", "2023-12-15T11:00:00", "75 9th Ave, New York, NY 10011", "101 W 23rd St, New York, NY 10011", "Food - Small (1.5 lbs)", OrderPriority::Express),
    ]
    .into_iter()
    .map(|(id, order_id, client_name, created_at, pickup, delivery, package, priority)| PendingOrder {
        id: id.into(),
        order_id: order_id.into(),
        client_name: client_name.into(),
        created_at: created_at.into(),
        pickup: pickup.into(),
        delivery: delivery.into(),
        package: package.into(),
        priority,
    })
    .collect()
});

static DRIVERS: Lazy<Vec<DispatchDriver>> = Lazy::new(|| {
    use DriverAvailability::*;
    [
        ("DRV001", "Michael Rodriguez", Available, "Broadway & W 34th St, New York, NY", "Cargo Van (V001)", 4.8, 0, 3),
        ("DRV002", "Sarah Johnson", Available, "5th Ave & E 42nd St, New York, NY", "Sedan (V009)", 4.9, 0, 5),
        ("DRV003", "David Wilson", Busy, "Broadway & W 42nd St, New York, NY", "Cargo Van (V005)", 4.7, 1, 4),
        ("DRV004", "Emily Davis", Available, "Park Ave & E 34th St, New York, NY", "Sedan (V010)", 4.6, 0, 2),
    ]
    .into_iter()
    .map(|(id, name, status, location, vehicle, rating, active_deliveries, completed_today)| DispatchDriver {
        id: id.into(),
        name: name.into(),
        status,
        location: location.into(),
        vehicle: vehicle.into(),
        rating,
        active_deliveries,
        completed_today,
    })
    .collect()
});

pub fn pending_orders() -> &'static [PendingOrder] {
    &PENDING
}

pub fn dispatch_drivers() -> &'static [DispatchDriver] {
    &DRIVERS
}
