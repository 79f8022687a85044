use once_cell::sync::Lazy;

use super::aggregate::{
    AvailableOrder, DriverAvailability, DriverDelivery, DriverDeliveryStatus, DriverProfile,
    DriverStats, DriverVehicle, Earnings, OrderPriority, PackageDetails, PeriodStats, Stop,
};

fn package(size: &str, weight: f64, quantity: u32, description: &str) -> PackageDetails {
    PackageDetails {
        size: size.into(),
        weight,
        quantity,
        description: description.into(),
    }
}

fn stop(address: &str) -> Stop {
    Stop {
        address: address.into(),
        contact_name: None,
        contact_phone: None,
        instructions: None,
    }
}

fn contact_stop(address: &str, name: &str, phone: &str) -> Stop {
    Stop {
        contact_name: Some(name.into()),
        contact_phone: Some(phone.into()),
        ..stop(address)
    }
}

fn earnings(base: f64, tips: f64, bonus: f64) -> Earnings {
    Earnings {
        base,
        tips,
        bonus,
        total: base + tips + bonus,
    }
}

static PROFILE: Lazy<DriverProfile> = Lazy::new(|| DriverProfile {
    id: "DRV001".into(),
    name: "Michael Rodriguez".into(),
    email: "michael.rodriguez@example.com".into(),
    phone: "(555) 123-4567".into(),
    status: DriverAvailability::Available,
    address: "Broadway & W 34th St, New York, NY".into(),
    vehicle: DriverVehicle {
        id: "V001".into(),
        vehicle_type: "Cargo Van".into(),
        license_plate: "ABC-1234".into(),
        model: "Ford Transit 2022".into(),
        color: "White".into(),
    },
    rating: 4.8,
    total_deliveries: 342,
    working_hours: ("08:00".into(), "18:00".into()),
    max_distance: 30,
    preferred_zones: vec!["Manhattan".into(), "Brooklyn".into(), "Queens".into()],
});

static AVAILABLE_ORDERS: Lazy<Vec<AvailableOrder>> = Lazy::new(|| {
    #[allow(clippy::too_many_arguments)]
    fn order(
        id: &str,
        order_id: &str,
        client_name: &str,
        route: (&str, &str),
        distance: f64,
        estimated_time: u32,
        estimated_earnings: f64,
        package: PackageDetails,
        window: (&str, &str),
        priority: OrderPriority,
    ) -> AvailableOrder {
        AvailableOrder {
            id: id.into(),
            order_id: order_id.into(),
            client_name: client_name.into(),
            pickup: route.0.into(),
            delivery: route.1.into(),
            distance,
            estimated_time,
            estimated_earnings,
            package,
            created_at: window.0.into(),
            expires_at: window.1.into(),
            priority,
        }
    }

    use OrderPriority::*;
    vec![
        order("AO001", "#4395", "Tech Solutions Inc.", ("350 5th Ave, New York, NY 10118", "20 W 34th St, New York, NY 10001"), 1.2, 15, 18.5, package("Medium", 5.2, 1, "Electronics package"), ("2023-12-15T11:30:00", "2023-12-15T12:00:00"), Normal),
        order("AO002", "#4396", "Fashion Outlet", ("89 E 42nd St, New York, NY 10017", "234 W 42nd St, New York, NY 10036"), 2.5, 25, 22.75, package("Small", 2.0, 3, "Clothing items"), ("2023-12-15T11:45:00", "2023-12-15T12:15:00"), High),
        order("AO003", "#4397", "Gourmet Eats", ("75 9th Ave, New York, NY 10011", "101 W 23rd St, New York, NY 10011"), 0.8, 12, 15.25, package("Small", 1.5, 1, "Food delivery - Hot"), ("2023-12-15T12:00:00", "2023-12-15T12:20:00"), Express),
        order("AO004", "#4398", "Office Supplies Co.", ("200 Park Ave, New York, NY 10166", "1 Bryant Park, New York, NY 10036"), 1.5, 18, 19.75, package("Medium", 8.0, 2, "Office supplies and documents"), ("2023-12-15T12:10:00", "2023-12-15T12:40:00"), Normal),
        order("AO005", "#4399", "Luxury Gifts", ("727 5th Ave, New York, NY 10022", "30 Rockefeller Plaza, New York, NY 10112"), 1.8, 20, 24.5, package("Small", 1.0, 1, "Jewelry box - High value"), ("2023-12-15T12:15:00", "2023-12-15T12:45:00"), High),
    ]
});

static DELIVERIES: Lazy<Vec<DriverDelivery>> = Lazy::new(|| {
    vec![
        DriverDelivery {
            id: "DD001".into(),
            order_id: "#4392".into(),
            status: DriverDeliveryStatus::InTransit,
            client_name: "Alex Johnson".into(),
            client_phone: "(555) 987-6543".into(),
            pickup: Stop {
                instructions: Some("Enter through the back loading dock".into()),
                ..contact_stop("Distribution Center, Queens, NY", "Warehouse Manager", "(555) 123-4567")
            },
            dropoff: Stop {
                instructions: Some("Leave with doorman if not home".into()),
                ..contact_stop("123 Main Street, Apt 4B, New York, NY 10001", "Alex Johnson", "(555) 987-6543")
            },
            package: package("Medium", 5.0, 2, "Electronics - Handle with care"),
            accepted: "2023-12-15T10:30:00".into(),
            completed_at: None,
            distance: 8.5,
            estimated_time: 35,
            current_step: 3,
            total_steps: 5,
            earnings: earnings(25.0, 5.0, 2.5),
            notes: None,
        },
        DriverDelivery {
            id: "DD002".into(),
            order_id: "#4385".into(),
            status: DriverDeliveryStatus::Delivered,
            client_name: "Sarah Miller".into(),
            client_phone: "(555) 456-7890".into(),
            pickup: stop("Distribution Center, Queens, NY"),
            dropoff: contact_stop("456 Park Ave, New York, NY 10022", "Sarah Miller", "(555) 456-7890"),
            package: package("Large", 15.0, 1, "Furniture - Requires assembly"),
            accepted: "2023-12-14T09:30:00".into(),
            completed_at: Some("2023-12-14T11:45:00".into()),
            distance: 10.2,
            estimated_time: 45,
            current_step: 5,
            total_steps: 5,
            earnings: earnings(35.0, 10.0, 0.0),
            notes: None,
        },
        DriverDelivery {
            id: "DD003".into(),
            order_id: "#4378".into(),
            status: DriverDeliveryStatus::Delivered,
            client_name: "James Wilson".into(),
            client_phone: "(555) 234-5678".into(),
            pickup: stop("Distribution Center, Brooklyn, NY"),
            dropoff: contact_stop("789 Broadway, Brooklyn, NY 11221", "James Wilson", "(555) 234-5678"),
            package: package("Small", 2.0, 3, "Books and documents"),
            accepted: "2023-12-13T13:30:00".into(),
            completed_at: Some("2023-12-13T15:10:00".into()),
            distance: 5.5,
            estimated_time: 25,
            current_step: 4,
            total_steps: 4,
            earnings: earnings(18.5, 3.0, 0.0),
            notes: None,
        },
        DriverDelivery {
            id: "DD004".into(),
            order_id: "#4365".into(),
            status: DriverDeliveryStatus::Cancelled,
            client_name: "Emily Davis".into(),
            client_phone: "(555) 876-5432".into(),
            pickup: stop("Distribution Center, Manhattan, NY"),
            dropoff: contact_stop("321 5th Ave, New York, NY 10016", "Emily Davis", "(555) 876-5432"),
            package: package("Medium", 7.5, 1, "Fragile glassware"),
            accepted: "2023-12-12T10:30:00".into(),
            completed_at: Some("2023-12-12T11:45:00".into()),
            distance: 6.8,
            estimated_time: 30,
            current_step: 2,
            total_steps: 4,
            // Частичная оплата за отменённую доставку
            earnings: earnings(10.0, 0.0, 0.0),
            notes: Some("Customer cancelled after pickup. Returned to distribution center.".into()),
        },
        DriverDelivery {
            id: "DD005".into(),
            order_id: "#4350".into(),
            status: DriverDeliveryStatus::Delivered,
            client_name: "Robert Brown".into(),
            client_phone: "(555) 345-6789".into(),
            pickup: stop("Distribution Center, Queens, NY"),
            dropoff: contact_stop("987 Northern Blvd, Queens, NY 11101", "Robert Brown", "(555) 345-6789"),
            package: package("Large", 12.0, 2, "Home appliances"),
            accepted: "2023-12-11T14:30:00".into(),
            completed_at: Some("2023-12-11T16:45:00".into()),
            distance: 7.2,
            estimated_time: 35,
            current_step: 5,
            total_steps: 5,
            earnings: earnings(30.0, 5.0, 2.5),
            notes: None,
        },
    ]
});

static STATS: Lazy<DriverStats> = Lazy::new(|| DriverStats {
    today: PeriodStats {
        deliveries: 3,
        earnings: 85.5,
        distance: 18.5,
        hours: 4.5,
    },
    weekly: PeriodStats {
        deliveries: 15,
        earnings: 425.75,
        distance: 95.2,
        hours: 22.5,
    },
    monthly: PeriodStats {
        deliveries: 62,
        earnings: 1850.25,
        distance: 410.5,
        hours: 98.0,
    },
    rating_average: 4.8,
    rating_count: 342,
    rating_breakdown: [280, 50, 10, 2, 0],
});

pub fn driver_profile() -> &'static DriverProfile {
    &PROFILE
}

pub fn available_orders() -> &'static [AvailableOrder] {
    &AVAILABLE_ORDERS
}

pub fn driver_deliveries() -> &'static [DriverDelivery] {
    &DELIVERIES
}

pub fn driver_stats() -> &'static DriverStats {
    &STATS
}
