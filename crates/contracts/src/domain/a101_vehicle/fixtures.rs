use once_cell::sync::Lazy;

use super::aggregate::{Vehicle, VehicleStatus};

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    name: &str,
    vehicle_type: &str,
    status: VehicleStatus,
    maintenance: (&str, &str),
    assignment: Option<(&str, &str)>,
    fuel_level: u8,
    mileage: u32,
) -> Vehicle {
    Vehicle {
        id: id.into(),
        name: name.into(),
        vehicle_type: vehicle_type.into(),
        status,
        last_maintenance: maintenance.0.into(),
        next_maintenance: maintenance.1.into(),
        driver: assignment.map(|(driver, _)| driver.to_string()),
        location: assignment.map(|(_, location)| location.to_string()),
        fuel_level,
        mileage,
    }
}

static VEHICLES: Lazy<Vec<Vehicle>> = Lazy::new(|| {
    use VehicleStatus::*;
    vec![
        vehicle("V001", "Delivery Van 1", "Cargo Van", Active, ("2023-10-15", "2024-01-15"), Some(("John Smith", "Downtown Route")), 75, 45280),
        vehicle("V002", "Delivery Van 2", "Cargo Van", Active, ("2023-11-05", "2024-02-05"), Some(("Sarah Johnson", "North Route")), 60, 32150),
        vehicle("V003", "Truck 1", "Box Truck", Maintenance, ("2023-12-01", "2024-03-01"), None, 45, 78900),
        vehicle("V004", "Delivery Van 3", "Cargo Van", Active, ("2023-09-22", "2024-01-22"), Some(("Michael Brown", "East Route")), 85, 28750),
        vehicle("V005", "Truck 2", "Box Truck", Active, ("2023-10-30", "2024-01-30"), Some(("David Wilson", "South Route")), 70, 52400),
        vehicle("V006", "Delivery Van 4", "Cargo Van", Inactive, ("2023-08-15", "2024-02-15"), None, 30, 65800),
        vehicle("V007", "Truck 3", "Box Truck", Active, ("2023-11-15", "2024-02-15"), Some(("Emily Davis", "West Route")), 90, 41200),
        vehicle("V008", "Delivery Van 5", "Cargo Van", Active, ("2023-12-05", "2024-03-05"), Some(("Robert Taylor", "Central Route")), 65, 38600),
    ]
});

pub fn vehicles() -> &'static [Vehicle] {
    &VEHICLES
}
