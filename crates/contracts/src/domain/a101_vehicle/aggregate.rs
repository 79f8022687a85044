use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::domain::common::{matches_any, Choice, Searchable};

coded_enum! {
    /// Состояние транспортного средства
    pub enum VehicleStatus {
        Active => ("active", "Active"),
        Maintenance => ("maintenance", "Maintenance"),
        Inactive => ("inactive", "Inactive"),
    }
}

/// Транспортное средство автопарка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub status: VehicleStatus,
    #[serde(rename = "lastMaintenance")]
    pub last_maintenance: String,
    #[serde(rename = "nextMaintenance")]
    pub next_maintenance: String,
    pub driver: Option<String>,
    pub location: Option<String>,
    /// Уровень топлива, %
    #[serde(rename = "fuelLevel")]
    pub fuel_level: u8,
    pub mileage: u32,
}

impl Vehicle {
    pub fn is_assigned(&self) -> bool {
        self.driver.is_some()
    }
}

impl Searchable for Vehicle {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(&[&self.name], filter)
    }
}

/// Фильтр таблицы автопарка: поиск по названию И статус
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFilter {
    pub query: String,
    pub status: Choice<VehicleStatus>,
}

impl VehicleFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        vehicle.matches_filter(&self.query) && self.status.matches(vehicle.status)
    }

    pub fn apply<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        vehicles.iter().filter(|v| self.matches(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_vehicle::vehicles;

    #[test]
    fn test_empty_filter_returns_all() {
        let filter = VehicleFilter::default();
        assert_eq!(filter.apply(vehicles()).len(), vehicles().len());
    }

    #[test]
    fn test_query_and_status_are_combined() {
        let filter = VehicleFilter {
            query: "truck".into(),
            status: Choice::Only(VehicleStatus::Active),
        };
        let ids: Vec<&str> = filter.apply(vehicles()).iter().map(|v| v.id.as_str()).collect();
        // Truck 1 на обслуживании и не попадает
        assert_eq!(ids, vec!["V005", "V007"]);
    }

    #[test]
    fn test_status_only() {
        let filter = VehicleFilter {
            query: String::new(),
            status: Choice::from_code("maintenance"),
        };
        let found = filter.apply(vehicles());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "V003");
    }

    #[test]
    fn test_unknown_status_code_means_all() {
        assert_eq!(Choice::<VehicleStatus>::from_code("whatever"), Choice::All);
    }
}
