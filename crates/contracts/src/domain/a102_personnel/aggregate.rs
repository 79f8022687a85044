use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::domain::common::{matches_any, Choice, Searchable};

coded_enum! {
    pub enum PersonnelRole {
        Driver => ("Driver", "Driver"),
        Dispatcher => ("Dispatcher", "Dispatcher"),
        MaintenanceTechnician => ("Maintenance Technician", "Maintenance Technician"),
        CustomerService => ("Customer Service", "Customer Service"),
    }
}

coded_enum! {
    pub enum PersonnelStatus {
        Active => ("active", "Active"),
        OnLeave => ("on-leave", "On Leave"),
        Inactive => ("inactive", "Inactive"),
    }
}

/// Сотрудник службы доставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personnel {
    pub id: String,
    pub name: String,
    pub role: PersonnelRole,
    pub status: PersonnelStatus,
    pub email: String,
    pub phone: String,
    #[serde(rename = "hireDate")]
    pub hire_date: String,
    #[serde(rename = "performanceRating")]
    pub performance_rating: f32,
    #[serde(rename = "assignedVehicle")]
    pub assigned_vehicle: Option<String>,
    #[serde(rename = "currentRoute")]
    pub current_route: Option<String>,
    #[serde(rename = "deliveriesCompleted")]
    pub deliveries_completed: Option<u32>,
}

impl Searchable for Personnel {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(&[&self.name], filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonnelFilter {
    pub query: String,
    pub role: Choice<PersonnelRole>,
}

impl PersonnelFilter {
    pub fn matches(&self, person: &Personnel) -> bool {
        person.matches_filter(&self.query) && self.role.matches(person.role)
    }

    pub fn apply<'a>(&self, items: &'a [Personnel]) -> Vec<&'a Personnel> {
        items.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Сводка для карточек над таблицей
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonnelSummary {
    pub total: usize,
    pub active: usize,
    pub drivers: usize,
    pub active_drivers: usize,
    pub on_leave: usize,
    pub average_rating: f32,
}

impl PersonnelSummary {
    pub fn of(items: &[Personnel]) -> Self {
        let count = |pred: &dyn Fn(&Personnel) -> bool| items.iter().filter(|p| pred(p)).count();
        let average_rating = if items.is_empty() {
            0.0
        } else {
            items.iter().map(|p| p.performance_rating).sum::<f32>() / items.len() as f32
        };

        Self {
            total: items.len(),
            active: count(&|p| p.status == PersonnelStatus::Active),
            drivers: count(&|p| p.role == PersonnelRole::Driver),
            active_drivers: count(&|p| {
                p.role == PersonnelRole::Driver && p.status == PersonnelStatus::Active
            }),
            on_leave: count(&|p| p.status == PersonnelStatus::OnLeave),
            average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a102_personnel::personnel;

    #[test]
    fn test_role_filter() {
        let filter = PersonnelFilter {
            query: String::new(),
            role: Choice::Only(PersonnelRole::Dispatcher),
        };
        assert!(filter
            .apply(personnel())
            .iter()
            .all(|p| p.role == PersonnelRole::Dispatcher));
        assert!(!filter.apply(personnel()).is_empty());
    }

    #[test]
    fn test_search_and_role() {
        let filter = PersonnelFilter {
            query: "smith".into(),
            role: Choice::Only(PersonnelRole::Driver),
        };
        let found = filter.apply(personnel());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "John Smith");

        let filter = PersonnelFilter {
            query: "smith".into(),
            role: Choice::Only(PersonnelRole::CustomerService),
        };
        assert!(filter.apply(personnel()).is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = PersonnelSummary::of(personnel());
        assert_eq!(summary.total, personnel().len());
        assert!(summary.active_drivers <= summary.drivers);
        assert!(summary.average_rating > 0.0 && summary.average_rating <= 5.0);

        let empty = PersonnelSummary::of(&[]);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.average_rating, 0.0);
    }
}
