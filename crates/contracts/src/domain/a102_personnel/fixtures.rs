use once_cell::sync::Lazy;

use super::aggregate::{Personnel, PersonnelRole, PersonnelStatus};

fn person(
    id: &str,
    name: &str,
    role: PersonnelRole,
    status: PersonnelStatus,
    contact: (&str, &str),
    hire_date: &str,
    performance_rating: f32,
) -> Personnel {
    Personnel {
        id: id.into(),
        name: name.into(),
        role,
        status,
        email: contact.0.into(),
        phone: contact.1.into(),
        hire_date: hire_date.into(),
        performance_rating,
        assigned_vehicle: None,
        current_route: None,
        deliveries_completed: None,
    }
}

fn driver(base: Personnel, vehicle: &str, route: Option<&str>, deliveries: u32) -> Personnel {
    Personnel {
        assigned_vehicle: Some(vehicle.into()),
        current_route: route.map(str::to_string),
        deliveries_completed: Some(deliveries),
        ..base
    }
}

static PERSONNEL: Lazy<Vec<Personnel>> = Lazy::new(|| {
    use PersonnelRole::*;
    use PersonnelStatus::*;
    vec![
        driver(person("P001", "John Smith", Driver, Active, ("john.smith@dss.example", "(555) 123-4567"), "2021-03-15", 4.8), "V001", Some("Downtown Route"), 1245),
        driver(person("P002", "Sarah Johnson", Driver, Active, ("sarah.johnson@dss.example", "(555) 234-5678"), "2021-06-01", 4.9), "V002", Some("North Route"), 1102),
        driver(person("P003", "Michael Brown", Driver, Active, ("michael.brown@dss.example", "(555) 345-6789"), "2022-01-10", 4.6), "V004", Some("East Route"), 876),
        driver(person("P004", "David Wilson", Driver, Active, ("david.wilson@dss.example", "(555) 456-7890"), "2020-11-20", 4.7), "V005", Some("South Route"), 1530),
        driver(person("P005", "Emily Davis", Driver, Active, ("emily.davis@dss.example", "(555) 567-8901"), "2022-04-05", 4.8), "V007", Some("West Route"), 690),
        driver(person("P006", "Robert Taylor", Driver, OnLeave, ("robert.taylor@dss.example", "(555) 678-9012"), "2019-08-12", 4.5), "V008", None, 2010),
        person("P007", "Jennifer Martinez", Dispatcher, Active, ("jennifer.martinez@dss.example", "(555) 789-0123"), "2020-02-17", 4.7),
        person("P008", "Christopher Lee", Dispatcher, Active, ("christopher.lee@dss.example", "(555) 890-1234"), "2021-09-30", 4.4),
        person("P009", "Thomas Anderson", MaintenanceTechnician, Active, ("thomas.anderson@dss.example", "(555) 901-2345"), "2018-05-22", 4.6),
        person("P010", "Daniel Thompson", MaintenanceTechnician, Inactive, ("daniel.thompson@dss.example", "(555) 012-3456"), "2019-12-03", 4.1),
        person("P011", "Jessica White", CustomerService, Active, ("jessica.white@dss.example", "(555) 321-6540"), "2022-07-18", 4.9),
        person("P012", "Amanda Harris", CustomerService, OnLeave, ("amanda.harris@dss.example", "(555) 432-7651"), "2023-01-09", 4.3),
    ]
});

pub fn personnel() -> &'static [Personnel] {
    &PERSONNEL
}
