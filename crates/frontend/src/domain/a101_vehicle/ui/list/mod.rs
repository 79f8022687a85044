use contracts::domain::a101_vehicle::{vehicles, Vehicle, VehicleFilter, VehicleStatus};
use contracts::domain::a110_dispatch::{dispatch_drivers, pending_orders, DispatchBoard};
use contracts::domain::common::{Choice, Coded};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a101_vehicle::ui::details::VehicleDetails;
use crate::domain::a110_dispatch::ui::DriverAssignment;
use crate::shared::components::{
    all_choice, choice_options, PageHeader, StatCard, StatTone, StatusBadge, Tone,
};
use crate::shared::format::format_thousands;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;

pub fn vehicle_status_tone(status: VehicleStatus) -> Tone {
    match status {
        VehicleStatus::Active => Tone::Success,
        VehicleStatus::Maintenance => Tone::Warning,
        VehicleStatus::Inactive => Tone::Neutral,
    }
}

fn average_mileage(items: &[Vehicle]) -> u32 {
    if items.is_empty() {
        return 0;
    }
    let total: u64 = items.iter().map(|v| v.mileage as u64).sum();
    (total / items.len() as u64) as u32
}

/// Fleet management panel: summary cards, filtered vehicle table, dialogs.
#[component]
#[allow(non_snake_case)]
pub fn VehicleList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let query = RwSignal::new(String::new());
    let status = all_choice::<VehicleStatus>();
    let filter = Memo::new(move |_| VehicleFilter {
        query: query.get(),
        status: Choice::from_code(&status.get()),
    });

    // Назначения живут, пока открыта вкладка автопарка
    let board = RwSignal::new(DispatchBoard::new(pending_orders(), dispatch_drivers()));

    let all = vehicles();
    let active = all.iter().filter(|v| v.status == VehicleStatus::Active).count();
    let in_maintenance = all
        .iter()
        .filter(|v| v.status == VehicleStatus::Maintenance)
        .count();

    let open_details = move |vehicle: Vehicle| {
        modal_stack.push(move |handle| {
            view! { <VehicleDetails vehicle=vehicle.clone() handle=handle /> }.into_any()
        });
    };

    let open_assignment = move |_| {
        modal_stack.push_with_class(Some("modal--wide".to_string()), move |handle| {
            view! { <DriverAssignment board=board handle=handle /> }.into_any()
        });
    };

    view! {
        <div class="panel">
            <PageHeader
                title="Fleet Management"
                subtitle="Manage your delivery vehicles and track their status"
            >
                <Button appearance=ButtonAppearance::Primary on_click=open_assignment>
                    {icon("users")}
                    {move || format!("Assign Driver ({})", board.with(|b| b.orders.len()))}
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Vehicles" icon_name="truck" value=Signal::derive(move || all.len().to_string()) />
                <StatCard
                    label="Active"
                    icon_name="check"
                    value=Signal::derive(move || active.to_string())
                    tone=StatTone::Good
                />
                <StatCard
                    label="In Maintenance"
                    icon_name="settings"
                    value=Signal::derive(move || in_maintenance.to_string())
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Average Mileage"
                    icon_name="navigation"
                    value=Signal::derive(move || format!("{} mi", format_thousands(average_mileage(all) as i64)))
                />
            </div>

            <div class="filter-bar">
                <Input value=query placeholder="Search vehicles..." />
                <Select value=status>
                    {choice_options::<VehicleStatus>("All Statuses")}
                </Select>
            </div>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"ID"</TableHeaderCell>
                            <TableHeaderCell>"Vehicle"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Driver"</TableHeaderCell>
                            <TableHeaderCell>"Fuel"</TableHeaderCell>
                            <TableHeaderCell>"Mileage"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows: Vec<Vehicle> =
                                filter.get().apply(all).into_iter().cloned().collect();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell>
                                            <span class="text-muted">"No vehicles match the current filters"</span>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|vehicle| {
                                    let for_details = vehicle.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{vehicle.id.clone()}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <div>{vehicle.name.clone()}</div>
                                                    <div class="text-muted">{vehicle.vehicle_type.clone()}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge
                                                    tone=vehicle_status_tone(vehicle.status)
                                                    label=vehicle.status.display_name()
                                                />
                                            </TableCell>
                                            <TableCell>
                                                {vehicle.driver.clone().unwrap_or_else(|| "Unassigned".to_string())}
                                            </TableCell>
                                            <TableCell>{format!("{}%", vehicle.fuel_level)}</TableCell>
                                            <TableCell>{format_thousands(vehicle.mileage as i64)}</TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_details(for_details.clone())
                                                >
                                                    "Details"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_mileage() {
        assert_eq!(average_mileage(&[]), 0);
        let avg = average_mileage(vehicles());
        assert!(avg > 28_750 && avg < 78_900);
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(vehicle_status_tone(VehicleStatus::Active), Tone::Success);
        assert_eq!(vehicle_status_tone(VehicleStatus::Maintenance), Tone::Warning);
    }
}
