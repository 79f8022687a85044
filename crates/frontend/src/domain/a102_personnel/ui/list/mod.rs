use contracts::domain::a102_personnel::{
    personnel, Personnel, PersonnelFilter, PersonnelRole, PersonnelStatus, PersonnelSummary,
};
use contracts::domain::common::{Choice, Coded};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{
    all_choice, choice_options, DialogFooter, DialogHeader, PageHeader, StatCard, StatTone,
    StatusBadge, Tone,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};

fn personnel_status_tone(status: PersonnelStatus) -> Tone {
    match status {
        PersonnelStatus::Active => Tone::Success,
        PersonnelStatus::OnLeave => Tone::Warning,
        PersonnelStatus::Inactive => Tone::Neutral,
    }
}

fn role_icon(role: PersonnelRole) -> &'static str {
    match role {
        PersonnelRole::Driver => "truck",
        PersonnelRole::Dispatcher => "navigation",
        PersonnelRole::MaintenanceTechnician => "settings",
        PersonnelRole::CustomerService => "phone",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PersonnelList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let query = RwSignal::new(String::new());
    let role = all_choice::<PersonnelRole>();
    let filter = Memo::new(move |_| PersonnelFilter {
        query: query.get(),
        role: Choice::from_code(&role.get()),
    });

    let all = personnel();
    let summary = PersonnelSummary::of(all);

    let open_details = move |person: Personnel| {
        modal_stack.push(move |handle| {
            view! { <PersonnelDetails person=person.clone() handle=handle /> }.into_any()
        });
    };

    view! {
        <div class="panel">
            <PageHeader title="Personnel Management" subtitle="Manage drivers, dispatchers and other staff" />

            <div class="stat-grid">
                <StatCard
                    label="Total Staff"
                    icon_name="users"
                    value=Signal::derive(move || summary.total.to_string())
                    subtitle=format!("{} active", summary.active)
                />
                <StatCard
                    label="Drivers"
                    icon_name="truck"
                    value=Signal::derive(move || summary.drivers.to_string())
                    subtitle=format!("{} on duty", summary.active_drivers)
                />
                <StatCard
                    label="On Leave"
                    icon_name="clock"
                    value=Signal::derive(move || summary.on_leave.to_string())
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Average Rating"
                    icon_name="star"
                    value=Signal::derive(move || format!("{:.1}", summary.average_rating))
                    tone=StatTone::Good
                />
            </div>

            <div class="filter-bar">
                <Input value=query placeholder="Search personnel..." />
                <Select value=role>
                    {choice_options::<PersonnelRole>("All Roles")}
                </Select>
            </div>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Role"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Contact"</TableHeaderCell>
                            <TableHeaderCell>"Rating"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            filter
                                .get()
                                .apply(all)
                                .into_iter()
                                .cloned()
                                .map(|person| {
                                    let for_details = person.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <div>{person.name.clone()}</div>
                                                    <div class="text-muted">{person.id.clone()}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {icon(role_icon(person.role))}
                                                {person.role.display_name()}
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge
                                                    tone=personnel_status_tone(person.status)
                                                    label=person.status.display_name()
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <div>{person.email.clone()}</div>
                                                <div class="text-muted">{person.phone.clone()}</div>
                                            </TableCell>
                                            <TableCell>{format!("{:.1}", person.performance_rating)}</TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_details(for_details.clone())
                                                >
                                                    "View"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

#[component]
fn PersonnelDetails(person: Personnel, handle: ModalHandle) -> impl IntoView {
    let driver_block = (person.role == PersonnelRole::Driver).then(|| {
        view! {
            <div class="details-grid">
                <div class="form__group">
                    <span class="form__label">"Vehicle"</span>
                    <span>{person.assigned_vehicle.clone().unwrap_or_else(|| "-".to_string())}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Current Route"</span>
                    <span>{person.current_route.clone().unwrap_or_else(|| "-".to_string())}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Deliveries Completed"</span>
                    <span>{person.deliveries_completed.unwrap_or(0)}</span>
                </div>
            </div>
        }
    });

    view! {
        <DialogHeader title=person.name.clone() subtitle=person.role.display_name() handle=handle />
        <div class="modal-body">
            <div class="details-grid">
                <div class="form__group">
                    <span class="form__label">"Status"</span>
                    <StatusBadge
                        tone=personnel_status_tone(person.status)
                        label=person.status.display_name()
                    />
                </div>
                <div class="form__group">
                    <span class="form__label">"Hire Date"</span>
                    <span>{format_date(&person.hire_date)}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Email"</span>
                    <span>{person.email.clone()}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Phone"</span>
                    <span>{person.phone.clone()}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Performance"</span>
                    <span>{format!("{:.1} / 5", person.performance_rating)}</span>
                </div>
            </div>
            {driver_block}
        </div>
        <DialogFooter>
            <Button on_click=move |_| handle.close()>"Close"</Button>
        </DialogFooter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_an_icon() {
        for role in PersonnelRole::ALL {
            assert!(!role_icon(*role).is_empty());
        }
    }

    #[test]
    fn test_on_leave_is_highlighted() {
        assert_eq!(personnel_status_tone(PersonnelStatus::OnLeave), Tone::Warning);
        assert_eq!(personnel_status_tone(PersonnelStatus::Active), Tone::Success);
    }
}
