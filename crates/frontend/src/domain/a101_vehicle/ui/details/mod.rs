use contracts::domain::a101_vehicle::Vehicle;
use contracts::domain::common::Coded;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a101_vehicle::ui::list::vehicle_status_tone;
use crate::shared::components::{DialogFooter, DialogHeader, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::format::format_thousands;
use crate::shared::modal_stack::ModalHandle;

/// Read-only card of one vehicle, opened from the fleet table.
#[component]
pub fn VehicleDetails(vehicle: Vehicle, handle: ModalHandle) -> impl IntoView {
    let Vehicle {
        id,
        name,
        vehicle_type,
        status,
        last_maintenance,
        next_maintenance,
        driver,
        location,
        fuel_level,
        mileage,
    } = vehicle;

    view! {
        <DialogHeader title=name subtitle=format!("{id} · {vehicle_type}") handle=handle />
        <div class="modal-body">
            <div class="details-grid">
                <div class="form__group">
                    <span class="form__label">"Status"</span>
                    <StatusBadge tone=vehicle_status_tone(status) label=status.display_name() />
                </div>
                <div class="form__group">
                    <span class="form__label">"Mileage"</span>
                    <span>{format!("{} mi", format_thousands(mileage as i64))}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Last Maintenance"</span>
                    <span>{format_date(&last_maintenance)}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Next Maintenance"</span>
                    <span>{format_date(&next_maintenance)}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Driver"</span>
                    <span>{driver.unwrap_or_else(|| "Unassigned".to_string())}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Route"</span>
                    <span>{location.unwrap_or_else(|| "-".to_string())}</span>
                </div>
            </div>
            <div class="form__group">
                <span class="form__label">{format!("Fuel Level: {fuel_level}%")}</span>
                <div class="progress">
                    <div class="progress__bar" style=format!("width: {fuel_level}%")></div>
                </div>
            </div>
        </div>
        <DialogFooter>
            <Button on_click=move |_| handle.close()>"Close"</Button>
        </DialogFooter>
    }
}
