use contracts::domain::a111_client_order::{next_order_id, ClientOrder, OrderDraft, OrderType, PackageSize};
use contracts::domain::common::Coded;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{choice_options_of, DialogFooter, DialogHeader};
use crate::shared::modal_stack::ModalHandle;

/// Create New Delivery Order. The new order is prepended to `orders`.
#[component]
pub fn CreateOrderDialog(orders: RwSignal<Vec<ClientOrder>>, handle: ModalHandle) -> impl IntoView {
    let defaults = OrderDraft::default();
    let order_type = RwSignal::new(defaults.order_type.code().to_string());
    let package_size = RwSignal::new(defaults.package_size.code().to_string());
    let pickup = RwSignal::new(String::new());
    let delivery = RwSignal::new(String::new());
    let delivery_date = RwSignal::new(String::new());
    let contact_name = RwSignal::new(String::new());
    let contact_phone = RwSignal::new(String::new());
    let instructions = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let draft = move || OrderDraft {
        order_type: OrderType::from_code(&order_type.get_untracked()).unwrap_or(defaults.order_type),
        pickup: pickup.get_untracked(),
        delivery: delivery.get_untracked(),
        package_size: PackageSize::from_code(&package_size.get_untracked())
            .unwrap_or(defaults.package_size),
        delivery_date: delivery_date.get_untracked(),
        contact_name: contact_name.get_untracked(),
        contact_phone: contact_phone.get_untracked(),
        instructions: instructions.get_untracked(),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = draft();
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            error.set(Some(format!("Please fill in: {}", missing.join(", "))));
            return;
        }

        let order = orders.with_untracked(|list| draft.to_order(next_order_id(list)));
        log::info!(
            "order {} created ({}, {})",
            order.order_id,
            draft.order_type.display_name(),
            draft.package_size.display_name()
        );
        orders.update(|list| list.insert(0, order));
        handle.close();
    };

    view! {
        <DialogHeader
            title="Create New Delivery Order"
            subtitle="Fill in the details to create a new delivery order."
            handle=handle
        />
        <form on:submit=on_submit>
            <div class="modal-body">
                <div class="form__group">
                    <label class="form__label">"Order Type"</label>
                    <Select value=order_type>{choice_options_of::<OrderType>()}</Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Pickup Address"</label>
                    <Input value=pickup placeholder="Enter pickup address" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Delivery Address"</label>
                    <Input value=delivery placeholder="Enter delivery address" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Package Size"</label>
                    <Select value=package_size>{choice_options_of::<PackageSize>()}</Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Delivery Date"</label>
                    <input class="form__input" type="date" bind:value=delivery_date />
                </div>
                <div class="form__group">
                    <label class="form__label">"Contact Name"</label>
                    <Input value=contact_name placeholder="Enter recipient name" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Contact Phone"</label>
                    <Input value=contact_phone placeholder="Enter recipient phone number" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Special Instructions"</label>
                    <Textarea value=instructions placeholder="Enter any special delivery instructions" />
                </div>
                {move || error.get().map(|text| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{text}</MessageBarBody>
                    </MessageBar>
                })}
            </div>
            <DialogFooter>
                <Button on_click=move |_| handle.close()>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                    "Create Order"
                </Button>
            </DialogFooter>
        </form>
    }
}
