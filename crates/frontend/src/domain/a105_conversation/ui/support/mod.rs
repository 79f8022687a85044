use contracts::domain::a111_client_order::recent_orders;
use contracts::navigation::ClientTab;
use leptos::prelude::*;
use thaw::*;

use crate::layout::navigation_bridge::use_navigate_to_tab;
use crate::shared::components::{DialogFooter, DialogHeader};
use crate::shared::modal_stack::ModalHandle;

const CATEGORIES: &[(&str, &str)] = &[
    ("general", "General Inquiry"),
    ("delivery", "Delivery Issue"),
    ("billing", "Billing Question"),
    ("technical", "Technical Support"),
    ("feedback", "Feedback"),
];

/// Contact Support. Submitting hands the user over to the message center.
#[component]
pub fn SupportDialog(handle: ModalHandle) -> impl IntoView {
    let go = use_navigate_to_tab::<ClientTab>();

    let subject = RwSignal::new(String::new());
    let category = RwSignal::new(CATEGORIES[0].0.to_string());
    let related_order = RwSignal::new("none".to_string());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if subject.get_untracked().trim().is_empty() {
            error.set(Some("Subject is required"));
            return;
        }
        if message.get_untracked().trim().is_empty() {
            error.set(Some("Message is required"));
            return;
        }
        log::info!(
            "support request [{}] {} (order {})",
            category.get_untracked(),
            subject.get_untracked(),
            related_order.get_untracked()
        );
        go(ClientTab::Communication);
    };

    view! {
        <DialogHeader
            title="Contact Support"
            subtitle="Send a message to our support team. We'll respond as soon as possible."
            handle=handle
        />
        <form on:submit=on_submit>
            <div class="modal-body">
                <div class="form__group">
                    <label class="form__label">"Subject"</label>
                    <Input value=subject placeholder="Enter message subject" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Category"</label>
                    <Select value=category>
                        {CATEGORIES
                            .iter()
                            .map(|&(code, label)| view! { <option value=code>{label}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Related Order"</label>
                    <Select value=related_order>
                        <option value="none">"No specific order"</option>
                        {recent_orders()
                            .iter()
                            .map(|order| {
                                let id = order.order_id.clone();
                                let label = id.clone();
                                view! { <option value=id>{label}</option> }
                            })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Message"</label>
                    <Textarea value=message placeholder="Type your message here" />
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
                    "Send Message"
                </Button>
            </DialogFooter>
        </form>
    }
}
