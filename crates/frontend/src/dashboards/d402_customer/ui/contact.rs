use contracts::domain::a107_customer::customer_deliveries;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::PageHeader;
use crate::shared::config::use_config;
use crate::shared::icons::icon;

const TOPICS: &[(&str, &str)] = &[
    ("delivery", "Delivery problem"),
    ("damaged", "Damaged package"),
    ("reschedule", "Reschedule delivery"),
    ("other", "Something else"),
];

#[component]
pub fn ContactPanel() -> impl IntoView {
    let support = use_config().support;

    let topic = RwSignal::new(TOPICS[0].0.to_string());
    let order = RwSignal::new("none".to_string());
    let message = RwSignal::new(String::new());
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if message.get_untracked().trim().is_empty() {
            error.set(Some("Please describe the problem"));
            sent.set(false);
            return;
        }
        log::info!(
            "customer support request [{}] order {}",
            topic.get_untracked(),
            order.get_untracked()
        );
        error.set(None);
        sent.set(true);
        message.set(String::new());
    };

    view! {
        <div class="panel">
            <PageHeader title="Contact Support" icon_name="phone" subtitle="We usually answer within one business day" />

            <div class="settings-grid">
                <div class="card">
                    <h3 class="card__title">"Reach us directly"</h3>
                    <div class="contact-row">{icon("mail")}<span>{support.email.clone()}</span></div>
                    <div class="contact-row">{icon("phone")}<span>{support.phone.clone()}</span></div>
                    <div class="contact-row">{icon("clock")}<span>"Mon-Fri, 8:00-20:00"</span></div>
                </div>

                <form class="card" on:submit=on_submit>
                    <h3 class="card__title">"Send a message"</h3>
                    <div class="form__group">
                        <label class="form__label">"Topic"</label>
                        <Select value=topic>
                            {TOPICS
                                .iter()
                                .map(|&(code, label)| view! { <option value=code>{label}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Order"</label>
                        <Select value=order>
                            <option value="none">"Not about a specific order"</option>
                            {customer_deliveries()
                                .iter()
                                .map(|d| {
                                    let id = d.order_id.clone();
                                    let label = id.clone();
                                    view! { <option value=id>{label}</option> }
                                })
                                .collect_view()}
                        </Select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Message"</label>
                        <Textarea value=message placeholder="How can we help?" />
                    </div>
                    {move || error.get().map(|text| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <MessageBarBody>{text}</MessageBarBody>
                        </MessageBar>
                    })}
                    {move || sent.get().then(|| view! {
                        <MessageBar intent=MessageBarIntent::Success>
                            <MessageBarBody>"Thanks! Our team will get back to you shortly."</MessageBarBody>
                        </MessageBar>
                    })}
                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        {icon("message")}
                        "Send"
                    </Button>
                </form>
            </div>
        </div>
    }
}
