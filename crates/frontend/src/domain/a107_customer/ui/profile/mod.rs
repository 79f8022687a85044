use contracts::domain::a107_customer::{customer_profile, CustomerProfile};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

/// Проверка перед сохранением профиля
fn profile_problems(name: &str, email: &str, phone: &str) -> Vec<&'static str> {
    let mut problems = Vec::new();
    if name.trim().is_empty() {
        problems.push("Name is required");
    }
    if !email.contains('@') {
        problems.push("Email address is invalid");
    }
    if phone.chars().filter(|c| c.is_ascii_digit()).count() < 7 {
        problems.push("Phone number is too short");
    }
    problems
}

/// Profile and delivery preferences. Edits stay in the panel; saving logs them.
#[component]
pub fn CustomerPreferences() -> impl IntoView {
    let profile: &'static CustomerProfile = customer_profile();

    let name = RwSignal::new(profile.name.clone());
    let email = RwSignal::new(profile.email.clone());
    let phone = RwSignal::new(profile.phone.clone());

    let notify_email = RwSignal::new(profile.notifications.email);
    let notify_sms = RwSignal::new(profile.notifications.sms);
    let notify_push = RwSignal::new(profile.notifications.push);

    let leave_at_door = RwSignal::new(profile.delivery.leave_at_door);
    let require_signature = RwSignal::new(profile.delivery.require_signature);
    let allow_neighbor = RwSignal::new(profile.delivery.allow_neighbor_delivery);
    let instructions = RwSignal::new(profile.delivery.special_instructions.clone());

    let problems = RwSignal::new(Vec::<&'static str>::new());
    let saved = RwSignal::new(false);

    let save = move |_| {
        let found = profile_problems(
            &name.get_untracked(),
            &email.get_untracked(),
            &phone.get_untracked(),
        );
        saved.set(found.is_empty());
        if found.is_empty() {
            log::info!(
                "preferences saved for {}: email={} sms={} push={} door={} signature={} neighbor={}",
                profile.id,
                notify_email.get_untracked(),
                notify_sms.get_untracked(),
                notify_push.get_untracked(),
                leave_at_door.get_untracked(),
                require_signature.get_untracked(),
                allow_neighbor.get_untracked(),
            );
        } else {
            log::warn!("preferences not saved: {}", found.join("; "));
        }
        problems.set(found);
    };

    view! {
        <div class="panel">
            <PageHeader title="Preferences" subtitle="Manage your profile and delivery options">
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save Preferences"</Button>
            </PageHeader>

            {move || {
                let found = problems.get();
                if !found.is_empty() {
                    Some(view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <MessageBarBody>{found.join(". ")}</MessageBarBody>
                        </MessageBar>
                    }.into_any())
                } else if saved.get() {
                    Some(view! {
                        <MessageBar intent=MessageBarIntent::Success>
                            <MessageBarBody>"Your preferences have been saved"</MessageBarBody>
                        </MessageBar>
                    }.into_any())
                } else {
                    None
                }
            }}

            <div class="settings-grid">
                <div class="card">
                    <h3 class="card__title">{icon("user")}"Profile"</h3>
                    <div class="form__group">
                        <label class="form__label">"Full name"</label>
                        <Input value=name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Email"</label>
                        <Input value=email />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Phone"</label>
                        <Input value=phone />
                    </div>
                    <div class="text-muted">{icon("map-pin")}{profile.full_address()}</div>
                    <div class="text-muted">
                        {format!("Customer since {}", format_date(&profile.created_at))}
                    </div>
                </div>

                <div class="card">
                    <h3 class="card__title">{icon("bell")}"Notifications"</h3>
                    <Switch checked=notify_email label="Email updates" />
                    <Switch checked=notify_sms label="SMS updates" />
                    <Switch checked=notify_push label="Push notifications" />
                </div>

                <div class="card">
                    <h3 class="card__title">{icon("package")}"Delivery"</h3>
                    <Switch checked=leave_at_door label="Leave package at door" />
                    <Switch checked=require_signature label="Require signature" />
                    <Switch checked=allow_neighbor label="Allow delivery to a neighbor" />
                    <div class="form__group">
                        <label class="form__label">"Special instructions"</label>
                        <Textarea value=instructions placeholder="Gate code, safe place..." />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_profile_is_valid() {
        let p = customer_profile();
        assert!(profile_problems(&p.name, &p.email, &p.phone).is_empty());
    }

    #[test]
    fn test_profile_problems() {
        let found = profile_problems("  ", "nobody", "12-34");
        assert_eq!(found.len(), 3);
        assert_eq!(found[0], "Name is required");
    }
}
