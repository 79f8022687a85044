use leptos::prelude::*;
use thaw::*;

use crate::shared::components::PageHeader;
use crate::shared::theme::{use_theme, ThemeToggle};

/// System settings. Switches are local to the panel; only the theme is real.
#[component]
pub fn SystemSettings() -> impl IntoView {
    let theme = use_theme();

    let email_alerts = RwSignal::new(true);
    let sms_alerts = RwSignal::new(false);
    let auto_assign = RwSignal::new(true);
    let maintenance_reminders = RwSignal::new(true);
    let require_signature = RwSignal::new(false);

    let save = move |_| {
        log::info!(
            "settings saved: email={} sms={} auto_assign={} maintenance={} signature={}",
            email_alerts.get_untracked(),
            sms_alerts.get_untracked(),
            auto_assign.get_untracked(),
            maintenance_reminders.get_untracked(),
            require_signature.get_untracked(),
        );
    };

    view! {
        <div class="panel">
            <PageHeader title="System Settings" subtitle="Configure system preferences and access controls">
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save Changes"</Button>
            </PageHeader>

            <div class="settings-grid">
                <div class="card">
                    <h3 class="card__title">"Notifications"</h3>
                    <Switch checked=email_alerts label="Email alerts for delayed deliveries" />
                    <Switch checked=sms_alerts label="SMS alerts for drivers" />
                </div>
                <div class="card">
                    <h3 class="card__title">"Dispatch"</h3>
                    <Switch checked=auto_assign label="Auto-assign orders to nearest driver" />
                    <Switch checked=require_signature label="Require signature on delivery" />
                </div>
                <div class="card">
                    <h3 class="card__title">"Fleet"</h3>
                    <Switch checked=maintenance_reminders label="Maintenance reminders" />
                </div>
                <div class="card">
                    <h3 class="card__title">"Appearance"</h3>
                    <div class="settings-row">
                        <span>{move || format!("{} theme", theme.get_theme().display_name())}</span>
                        <ThemeToggle />
                    </div>
                </div>
            </div>
        </div>
    }
}
