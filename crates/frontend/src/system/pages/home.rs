use contracts::enums::view::View;
use leptos::prelude::*;
use thaw::*;

use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::layout::navigation_bridge::{use_navigate_with_intent_key, use_navigation_bridge};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;

struct RoleCardInfo {
    view: View,
    icon: &'static str,
    accent: &'static str,
    description: &'static str,
}

const ROLES: [RoleCardInfo; 4] = [
    RoleCardInfo {
        view: View::Admin,
        icon: "shield",
        accent: "role-card--admin",
        description: "Manage fleet, personnel, analytics, and system settings. Full control over the delivery service platform.",
    },
    RoleCardInfo {
        view: View::Client,
        icon: "users",
        accent: "role-card--client",
        description: "Create and manage orders, track deliveries, communicate with delivery teams, and handle invoices.",
    },
    RoleCardInfo {
        view: View::Customer,
        icon: "user",
        accent: "role-card--customer",
        description: "Track your delivery in real-time, view ETA updates, and communicate with drivers or support.",
    },
    RoleCardInfo {
        view: View::Driver,
        icon: "truck",
        accent: "role-card--driver",
        description: "Accept delivery orders, follow your active route, update delivery status, and review your earnings.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    // Drains any intent addressed elsewhere.
    use_navigation_bridge().take_for(View::Home);

    let config = use_config();
    let go = use_navigate_with_intent_key();

    let cards = ROLES
        .iter()
        .map(|role| {
            let go = go.clone();
            let view = role.view;
            let name = view.display_name();
            view! {
                <div class=format!("role-card {}", role.accent)>
                    <div class="role-card__icon">{icon(role.icon)}</div>
                    <h2 class="role-card__title">{name}</h2>
                    <p class="role-card__description">{role.description}</p>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| go(view.key(), None, None)
                    >
                        {format!("Access {name} Dashboard")}
                    </Button>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="home--landing">
            <Header />
            <section class="hero">
                <h1 class="hero__title">{config.app.title.clone()}</h1>
                <p class="hero__subtitle">{config.app.subtitle.clone()}</p>
                <p class="hero__hint">"Please select your role to access the appropriate dashboard"</p>
            </section>
            <section class="role-grid">{cards}</section>
            <Footer />
        </PageFrame>
    }
}
