use leptos::prelude::*;

use crate::shared::config::use_config;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer data-zone="footer" class="footer">
            <span>{format!("© {year} {}", config.app.title)}</span>
            <span class="footer__support">
                {format!("Support: {} · {}", config.support.email, config.support.phone)}
            </span>
        </footer>
    }
}
