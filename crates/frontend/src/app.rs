use crate::layout::navigation_bridge::NavigationBridge;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config_or_default;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::theme::ThemeProvider;
use crate::system::auth::AuthProvider;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Configuration first: the theme provider reads the default theme from it.
    provide_context(load_config_or_default());

    // Explicit dialog state for the whole app
    provide_context(ModalStackService::new());

    // One-shot intent slot for cross-view tab handoff
    provide_context(NavigationBridge::new());

    view! {
        <ConfigProvider>
            <ThemeProvider>
                <AuthProvider>
                    <Router>
                        <AppRoutes />
                        // Inside the Router: dialogs use the navigation bridge.
                        <ModalHost />
                    </Router>
                </AuthProvider>
            </ThemeProvider>
        </ConfigProvider>
    }
}
