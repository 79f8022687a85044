use crate::dashboards::d400_admin::AdminDashboard;
use crate::dashboards::d401_client::ClientDashboard;
use crate::dashboards::d402_customer::CustomerDashboard;
use crate::dashboards::d403_driver::DriverDashboard;
use crate::system::pages::home::HomePage;
use crate::system::pages::placeholder::{ErrorPlaceholder, LoadingPlaceholder};
use crate::system::pages::sign_in::SignInPage;
use crate::system::pages::sign_up::SignUpPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

/// Seven static routes; anything else redirects home.
///
/// A single Suspense boundary around the outlet gives one loading
/// placeholder for every view, and the ErrorBoundary keeps a failed view
/// from rendering a blank screen.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <main class="app-main">
            <Suspense fallback=|| view! { <LoadingPlaceholder /> }>
                <ErrorBoundary fallback=|errors| view! { <ErrorPlaceholder errors=errors /> }>
                    <Routes fallback=|| view! { <Redirect path="/" /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/admin") view=AdminDashboard />
                        <Route path=path!("/client") view=ClientDashboard />
                        <Route path=path!("/customer") view=CustomerDashboard />
                        <Route path=path!("/driver") view=DriverDashboard />
                        <Route path=path!("/signin") view=SignInPage />
                        <Route path=path!("/signup") view=SignUpPage />
                    </Routes>
                </ErrorBoundary>
            </Suspense>
        </main>
    }
}
