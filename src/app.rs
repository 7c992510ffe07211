//! Travana Frontend App
//!
//! Store setup, session restore and the route table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;
use travana_core::auth::TokenStore;
use travana_core::AppState;

use crate::api::{self, BrowserTokenStore};
use crate::components::{AuthModal, ErrorModal, LoadingOverlay, NavBar, Protected};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    ActivitiesPage, AddTripsPage, AllTripsPage, BudgetPage, ChecklistPage, HomePage, NotFoundPage,
    TripOverviewPage, WishlistPage,
};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    // Hold protected routes until a stored token has been checked
    let mut initial = AppState::new();
    initial.session.restoring = BrowserTokenStore.get().is_some();
    let store = Store::new(initial);
    let ctx = AppContext::new(config, store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    log::info!("[APP] starting, api at {}", config.api_base_url);

    // Restore the session behind a stored token
    let api = ctx.api();
    spawn_local(async move {
        match api::restore_session(api).await {
            Some(Ok(user)) => log::info!("[APP] restored session for {}", user.email),
            Some(Err(message)) => log::warn!("[APP] session restore failed: {}", message),
            None => {}
        }
    });

    view! {
        <Router>
            <NavBar />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/addtrips") view=|| view! { <Protected><AddTripsPage /></Protected> } />
                    <Route path=path!("/alltrips") view=|| view! { <Protected><AllTripsPage /></Protected> } />
                    <Route path=path!("/trip/:id") view=|| view! { <Protected><TripOverviewPage /></Protected> } />
                    <Route path=path!("/trip/:id/activities") view=|| view! { <Protected><ActivitiesPage /></Protected> } />
                    <Route path=path!("/trip/:id/budget") view=|| view! { <Protected><BudgetPage /></Protected> } />
                    <Route path=path!("/trip/:id/checklist") view=|| view! { <Protected><ChecklistPage /></Protected> } />
                    <Route path=path!("/trip/:id/wishlist") view=|| view! { <Protected><WishlistPage /></Protected> } />
                </Routes>
            </main>
            <AuthModal />
            <ErrorModal />
            <LoadingOverlay />
        </Router>
    }
}
