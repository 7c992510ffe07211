//! Routed Pages

mod activities;
mod add_trips;
mod all_trips;
mod budget;
mod checklist;
mod home;
mod not_found;
mod trip_overview;
mod wishlist;

pub use activities::ActivitiesPage;
pub use add_trips::AddTripsPage;
pub use all_trips::AllTripsPage;
pub use budget::BudgetPage;
pub use checklist::ChecklistPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use trip_overview::TripOverviewPage;
pub use wishlist::WishlistPage;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use travana_core::models::TripOverview;

use crate::api;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// `:id` of the current trip route
pub fn use_trip_id() -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.read().get("id").unwrap_or_default())
}

/// Fetch the overview whenever the trip changes; yields it once loaded
pub fn use_trip_overview(trip_id: Memo<String>) -> Memo<Option<TripOverview>> {
    let ctx = use_app_context();

    Effect::new(move |_| {
        let id = trip_id.get();
        if id.is_empty() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let _ = api::fetch_trip_overview(api, id).await;
        });
    });

    Memo::new(move |_| {
        let id = trip_id.get();
        ctx.store.trips().read().overview_for(&id).cloned()
    })
}
