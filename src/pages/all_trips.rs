//! All trips of the signed-in user

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use travana_core::Status;

use crate::api;
use crate::components::TripCard;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn AllTripsPage() -> impl IntoView {
    let ctx = use_app_context();
    let trips = Memo::new(move |_| ctx.store.trips().read().trips.to_vec());
    let loaded = Memo::new(move |_| ctx.store.trips().read().status == Status::Succeeded);

    // Load on mount
    let api = ctx.api();
    spawn_local(async move {
        if let Ok(trips) = api::fetch_trips(api).await {
            log::info!("[TRIPS] loaded {} trips", trips.len());
        }
    });

    view! {
        <section class="all-trips">
            <header class="page-header">
                <h1>"My Trips"</h1>
                <A href="/addtrips" attr:class="btn primary">"+ New Trip"</A>
            </header>
            <Show
                when=move || !trips.with(|t| t.is_empty())
                fallback=move || view! {
                    <Show when=move || loaded.get()>
                        <div class="empty-state">
                            <p>"No trips yet."</p>
                            <A href="/addtrips" attr:class="btn primary">"Plan your first trip"</A>
                        </div>
                    </Show>
                }
            >
                <div class="trip-grid">
                    <For
                        each=move || trips.get()
                        key=|trip| (trip.id.clone(), trip.updated_at.clone())
                        children=move |trip| view! { <TripCard trip=trip /> }
                    />
                </div>
            </Show>
        </section>
    }
}
