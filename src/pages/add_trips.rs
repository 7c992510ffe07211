//! New trip page: plan by hand or let the AI draft it

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use travana_core::auth::trip_route;
use travana_core::models::Trip;

use crate::components::{AiTripModal, TripFormModal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Planner {
    Manual,
    Ai,
}

#[component]
pub fn AddTripsPage() -> impl IntoView {
    let navigate = use_navigate();
    let (open, set_open) = signal(None::<Planner>);

    let on_close = Callback::new(move |_: ()| set_open.set(None));
    let on_created = Callback::new(move |trip: Trip| {
        set_open.set(None);
        navigate(&trip_route(&trip.id), Default::default());
    });

    view! {
        <section class="add-trips">
            <h1>"Start a New Trip"</h1>
            <div class="planner-options">
                <button class="planner-card" on:click=move |_| set_open.set(Some(Planner::Manual))>
                    <h2>"Plan it yourself"</h2>
                    <p>"Create an empty trip and add activities as you go."</p>
                </button>
                <button class="planner-card ai" on:click=move |_| set_open.set(Some(Planner::Ai))>
                    <h2>"Generate with AI"</h2>
                    <p>"Tell us where and when; get a day-by-day plan with estimated costs."</p>
                </button>
            </div>
            {move || match open.get() {
                Some(Planner::Manual) => view! {
                    <TripFormModal on_close=on_close on_saved=on_created />
                }.into_any(),
                Some(Planner::Ai) => view! {
                    <AiTripModal on_close=on_close on_generated=on_created />
                }.into_any(),
                None => ().into_any(),
            }}
        </section>
    }
}
