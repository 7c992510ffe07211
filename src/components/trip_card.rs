//! Trip Card Component

use leptos::prelude::*;
use leptos_router::components::A;
use travana_core::auth::trip_route;
use travana_core::models::{Trip, TripDates};
use travana_core::summary::duration_label;

/// Date range text, "Dates not set" for unplanned trips
fn date_range(trip: &Trip) -> String {
    match trip.dates() {
        Ok(TripDates::Planned { start, end }) => {
            format!("{} → {}", start.format("%d %b %Y"), end.format("%d %b %Y"))
        }
        Ok(TripDates::Unplanned) | Err(_) => "Dates not set".to_string(),
    }
}

#[component]
pub fn TripCard(trip: Trip) -> impl IntoView {
    let duration = trip.dates().map(duration_label).unwrap_or_default();
    let range = date_range(&trip);

    view! {
        <A href=trip_route(&trip.id) attr:class="trip-card">
            <h3>{trip.title}</h3>
            <p class="trip-destination">{trip.destination}</p>
            <p class="trip-dates">{range}</p>
            <span class="trip-duration">{duration}</span>
        </A>
    }
}
