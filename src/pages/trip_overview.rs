//! Trip Overview Page
//!
//! Header, editable trip details and a snapshot of every section.

use leptos::prelude::*;
use leptos_router::components::A;
use travana_core::auth::trip_route;
use travana_core::models::{Trip, TripDates, TripOverview};
use travana_core::summary::{self, ActivitySort};

use super::{use_trip_id, use_trip_overview};
use crate::components::{CategoryIcon, TripFormModal, TripTabs};

fn dates_text(trip: &Trip) -> String {
    match trip.dates() {
        Ok(TripDates::Planned { start, end }) => format!(
            "{} - {}",
            start.format("%a, %d %b %Y"),
            end.format("%a, %d %b %Y")
        ),
        Ok(TripDates::Unplanned) | Err(_) => "Dates not planned yet".to_string(),
    }
}

#[component]
pub fn TripOverviewPage() -> impl IntoView {
    let trip_id = use_trip_id();
    let overview = use_trip_overview(trip_id);
    let (editing, set_editing) = signal(false);

    let on_close = Callback::new(move |_: ()| set_editing.set(false));
    let on_saved = Callback::new(move |_: Trip| set_editing.set(false));

    move || {
        overview.get().map(|overview| {
            let trip = overview.trip.clone();
            view! {
                <section class="trip-overview">
                    <header class="trip-header">
                        <div>
                            <h1>{trip.title.clone()}</h1>
                            <p class="trip-destination">{trip.destination.clone()}</p>
                            <p class="trip-dates">
                                {dates_text(&trip)}
                                " · "
                                {trip.dates().map(summary::duration_label).unwrap_or_default()}
                            </p>
                        </div>
                        <button class="btn" on:click=move |_| set_editing.set(true)>"Edit Trip"</button>
                    </header>
                    <TripTabs trip_id=trip.id.clone() />
                    {(!trip.description.is_empty()).then(|| view! {
                        <p class="trip-description">{trip.description.clone()}</p>
                    })}
                    <Snapshot overview=overview.clone() />
                    <Show when=move || editing.get()>
                        <TripFormModal trip=overview.trip.clone() on_close=on_close on_saved=on_saved />
                    </Show>
                </section>
            }
        })
    }
}

/// Cards summarising each section of the trip
#[component]
fn Snapshot(overview: TripOverview) -> impl IntoView {
    let base = trip_route(&overview.trip.id);
    let upcoming: Vec<_> = summary::arrange_activities(&overview.activities, None, ActivitySort::DateAsc)
        .into_iter()
        .take(3)
        .collect();
    let budget = summary::budget(&overview.expenses, 0);
    let checklist = summary::checklist_progress(&overview.checklist_items);
    let wishlist = summary::wishlist_progress(&overview.wishlist);

    view! {
        <div class="snapshot-grid">
            <A href=format!("{}/activities", base) attr:class="snapshot-card">
                <h3>"Activities"</h3>
                <p class="snapshot-value">{overview.activities.len()}</p>
                <ul class="snapshot-list">
                    {upcoming.into_iter().map(|activity| view! {
                        <li>
                            <CategoryIcon category=activity.category />
                            {activity.name}
                        </li>
                    }).collect_view()}
                </ul>
            </A>
            <A href=format!("{}/budget", base) attr:class="snapshot-card">
                <h3>"Budget"</h3>
                <p class="snapshot-value">{summary::format_amount(budget.total)}</p>
                <p>{format!("{} expenses", overview.expenses.len())}</p>
            </A>
            <A href=format!("{}/checklist", base) attr:class="snapshot-card">
                <h3>"Checklist"</h3>
                <p class="snapshot-value">{format!("{}/{}", checklist.done, checklist.total)}</p>
                <progress max="100" value=checklist.percent()></progress>
            </A>
            <A href=format!("{}/wishlist", base) attr:class="snapshot-card">
                <h3>"Wishlist"</h3>
                <p class="snapshot-value">{format!("{}/{}", wishlist.done, wishlist.total)}</p>
                <p>"visited"</p>
            </A>
        </div>
    }
}
