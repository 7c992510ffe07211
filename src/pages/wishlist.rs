//! Trip Wishlist Page

use leptos::prelude::*;
use travana_core::summary;

use super::{use_trip_id, use_trip_overview};
use crate::components::TripTabs;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let trip_id = use_trip_id();
    let overview = use_trip_overview(trip_id);

    move || {
        overview.get().map(|overview| {
            let progress = summary::wishlist_progress(&overview.wishlist);
            let items = overview.wishlist.clone();
            view! {
                <section class="trip-wishlist">
                    <header class="page-header">
                        <h1>{overview.trip.title.clone()}" · Wishlist"</h1>
                    </header>
                    <TripTabs trip_id=overview.trip.id.clone() />
                    <p class="progress-text">{format!("{} of {} visited", progress.done, progress.total)}</p>
                    {if items.is_empty() {
                        view! { <p class="empty-state">"Your wishlist is empty."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="wishlist">
                                {items.into_iter().map(|item| view! {
                                    <li class:visited=item.visited>
                                        <h3>{item.title}</h3>
                                        {(!item.kind.is_empty()).then(|| view! {
                                            <span class="badge">{item.kind.clone()}</span>
                                        })}
                                        {(!item.location.is_empty()).then(|| view! {
                                            <p class="wish-location">{item.location.clone()}</p>
                                        })}
                                        {(!item.notes.is_empty()).then(|| view! {
                                            <p class="wish-notes">{item.notes.clone()}</p>
                                        })}
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_any()
                    }}
                </section>
            }
        })
    }
}
