//! Section tabs shown on every trip page

use leptos::prelude::*;
use leptos_router::components::A;
use travana_core::auth::trip_route;

const TABS: &[(&str, &str)] = &[
    ("", "Overview"),
    ("/activities", "Activities"),
    ("/budget", "Budget"),
    ("/checklist", "Checklist"),
    ("/wishlist", "Wishlist"),
];

fn tab_href(trip_id: &str, suffix: &str) -> String {
    format!("{}{}", trip_route(trip_id), suffix)
}

/// Links follow `trip_id`, so a page reused across trips keeps pointing at the current one.
#[component]
pub fn TripTabs(#[prop(into)] trip_id: Signal<String>) -> impl IntoView {
    view! {
        <div class="trip-tabs">
            {TABS.iter().map(|&(suffix, label)| view! {
                <A href=move || trip_id.with(|id| tab_href(id, suffix)) exact=true attr:class="trip-tab">{label}</A>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_links_follow_trip_change() {
        let owner = Owner::new();
        owner.set();

        let (trip_id, set_trip_id) = signal("a".to_string());
        let trip_id: Signal<String> = trip_id.into();
        let links = Memo::new(move |_| {
            TABS.iter()
                .map(|&(suffix, _)| trip_id.with(|id| tab_href(id, suffix)))
                .collect::<Vec<_>>()
        });
        assert_eq!(links.get()[1], "/trip/a/activities");

        set_trip_id.set("b".to_string());
        assert_eq!(links.get()[0], "/trip/b");
        assert_eq!(links.get()[1], "/trip/b/activities");
    }
}
