//! Trip Checklist Page

use leptos::prelude::*;
use travana_core::models::ChecklistItem;
use travana_core::summary;

use super::{use_trip_id, use_trip_overview};
use crate::components::TripTabs;

/// Items grouped by their `type`, groups in first-seen order
fn grouped(items: &[ChecklistItem]) -> Vec<(String, Vec<ChecklistItem>)> {
    let mut groups: Vec<(String, Vec<ChecklistItem>)> = Vec::new();
    for item in items {
        let kind = if item.kind.is_empty() { "general" } else { item.kind.as_str() };
        match groups.iter_mut().find(|(k, _)| k == kind) {
            Some((_, list)) => list.push(item.clone()),
            None => groups.push((kind.to_string(), vec![item.clone()])),
        }
    }
    groups
}

#[component]
pub fn ChecklistPage() -> impl IntoView {
    let trip_id = use_trip_id();
    let overview = use_trip_overview(trip_id);

    move || {
        overview.get().map(|overview| {
            let progress = summary::checklist_progress(&overview.checklist_items);
            let groups = grouped(&overview.checklist_items);
            view! {
                <section class="trip-checklist">
                    <header class="page-header">
                        <h1>{overview.trip.title.clone()}" · Checklist"</h1>
                    </header>
                    <TripTabs trip_id=overview.trip.id.clone() />
                    <div class="progress-row">
                        <progress max="100" value=progress.percent()></progress>
                        <span>{format!("{} of {} done ({}%)", progress.done, progress.total, progress.percent())}</span>
                    </div>
                    {if groups.is_empty() {
                        view! { <p class="empty-state">"Nothing on the checklist yet."</p> }.into_any()
                    } else {
                        groups.into_iter().map(|(kind, items)| view! {
                            <div class="checklist-group">
                                <h2 class="checklist-kind">{kind}</h2>
                                <ul>
                                    {items.into_iter().map(|item| view! {
                                        <li class:done=item.completed>
                                            <input type="checkbox" prop:checked=item.completed disabled=true />
                                            <span>{item.text}</span>
                                            {(!item.notes.is_empty()).then(|| view! {
                                                <small class="item-notes">{item.notes.clone()}</small>
                                            })}
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        }).collect_view().into_any()
                    }}
                </section>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, kind: &str) -> ChecklistItem {
        ChecklistItem {
            id: id.into(),
            trip: "t1".into(),
            kind: kind.into(),
            text: id.into(),
            completed: false,
            notes: String::new(),
        }
    }

    #[test]
    fn test_grouped_keeps_first_seen_order() {
        let items = vec![item("a", "packing"), item("b", ""), item("c", "packing")];
        let groups = grouped(&items);
        let kinds: Vec<_> = groups.iter().map(|(k, list)| (k.as_str(), list.len())).collect();
        assert_eq!(kinds, vec![("packing", 2), ("general", 1)]);
    }
}
