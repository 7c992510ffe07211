//! Trip Activities Page
//!
//! Filterable, sortable list of a trip's activities with create/edit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use travana_core::category::ActivityCategory;
use travana_core::models::{Activity, LinkedExpense};
use travana_core::summary::{self, ActivitySort};

use super::use_trip_id;
use crate::api;
use crate::components::{ActivityFormModal, CategoryIcon, TripTabs};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Which activity form is open
#[derive(Debug, Clone, PartialEq)]
enum Editor {
    Create,
    Edit(Activity),
}

fn when_text(activity: &Activity) -> String {
    activity
        .scheduled_at()
        .map(|at| at.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| "Time not set".to_string())
}

fn expense_text(activity: &Activity) -> Option<String> {
    match &activity.expense {
        Some(LinkedExpense::Details(details)) => details.amount.map(summary::format_amount),
        Some(LinkedExpense::Id(_)) | None => None,
    }
}

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let ctx = use_app_context();
    let trip_id = use_trip_id();
    let (category, set_category) = signal(None::<ActivityCategory>);
    let (sort, set_sort) = signal(ActivitySort::default());
    let (editor, set_editor) = signal(None::<Editor>);

    Effect::new(move |_| {
        let id = trip_id.get();
        if id.is_empty() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            if ctx.store.trips().read_untracked().find(&id).is_none() {
                let _ = api::fetch_trip_by_id(api, id.clone()).await;
            }
            let _ = api::fetch_activities(api, id).await;
        });
    });

    let title = Memo::new(move |_| {
        let id = trip_id.get();
        ctx.store
            .trips()
            .read()
            .find(&id)
            .map(|trip| trip.title.clone())
            .unwrap_or_default()
    });
    let activities = Memo::new(move |_| {
        let id = trip_id.get();
        let all = ctx.store.activities().read().for_trip(&id);
        summary::arrange_activities(&all, category.get(), sort.get())
    });
    let loading = Memo::new(move |_| ctx.store.activities().read().is_loading());

    let on_close = Callback::new(move |_: ()| set_editor.set(None));

    view! {
        <section class="trip-activities">
            <header class="page-header">
                <h1>{move || title.get()}" · Activities"</h1>
                <button class="btn primary" on:click=move |_| set_editor.set(Some(Editor::Create))>
                    "+ Add Activity"
                </button>
            </header>
            <TripTabs trip_id=trip_id />

            <div class="list-controls">
                <select on:change=move |ev| set_category.set(ActivityCategory::parse(&event_target_value(&ev)))>
                    <option value="">"All categories"</option>
                    {ActivityCategory::ALL.into_iter().map(|c| view! {
                        <option value=c.as_str()>{c.label()}</option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| set_sort.set(ActivitySort::parse(&event_target_value(&ev)))>
                    {ActivitySort::ALL.into_iter().map(|s| view! {
                        <option value=s.value()>{s.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show
                when=move || !activities.with(|a| a.is_empty())
                fallback=move || view! {
                    <p class="empty-state">
                        {move || if loading.get() { "Loading activities..." } else { "No activities yet." }}
                    </p>
                }
            >
                <ul class="activity-list">
                    <For
                        each=move || activities.get()
                        key=|activity| (activity.id.clone(), activity.updated_at.clone())
                        children=move |activity| {
                            let for_edit = activity.clone();
                            view! {
                                <li class="activity-item">
                                    <CategoryIcon category=activity.category />
                                    <div class="activity-body">
                                        <h3>{activity.name.clone()}</h3>
                                        <p class="activity-meta">
                                            {when_text(&activity)}
                                            " · "
                                            {activity.location.clone()}
                                        </p>
                                        {(!activity.description.is_empty()).then(|| view! {
                                            <p>{activity.description.clone()}</p>
                                        })}
                                    </div>
                                    {expense_text(&activity).map(|amount| view! {
                                        <span class="activity-expense">{amount}</span>
                                    })}
                                    <button
                                        class="btn small"
                                        on:click=move |_| set_editor.set(Some(Editor::Edit(for_edit.clone())))
                                    >
                                        "Edit"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            {move || editor.get().map(|editor| {
                let trip_id = trip_id.get_untracked();
                match editor {
                    Editor::Create => view! {
                        <ActivityFormModal trip_id=trip_id on_close=on_close />
                    }.into_any(),
                    Editor::Edit(activity) => view! {
                        <ActivityFormModal trip_id=trip_id activity=activity on_close=on_close />
                    }.into_any(),
                }
            })}
        </section>
    }
}
