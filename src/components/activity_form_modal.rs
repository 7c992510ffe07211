//! Activity Form Modal
//!
//! Create or edit one activity, optionally with the expense it caused.

use leptos::prelude::*;
use leptos::task::spawn_local;
use travana_core::category::{ActivityCategory, ExpenseCategory};
use travana_core::models::{Activity, DestinationSuggestion, TripId};
use travana_core::validation::{ActivityForm, Field, FormErrors};

use crate::api;
use crate::components::{DestinationInput, FieldHint};
use crate::context::use_app_context;

#[component]
pub fn ActivityFormModal(
    trip_id: TripId,
    #[prop(optional)] activity: Option<Activity>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let editing = activity.as_ref().map(|a| a.id.clone());
    let is_edit = editing.is_some();
    let initial = activity
        .as_ref()
        .map(ActivityForm::from_activity)
        .unwrap_or_default();

    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let location = RwSignal::new(initial.location);
    let coordinates = RwSignal::new(initial.coordinates);
    let category = RwSignal::new(initial.category);
    let date = RwSignal::new(initial.date);
    let time = RwSignal::new(initial.time);
    let show_expense = RwSignal::new(initial.show_expense);
    let expense_title = RwSignal::new(initial.expense_title);
    let expense_amount = RwSignal::new(initial.expense_amount);
    let expense_category = RwSignal::new(initial.expense_category);
    let expense_notes = RwSignal::new(initial.expense_notes);
    let (errors, set_errors) = signal(FormErrors::default());

    let on_pick = move |suggestion: DestinationSuggestion| coordinates.set(Some(suggestion.coordinates()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ActivityForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
            coordinates: coordinates.get_untracked(),
            category: category.get_untracked(),
            date: date.get_untracked(),
            time: time.get_untracked(),
            show_expense: show_expense.get_untracked(),
            expense_title: expense_title.get_untracked(),
            expense_amount: expense_amount.get_untracked(),
            expense_category: expense_category.get_untracked(),
            expense_notes: expense_notes.get_untracked(),
        };
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(form_errors) => {
                set_errors.set(form_errors);
                return;
            }
        };
        set_errors.set(FormErrors::default());

        let api = ctx.api();
        let trip_id = trip_id.clone();
        let editing = editing.clone();
        spawn_local(async move {
            let saved = match editing {
                Some(activity_id) => api::update_activity(api, trip_id, activity_id, draft).await,
                None => api::create_activity(api, trip_id, draft).await,
            };
            if saved.is_ok() {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal activity-form-modal">
                <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                <h2>{if is_edit { "Edit Activity" } else { "Add Activity" }}</h2>
                <form on:submit=on_submit>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldHint errors=errors field=Field::Name />

                    <label>"Location"</label>
                    <DestinationInput value=location placeholder="Where is it?" on_pick=on_pick />
                    <FieldHint errors=errors field=Field::Location />

                    <label>
                        "Category"
                        <select
                            prop:value=move || category.get()
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            <option value="">"Select a category"</option>
                            {ActivityCategory::ALL.into_iter().map(|c| view! {
                                <option value=c.as_str()>{c.label()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <FieldHint errors=errors field=Field::Category />

                    <div class="date-row">
                        <label>
                            "Date"
                            <input
                                type="date"
                                prop:value=move || date.get()
                                on:input=move |ev| date.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Time"
                            <input
                                type="time"
                                prop:value=move || time.get()
                                on:input=move |ev| time.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <FieldHint errors=errors field=Field::Date />
                    <FieldHint errors=errors field=Field::Time />

                    <label>
                        "Description"
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || show_expense.get()
                            on:change=move |ev| show_expense.set(event_target_checked(&ev))
                        />
                        "Add an expense"
                    </label>

                    <Show when=move || show_expense.get()>
                        <fieldset class="expense-fields">
                            <input
                                type="text"
                                placeholder="Expense title"
                                prop:value=move || expense_title.get()
                                on:input=move |ev| expense_title.set(event_target_value(&ev))
                            />
                            <input
                                type="number"
                                min="0"
                                step="any"
                                placeholder="Amount"
                                prop:value=move || expense_amount.get()
                                on:input=move |ev| expense_amount.set(event_target_value(&ev))
                            />
                            <FieldHint errors=errors field=Field::ExpenseAmount />
                            <select
                                prop:value=move || expense_category.get()
                                on:change=move |ev| expense_category.set(event_target_value(&ev))
                            >
                                <option value="">"Expense category"</option>
                                {ExpenseCategory::ALL.into_iter().map(|c| view! {
                                    <option value=c.as_str()>{c.as_str()}</option>
                                }).collect_view()}
                            </select>
                            <FieldHint errors=errors field=Field::ExpenseCategory />
                            <textarea
                                placeholder="Notes"
                                prop:value=move || expense_notes.get()
                                on:input=move |ev| expense_notes.set(event_target_value(&ev))
                            ></textarea>
                        </fieldset>
                    </Show>

                    <div class="modal-actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button type="submit" class="btn primary">
                            {if is_edit { "Save" } else { "Add" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
