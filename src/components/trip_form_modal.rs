//! Trip Form Modal
//!
//! Manual trip creation, or editing an existing trip when `trip` is given.
//! Leaving both dates empty saves an unplanned trip.

use leptos::prelude::*;
use leptos::task::spawn_local;
use travana_core::models::Trip;
use travana_core::validation::{Field, FormErrors, TripForm};

use crate::api;
use crate::components::{DestinationInput, FieldHint};
use crate::context::use_app_context;

#[component]
pub fn TripFormModal(
    #[prop(optional)] trip: Option<Trip>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<Trip>,
) -> impl IntoView {
    let ctx = use_app_context();
    let editing = trip.as_ref().map(|t| t.id.clone());
    let is_edit = editing.is_some();
    let initial = trip.as_ref().map(TripForm::from_trip).unwrap_or_default();

    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let destination = RwSignal::new(initial.destination);
    let start_date = RwSignal::new(initial.start_date);
    let end_date = RwSignal::new(initial.end_date);
    let (errors, set_errors) = signal(FormErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = TripForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            destination: destination.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
        };
        let validated = match &editing {
            Some(_) => form.validate_update(),
            None => form.validate(),
        };
        let body = match validated {
            Ok(body) => body,
            Err(form_errors) => {
                set_errors.set(form_errors);
                return;
            }
        };
        set_errors.set(FormErrors::default());

        let api = ctx.api();
        let editing = editing.clone();
        spawn_local(async move {
            let saved = match editing {
                Some(trip_id) => api::update_trip(api, trip_id, body).await,
                None => api::create_trip(api, body).await,
            };
            if let Ok(trip) = saved {
                on_saved.run(trip);
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal trip-form-modal">
                <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                <h2>{if is_edit { "Update Trip" } else { "Plan a Trip" }}</h2>
                <form on:submit=on_submit>
                    <label>
                        "Title"
                        <input
                            type="text"
                            maxlength="50"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldHint errors=errors field=Field::Title />

                    <label>"Destination"</label>
                    <DestinationInput value=destination placeholder="Where to?" />
                    <FieldHint errors=errors field=Field::Destination />

                    <label>
                        "Description"
                        <textarea
                            maxlength="300"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <FieldHint errors=errors field=Field::Description />

                    <div class="date-row">
                        <label>
                            "Start date"
                            <input
                                type="date"
                                prop:value=move || start_date.get()
                                on:input=move |ev| start_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "End date"
                            <input
                                type="date"
                                prop:value=move || end_date.get()
                                on:input=move |ev| end_date.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <FieldHint errors=errors field=Field::EndDate />
                    <p class="form-note">"Leave both dates empty if you haven't planned them yet."</p>

                    <div class="modal-actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button type="submit" class="btn primary">
                            {if is_edit { "Save" } else { "Create Trip" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
