//! AI Trip Modal
//!
//! Asks the backend to draft a whole itinerary. Dates are mandatory and the
//! trip length is capped before anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use travana_core::config::MAX_AI_TRIP_DAYS;
use travana_core::models::Trip;
use travana_core::validation::{AiTripForm, Field, FormErrors};

use crate::api;
use crate::components::{DestinationInput, FieldHint};
use crate::context::use_app_context;

#[component]
pub fn AiTripModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_generated: Callback<Trip>,
) -> impl IntoView {
    let ctx = use_app_context();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let origin = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let (errors, set_errors) = signal(FormErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = AiTripForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            origin: origin.get_untracked(),
            destination: destination.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
        };
        let body = match form.validate() {
            Ok(body) => body,
            Err(form_errors) => {
                set_errors.set(form_errors);
                return;
            }
        };
        set_errors.set(FormErrors::default());

        let api = ctx.api();
        spawn_local(async move {
            if let Ok(trip) = api::generate_ai_trip(api, body).await {
                on_generated.run(trip);
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal ai-trip-modal">
                <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                <h2>"Generate a Trip with AI"</h2>
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

                    <label>"From"</label>
                    <DestinationInput value=origin placeholder="Starting city" />
                    <FieldHint errors=errors field=Field::Origin />

                    <label>"To"</label>
                    <DestinationInput value=destination placeholder="Destination" />
                    <FieldHint errors=errors field=Field::Destination />

                    <label>
                        "What do you want from this trip?"
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
                    <p class="form-note">{format!("Trips can be at most {} days long.", MAX_AI_TRIP_DAYS)}</p>

                    <div class="modal-actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button type="submit" class="btn primary">"Generate"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
