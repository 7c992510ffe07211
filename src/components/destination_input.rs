//! Destination Input Component
//!
//! Text input with debounced place suggestions. The bookkeeping (debounce
//! generations, skip-after-select) lives in `travana_core::autosuggest`;
//! this component only owns the timer and the markup.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use travana_core::autosuggest::Autosuggest;
use travana_core::config::SUGGEST_DEBOUNCE_MS;
use travana_core::models::DestinationSuggestion;

use crate::api;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Destination input with autosuggest
///
/// Props:
/// - value: text of the input, written on typing and on selection
/// - on_pick: called with the chosen suggestion (e.g. to keep coordinates)
#[component]
pub fn DestinationInput(
    value: RwSignal<String>,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] on_pick: Option<Callback<DestinationSuggestion>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let dispatch = ctx.dispatch();
    let suggest = StoredValue::new(Autosuggest::default());
    let (focused, set_focused) = signal(false);

    let suggestions = Memo::new(move |_| ctx.store.destinations().read().suggestions.clone());

    // Every change of the value counts, including the one a selection
    // writes, so the controller can swallow it.
    Effect::new(move |previous: Option<()>| {
        let text = value.get();
        if previous.is_none() {
            return;
        }
        let Some(pending) = suggest.try_update_value(|s| s.on_input(&text)).flatten() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            TimeoutFuture::new(SUGGEST_DEBOUNCE_MS).await;
            if !suggest.with_value(|s| s.is_current(&pending)) {
                return;
            }
            let _ = api::fetch_suggestions(api, pending.query).await;
        });
    });

    let pick = move |suggestion: DestinationSuggestion| {
        if let Some(name) = suggest.try_update_value(|s| s.select(&dispatch, &suggestion)) {
            value.set(name);
        }
        if let Some(on_pick) = on_pick {
            on_pick.run(suggestion);
        }
    };

    view! {
        <div class="destination-input">
            <input
                type="text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| {
                    set_focused.set(false);
                    suggest.update_value(|s| s.blur(&dispatch));
                }
            />
            <Show when=move || focused.get() && !suggestions.with(|s| s.is_empty())>
                <ul class="suggestion-list">
                    <For
                        each=move || suggestions.get()
                        key=|s| s.display_name.clone()
                        children=move |suggestion| {
                            let label = suggestion.display_name.clone();
                            view! {
                                // mousedown fires before the input blurs
                                <li
                                    class="suggestion-item"
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        pick(suggestion.clone());
                                    }
                                >
                                    {label}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
