//! Global Error Modal
//!
//! Shows the error raised by a failed request. "Go Home" is always offered;
//! "Close" only when the failing action allows dismissing it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use travana_core::config::ENTRY_ROUTE;
use travana_core::slices::UiAction;
use travana_core::{Action, Dispatcher};

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ErrorModal() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let error = Memo::new(move |_| ctx.store.ui().read().error.clone());

    let clear = move || ctx.dispatch().dispatch(Action::Ui(UiAction::ClearGlobalError));

    move || {
        let navigate = navigate.clone();
        error.get().map(|error| {
            let closable = error.show_close_button;
            view! {
                <div class="modal-backdrop">
                    <div class="modal error-modal" role="alertdialog">
                        <h2>"Oops!"</h2>
                        <p class="error-message">{error.message}</p>
                        <div class="modal-actions">
                            <button
                                class="btn primary"
                                on:click=move |_| {
                                    clear();
                                    navigate(ENTRY_ROUTE, Default::default());
                                }
                            >
                                "Go Home"
                            </button>
                            <Show when=move || closable>
                                <button class="btn" on:click=move |_| clear()>"Close"</button>
                            </Show>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
