//! Global loading overlay, shown while any tracked request runs

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let store = use_app_store();
    let loading = Memo::new(move |_| store.ui().read().is_loading());

    view! {
        <Show when=move || loading.get()>
            <div class="loading-overlay" role="status" aria-live="polite">
                <div class="spinner"></div>
            </div>
        </Show>
    }
}
