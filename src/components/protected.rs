//! Protected Route Wrapper
//!
//! Renders its children only for a signed-in user. While a stored session
//! is being restored nothing is rendered; otherwise visitors are sent back
//! to the entry route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use travana_core::auth::Guard;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| store.session().read().guard());

    Effect::new(move |_| {
        if let Guard::Redirect(to) = decision.get() {
            log::info!("[ROUTER] not signed in, redirecting to {}", to);
            navigate(
                to,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match decision.get() {
        Guard::Allow => children().into_any(),
        Guard::Wait | Guard::Redirect(_) => ().into_any(),
    }
}
