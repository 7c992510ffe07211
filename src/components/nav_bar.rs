//! Top Navigation Bar

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use travana_core::config::ENTRY_ROUTE;

use crate::api;
use crate::context::{use_app_context, AuthMode};
use crate::store::AppStateStoreFields;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let user = Memo::new(move |_| ctx.store.session().read().user.clone());

    let on_logout = move |_: web_sys::MouseEvent| {
        api::logout(ctx.api());
        navigate(ENTRY_ROUTE, Default::default());
    };

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="brand">"Travana"</A>
            {move || match user.get() {
                Some(user) => view! {
                    <div class="nav-links">
                        <A href="/alltrips">"My Trips"</A>
                        <A href="/addtrips">"New Trip"</A>
                        <span class="nav-user">{user.name}</span>
                        <button class="btn" on:click=on_logout.clone()>"Logout"</button>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="nav-links">
                        <button class="btn" on:click=move |_| ctx.open_auth(AuthMode::Login)>"Login"</button>
                        <button class="btn primary" on:click=move |_| ctx.open_auth(AuthMode::Register)>"Sign Up"</button>
                    </div>
                }.into_any(),
            }}
        </nav>
    }
}
