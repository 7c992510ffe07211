//! Landing page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::{use_app_context, AuthMode};
use crate::store::AppStateStoreFields;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let signed_in = Memo::new(move |_| ctx.store.session().read().is_authenticated());

    view! {
        <section class="hero">
            <h1>"Travana"</h1>
            <p class="tagline">"Plan trips, track every activity and expense, and let AI draft the itinerary."</p>
            <Show
                when=move || signed_in.get()
                fallback=move || view! {
                    <div class="hero-actions">
                        <button class="btn primary" on:click=move |_| ctx.open_auth(AuthMode::Register)>
                            "Get Started"
                        </button>
                        <button class="btn" on:click=move |_| ctx.open_auth(AuthMode::Login)>"Login"</button>
                    </div>
                }
            >
                <div class="hero-actions">
                    <A href="/alltrips" attr:class="btn primary">"My Trips"</A>
                    <A href="/addtrips" attr:class="btn">"Plan a New Trip"</A>
                </div>
            </Show>
        </section>
    }
}
