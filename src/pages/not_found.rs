use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"This page wandered off the map."</p>
            <A href="/" attr:class="btn primary">"Go Home"</A>
        </section>
    }
}
