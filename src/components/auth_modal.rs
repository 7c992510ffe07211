//! Auth Modal Component
//!
//! Login and registration forms. Failures stay inside the modal; on
//! success the user lands on the page that fits their trip count.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use travana_core::auth::landing_route;
use travana_core::validation::{Field, FormErrors, LoginForm, RegisterForm};

use crate::api;
use crate::components::FieldHint;
use crate::context::{use_app_context, AppContext, AuthMode};
use crate::store::AppStateStoreFields;

#[component]
pub fn AuthModal() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (errors, set_errors) = signal(FormErrors::default());
    let server_error = Memo::new(move |_| ctx.store.session().read().error.clone());

    let reset = move || {
        name.set(String::new());
        password.set(String::new());
        set_errors.set(FormErrors::default());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = ctx.auth_modal.get_untracked() else {
            return;
        };
        let api = ctx.api();
        let navigate = navigate.clone();
        set_errors.set(FormErrors::default());

        let submitted = match mode {
            AuthMode::Login => LoginForm {
                email: email.get_untracked(),
                password: password.get_untracked(),
            }
            .validate()
            .map(|body| spawn_local(async move {
                if api::login(api, body).await.is_ok() {
                    land(ctx, navigate).await;
                }
            })),
            AuthMode::Register => RegisterForm {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            }
            .validate()
            .map(|body| spawn_local(async move {
                if api::register(api, body).await.is_ok() {
                    land(ctx, navigate).await;
                }
            })),
        };

        if let Err(form_errors) = submitted {
            set_errors.set(form_errors);
        }
    };

    let close = move |_: web_sys::MouseEvent| {
        reset();
        ctx.close_auth();
    };

    let switch_to = move |mode: AuthMode| {
        reset();
        ctx.open_auth(mode);
    };

    move || {
        let on_submit = on_submit.clone();
        ctx.auth_modal.get().map(|mode| {
            let is_register = mode == AuthMode::Register;
            view! {
                <div class="modal-backdrop">
                    <div class="modal auth-modal">
                        <button class="modal-close" on:click=close>"×"</button>
                        <h2>{if is_register { "Create your account" } else { "Welcome back" }}</h2>
                        <form on:submit=on_submit>
                            <Show when=move || is_register>
                                <label>
                                    "Name"
                                    <input
                                        type="text"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                </label>
                                <FieldHint errors=errors field=Field::Name />
                            </Show>
                            <label>
                                "Email"
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <FieldHint errors=errors field=Field::Email />
                            <label>
                                "Password"
                                <input
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </label>
                            <FieldHint errors=errors field=Field::Password />
                            {move || server_error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                            <button type="submit" class="btn primary">
                                {if is_register { "Sign Up" } else { "Login" }}
                            </button>
                        </form>
                        {if is_register {
                            view! {
                                <p class="auth-switch">
                                    "Already have an account? "
                                    <a on:click=move |_| switch_to(AuthMode::Login)>"Login"</a>
                                </p>
                            }.into_any()
                        } else {
                            view! {
                                <p class="auth-switch">
                                    "New to Travana? "
                                    <a on:click=move |_| switch_to(AuthMode::Register)>"Sign up"</a>
                                </p>
                            }.into_any()
                        }}
                    </div>
                </div>
            }
        })
    }
}

/// Close the modal and go where the user's trips suggest
async fn land(ctx: AppContext, navigate: impl Fn(&str, NavigateOptions)) {
    let trips = api::fetch_trips(ctx.api()).await.unwrap_or_default();
    let route = landing_route(&trips);
    log::info!("[AUTH] signed in, landing on {}", route);
    ctx.close_auth();
    navigate(&route, Default::default());
}
