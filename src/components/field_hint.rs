//! Inline validation message under a form field

use leptos::prelude::*;
use travana_core::validation::{Field, FormErrors};

#[component]
pub fn FieldHint(errors: ReadSignal<FormErrors>, field: Field) -> impl IntoView {
    move || {
        let message = errors.with(|e| e.message(field));
        (!message.is_empty()).then(|| view! { <p class="field-error">{message}</p> })
    }
}
