//! Category Icon Component

use leptos::prelude::*;
use travana_core::category::ActivityCategory;

#[component]
pub fn CategoryIcon(category: ActivityCategory) -> impl IntoView {
    view! {
        <span class=format!("category-icon category-{}", category.as_str()) title=category.label()>
            {category.icon().glyph()}
        </span>
    }
}
